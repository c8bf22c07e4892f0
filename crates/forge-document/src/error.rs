//! Document mutation errors.

use forge_core::ComponentId;
use thiserror::Error;

/// Errors produced by document mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The referenced component does not exist.
    #[error("Unknown component: {0}")]
    UnknownComponent(ComponentId),

    /// The referenced parent does not exist.
    #[error("Unknown parent component: {0}")]
    UnknownParent(ComponentId),

    /// The requested reparenting would make a component its own ancestor.
    #[error("Attaching {id} to {parent} would create a cycle")]
    WouldCreateCycle {
        id: ComponentId,
        parent: ComponentId,
    },

    /// A group needs at least one member.
    #[error("Cannot create a group from an empty selection")]
    EmptyGroup,
}
