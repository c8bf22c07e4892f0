//! Diagnostics emitted while deriving the component forest.

use forge_core::ComponentId;
use thiserror::Error;

/// A non-fatal structural anomaly found while building the forest.
///
/// Warnings accompany a still-produced tree; the offending record is placed at
/// the root level instead of being dropped. The editor shell decides how to
/// surface the messages (typically the browser console).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeWarning {
    /// A record references a parent id that does not exist in the collection.
    #[error("Parent {parent_id} not found for component {id}, attaching to root")]
    ParentNotFound {
        id: ComponentId,
        parent_id: ComponentId,
    },

    /// Attaching the record to its parent would close a parent-reference cycle.
    #[error("Cycle detected involving component {id}, attaching to root")]
    CycleDetected { id: ComponentId },
}
