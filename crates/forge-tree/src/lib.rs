//! Component forest construction.
//!
//! The editor persists a design as a flat, ordered list of records where
//! hierarchy is a `parent_id` link. This crate rebuilds the nested structure:
//! it validates referential integrity, breaks parent-reference cycles, and
//! reports anomalies as warnings rather than errors so the editor can always
//! render a best-effort result.
//!
//! ```
//! use forge_core::ComponentRecord;
//! use forge_tree::ComponentTree;
//!
//! let records = vec![
//!     ComponentRecord::new("root", "div"),
//!     ComponentRecord::new("child", "text").with_parent("root"),
//! ];
//! let tree = ComponentTree::build(&records);
//! assert_eq!(tree.roots().len(), 1);
//! assert!(tree.warnings().is_empty());
//! ```

pub mod builder;
pub mod normalize;
pub mod warning;

pub use builder::{ComponentTree, NodeId, TreeNode};
pub use warning::TreeWarning;
