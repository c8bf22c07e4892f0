//! Design-document store.
//!
//! A [`Document`] owns the flat, ordered component record list that the tree
//! builder and code emitters consume, and provides the mutations the editor
//! shell performs: placing library components, moving/resizing, reordering,
//! reparenting, and grouping. The document enforces what the always-total
//! tree builder only warns about — reparenting that would close a cycle is
//! rejected up front.

pub mod demo;
pub mod document;
pub mod error;
pub mod library;

pub use document::{Document, LayerDirection};
pub use error::DocumentError;
pub use library::{ComponentLibrary, LibraryComponent};
