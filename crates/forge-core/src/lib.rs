//! Core data model for the Forge design engine.
//!
//! A design is a flat, ordered collection of [`ComponentRecord`]s. Each record
//! optionally points at a parent record by id; the tree builder in
//! `forge-tree` derives the nested structure from those links, and the
//! emitters in `forge-codegen` turn the result into source text. Nothing in
//! this crate performs I/O or mutates caller-owned data.

pub mod component;
pub mod types;
pub mod value;

pub use component::ComponentRecord;
pub use types::{ComponentId, Point, Size};
pub use value::{PropMap, PropValue, StyleMap};
