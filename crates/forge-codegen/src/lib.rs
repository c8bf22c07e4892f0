//! Code generation from Forge designs to web framework markup.
//!
//! This crate renders a component forest into one of three textual targets:
//!
//! - **React** — a JSX function-component module with inline style objects
//! - **HTML** — a standalone document with a per-component stylesheet
//! - **Tailwind** — an HTML fragment styled through utility classes
//!
//! All backends share the tag table, attribute filtering, and the positioning
//! policy that pins canvas-placed components with absolute coordinates while
//! leaving flex/grid layout containers in normal flow.
//!
//! # Example
//!
//! ```
//! use forge_codegen::{generate_code, CodegenOptions, Framework};
//! use forge_core::ComponentRecord;
//!
//! let records = vec![ComponentRecord::new("hello", "text")
//!     .with_prop("children", "Hello")
//!     .with_style("display", "flex")];
//! let options = CodegenOptions {
//!     framework: Framework::React,
//!     ..CodegenOptions::default()
//! };
//! let code = generate_code(&records, &options);
//! assert!(code.contains("export default MyComponent"));
//! ```

pub mod attr;
pub mod generators;
pub mod options;
pub mod style;
pub mod tags;

pub use generators::{CodeGenerator, HtmlGenerator, ReactGenerator, TailwindGenerator};
pub use options::{CodegenOptions, Framework};

use forge_core::ComponentRecord;
use forge_tree::ComponentTree;

/// Build the component tree from flat records and render it.
///
/// Tree warnings are discarded here; callers that surface diagnostics should
/// build the tree themselves and use [`generate_from_tree`].
pub fn generate_code(records: &[ComponentRecord], options: &CodegenOptions) -> String {
    let tree = ComponentTree::build(records);
    generate_from_tree(&tree, options)
}

/// Render an already-built component tree.
pub fn generate_from_tree(tree: &ComponentTree, options: &CodegenOptions) -> String {
    match options.framework {
        Framework::React => ReactGenerator::new().generate(tree, options),
        Framework::Html => HtmlGenerator::new().generate(tree, options),
        Framework::Tailwind => TailwindGenerator::new().generate(tree, options),
    }
}
