//! Code generators for the supported output targets.

mod html;
mod react;
mod tailwind;

pub use html::HtmlGenerator;
pub use react::ReactGenerator;
pub use tailwind::TailwindGenerator;

use crate::options::CodegenOptions;
use forge_tree::ComponentTree;

/// Common trait for code generators.
///
/// Generation is total: every well-formed tree renders to a string, and
/// malformed pieces (missing maps, unknown kinds) degrade to defaults rather
/// than failing.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Render the forest into complete source text.
    fn generate(&self, tree: &ComponentTree, options: &CodegenOptions) -> String;
}
