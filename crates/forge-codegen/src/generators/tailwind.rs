//! Tailwind-flavored HTML fragment generator.
//!
//! Utility mode is approximate by design: each component kind maps to a fixed
//! base class string, and a handful of well-known style values translate to
//! their utility equivalents. Everything else produces no classes rather than
//! attempting a full CSS-to-utility compilation.

use forge_core::{ComponentRecord, PropValue};
use forge_tree::{ComponentTree, NodeId};
use smallvec::SmallVec;

use super::CodeGenerator;
use crate::attr::html_attributes;
use crate::options::CodegenOptions;
use crate::tags::tag_for;

const INDENT: &str = "    ";

/// Generates an HTML fragment styled with Tailwind utility classes.
pub struct TailwindGenerator;

impl TailwindGenerator {
    pub fn new() -> Self {
        Self
    }

    fn render_node(&self, tree: &ComponentTree, id: NodeId, depth: usize, options: &CodegenOptions) -> String {
        let Some(node) = tree.get(id) else {
            return String::new();
        };
        let indent = INDENT.repeat(depth + 1);
        let tag = tag_for(&node.record.kind);

        let mut opening = format!("{indent}<{tag}");
        let attrs = html_attributes(&node.record.props);
        if !attrs.is_empty() {
            opening.push(' ');
            opening.push_str(&attrs);
        }
        let classes = utility_classes(&node.record, options.include_styles);
        if !classes.is_empty() {
            opening.push_str(&format!(" class=\"{classes}\""));
        }

        if !node.children.is_empty() {
            let children = node
                .children
                .iter()
                .map(|&child| self.render_node(tree, child, depth + 1, options))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{opening}>\n{children}\n{indent}</{tag}>")
        } else if let Some(text) = node.record.text_content() {
            format!("{opening}>{text}</{tag}>")
        } else {
            format!("{opening}></{tag}>")
        }
    }
}

impl Default for TailwindGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for TailwindGenerator {
    fn framework_name(&self) -> &'static str {
        "tailwind"
    }

    fn generate(&self, tree: &ComponentTree, options: &CodegenOptions) -> String {
        let body = if tree.is_empty() {
            "    <!-- Add components to see generated code -->".to_string()
        } else {
            tree.roots()
                .iter()
                .map(|&root| self.render_node(tree, root, 0, options))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "<!-- Generated with Tailwind CSS -->\n<div class=\"min-h-screen bg-gray-100 p-8\">\n{body}\n</div>"
        )
    }
}

/// Fixed per-kind base utility classes.
fn base_classes(kind: &str) -> &'static str {
    match kind {
        "button" => "px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 transition-colors",
        "text" => "text-gray-800",
        "heading" => "text-2xl font-bold text-gray-900 mb-4",
        "input" => "px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500",
        "container" => "p-4",
        "flex-container" => "flex gap-4",
        "grid-container" => "grid grid-cols-2 gap-4",
        "card" => "bg-white p-6 rounded-lg shadow-md",
        "image" => "rounded",
        "list" => "list-disc pl-5 space-y-1",
        _ => "",
    }
}

/// Base classes for the kind plus classes derived from exact style matches.
fn utility_classes(record: &ComponentRecord, include_styles: bool) -> String {
    let mut classes = base_classes(&record.kind).to_string();

    if include_styles {
        let mut derived: SmallVec<[String; 4]> = SmallVec::new();

        if let Some(bg) = record.styles.get("backgroundColor").and_then(PropValue::as_str) {
            match bg {
                "#ffffff" => derived.push("bg-white".to_string()),
                "#f3f4f6" => derived.push("bg-gray-100".to_string()),
                _ => {}
            }
        }

        if let Some(align) = record.styles.get("textAlign").and_then(PropValue::as_str) {
            derived.push(format!("text-{align}"));
        }

        if let Some(weight) = font_weight_class(record.styles.get("fontWeight")) {
            derived.push(weight.to_string());
        }

        if !derived.is_empty() {
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(&derived.join(" "));
        }
    }

    classes.trim().to_string()
}

fn font_weight_class(value: Option<&PropValue>) -> Option<&'static str> {
    match value? {
        PropValue::String(s) => match s.as_str() {
            "bold" | "700" => Some("font-bold"),
            "600" => Some("font-semibold"),
            "500" => Some("font-medium"),
            _ => None,
        },
        PropValue::Number(n) => match *n as i64 {
            700 => Some("font-bold"),
            600 => Some("font-semibold"),
            500 => Some("font-medium"),
            _ => None,
        },
        _ => None,
    }
}
