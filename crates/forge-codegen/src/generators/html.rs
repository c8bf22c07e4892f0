//! Static HTML document generator.

use forge_tree::{ComponentTree, NodeId};

use super::CodeGenerator;
use crate::attr::html_attributes;
use crate::options::CodegenOptions;
use crate::style::{css_declarations, resolved_styles};
use crate::tags::tag_for;

const INDENT: &str = "    ";

/// Generates a standalone HTML document.
///
/// Each component carries a `component-<id>` class; the matching CSS rules
/// are collected into the document's `<style>` block. The tag set in use is
/// not void-element safe, so childless nodes emit an explicit closing tag.
pub struct HtmlGenerator;

impl HtmlGenerator {
    pub fn new() -> Self {
        Self
    }

    fn render_node(&self, tree: &ComponentTree, id: NodeId, depth: usize) -> String {
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
        opening.push_str(&format!(" class=\"component-{}\"", node.record.id));

        if !node.children.is_empty() {
            let children = node
                .children
                .iter()
                .map(|&child| self.render_node(tree, child, depth + 1))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{opening}>\n{children}\n{indent}</{tag}>")
        } else if let Some(text) = node.record.text_content() {
            format!("{opening}>{text}</{tag}>")
        } else {
            format!("{opening}></{tag}>")
        }
    }

    /// One CSS rule per component with non-empty resolved styles, in input
    /// order.
    fn stylesheet(&self, tree: &ComponentTree) -> String {
        tree.nodes()
            .filter_map(|node| {
                let styles = resolved_styles(&node.record);
                if styles.is_empty() {
                    return None;
                }
                Some(format!(
                    ".component-{} {{\n{}\n}}",
                    node.record.id,
                    css_declarations(&styles, "    ")
                ))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for HtmlGenerator {
    fn framework_name(&self) -> &'static str {
        "html"
    }

    fn generate(&self, tree: &ComponentTree, options: &CodegenOptions) -> String {
        if tree.is_empty() {
            return document(None, "    <!-- Add components to see generated code -->");
        }

        let body = tree
            .roots()
            .iter()
            .map(|&root| self.render_node(tree, root, 0))
            .collect::<Vec<_>>()
            .join("\n");

        let styles = if options.include_styles {
            Some(self.stylesheet(tree)).filter(|s| !s.is_empty())
        } else {
            None
        };

        document(styles.as_deref(), &body)
    }
}

fn document(component_styles: Option<&str>, body: &str) -> String {
    let mut style_block =
        String::from("        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }");
    if let Some(styles) = component_styles {
        style_block.push('\n');
        style_block.push_str(styles);
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>Generated Component</title>\n    <style>\n{style_block}\n    </style>\n</head>\n<body>\n{body}\n</body>\n</html>"
    )
}
