//! React code generator.

use forge_tree::{ComponentTree, NodeId};

use super::CodeGenerator;
use crate::attr::jsx_attributes;
use crate::options::CodegenOptions;
use crate::style::{jsx_style_object, resolved_styles};
use crate::tags::tag_for;

const INDENT: &str = "  ";

/// Generates a JSX function-component module.
///
/// A single root renders directly inside the `return`; multiple roots are
/// wrapped in a fragment. Empty input yields the placeholder template.
pub struct ReactGenerator;

impl ReactGenerator {
    pub fn new() -> Self {
        Self
    }

    fn render_node(&self, tree: &ComponentTree, id: NodeId, depth: usize, options: &CodegenOptions) -> String {
        let Some(node) = tree.get(id) else {
            return String::new();
        };
        let indent = INDENT.repeat(depth);
        let tag = tag_for(&node.record.kind);

        let mut opening = format!("{indent}<{tag}");
        let attrs = jsx_attributes(&node.record.props);
        if !attrs.is_empty() {
            opening.push(' ');
            opening.push_str(&attrs);
        }
        if options.include_styles {
            let style = jsx_style_object(&resolved_styles(&node.record));
            if !style.is_empty() {
                opening.push_str(" style={");
                opening.push_str(&style);
                opening.push('}');
            }
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
            format!("{opening} />")
        }
    }
}

impl Default for ReactGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for ReactGenerator {
    fn framework_name(&self) -> &'static str {
        "react"
    }

    fn generate(&self, tree: &ComponentTree, options: &CodegenOptions) -> String {
        if tree.is_empty() {
            return "import React from 'react';\n\nconst MyComponent = () => {\n  return (\n    <div>\n      {/* Add components to see generated code */}\n    </div>\n  );\n};\n\nexport default MyComponent;".to_string();
        }

        let roots = tree.roots();
        let body = if roots.len() == 1 {
            indent_lines(&self.render_node(tree, roots[0], 0, options), "    ")
        } else {
            let rendered = roots
                .iter()
                .map(|&root| self.render_node(tree, root, 0, options))
                .collect::<Vec<_>>()
                .join("\n");
            format!("    <>\n{}\n    </>", indent_lines(&rendered, "      "))
        };

        format!(
            "import React from 'react';\n\nconst MyComponent = () => {{\n  return (\n{body}\n  );\n}};\n\nexport default MyComponent;"
        )
    }
}

fn indent_lines(code: &str, prefix: &str) -> String {
    code.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{ComponentRecord, PropValue};

    fn generate(records: &[ComponentRecord]) -> String {
        let tree = ComponentTree::build(records);
        ReactGenerator::new().generate(&tree, &CodegenOptions::default())
    }

    #[test]
    fn test_empty_input_yields_placeholder() {
        let code = generate(&[]);
        assert!(code.contains("import React from 'react'"));
        assert!(code.contains("const MyComponent = () => {"));
        assert!(code.contains("{/* Add components to see generated code */}"));
        assert!(code.contains("export default MyComponent;"));
    }

    #[test]
    fn test_single_root_is_not_fragment_wrapped() {
        let code = generate(&[ComponentRecord::new("solo", "card")]);
        assert!(!code.contains("<>"));
        assert!(code.contains("    <div"));
    }

    #[test]
    fn test_multiple_roots_are_fragment_wrapped() {
        let code = generate(&[
            ComponentRecord::new("root1", "div"),
            ComponentRecord::new("root2", "div"),
        ]);
        assert!(code.contains("    <>\n"));
        assert!(code.contains("\n    </>"));
    }

    #[test]
    fn test_leaf_with_text_renders_inline() {
        let code = generate(&[ComponentRecord::new("t", "text").with_prop("children", "Deep")]);
        assert!(code.contains(">Deep</span>"));
    }

    #[test]
    fn test_bare_leaf_self_closes() {
        let code = generate(&[ComponentRecord::new("img-1", "image")
            .with_prop("src", "https://example.com/pic.png")
            .with_prop("alt", "Pic")]);
        assert!(code.contains("<img src=\"https://example.com/pic.png\" alt=\"Pic\""));
        assert!(code.contains(" />"));
    }

    #[test]
    fn test_nested_depth_indents_two_spaces_per_level() {
        let records = vec![
            ComponentRecord::new("root", "div").with_style("display", "flex"),
            ComponentRecord::new("mid", "container").with_parent("root"),
            ComponentRecord::new("leaf", "text")
                .with_parent("mid")
                .with_prop("children", "Deep"),
        ];
        let code = generate(&records);
        // Root shifted into the return by four spaces; each level adds two.
        assert!(code.contains("\n    <div style={{ display: 'flex' }}>\n"));
        assert!(code.contains("\n      <div>\n"));
        assert!(code.contains("\n        <span"));
        assert!(code.contains("\n    </div>"));
    }

    #[test]
    fn test_props_serialization() {
        let code = generate(&[ComponentRecord::new("in-1", "input")
            .with_prop("placeholder", "Enter text...")
            .with_prop("maxLength", 20.0)
            .with_prop("disabled", PropValue::from(false))
            .with_prop("onChange", PropValue::Null)]);
        assert!(code.contains("placeholder=\"Enter text...\""));
        assert!(code.contains("maxLength={20}"));
        assert!(code.contains("disabled={false}"));
        assert!(!code.contains("onChange"));
    }

    #[test]
    fn test_include_styles_false_suppresses_style_attribute() {
        let records = vec![ComponentRecord::new("root", "div").with_style("display", "flex")];
        let tree = ComponentTree::build(&records);
        let options = CodegenOptions {
            include_styles: false,
            ..CodegenOptions::default()
        };
        let code = ReactGenerator::new().generate(&tree, &options);
        assert!(!code.contains("style={"));
    }

    #[test]
    fn test_orphan_still_renders_at_top_level() {
        let code = generate(&[ComponentRecord::new("orphan", "text")
            .with_parent("missing")
            .with_prop("children", "Lost")]);
        assert!(code.contains(">Lost</span>"));
    }
}
