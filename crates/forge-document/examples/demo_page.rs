//! Generate code for the built-in demo page in all three targets.

use forge_codegen::{generate_from_tree, CodegenOptions, Framework};
use forge_document::{demo, Document};
use forge_tree::ComponentTree;

fn main() {
    let mut document = Document::new();
    demo::load_demo_content(&mut document);

    let tree = ComponentTree::build(document.records());
    for warning in tree.warnings() {
        eprintln!("warning: {warning}");
    }

    for framework in [Framework::React, Framework::Html, Framework::Tailwind] {
        let options = CodegenOptions {
            framework,
            ..CodegenOptions::default()
        };
        println!("==== {} ====", framework.name());
        println!("{}", generate_from_tree(&tree, &options));
        println!();
    }
}
