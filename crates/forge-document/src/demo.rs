//! Demo page content for first-run onboarding.

use forge_core::{Point, PropValue};

use crate::document::Document;
use crate::library::LibraryComponent;

/// Replace the document's contents with the welcome demo page: a greeting, a
/// call-to-action button, and a feature card.
pub fn load_demo_content(document: &mut Document) {
    document.clear();

    let welcome = LibraryComponent::new("text", "Welcome Text", "text", "Welcome text")
        .with_prop("children", "Welcome to CodeForge Studio! \u{1f3a8}")
        .with_style("color", "#1f2937")
        .with_style("fontSize", "28px")
        .with_style("fontWeight", "bold")
        .with_style("textAlign", "center")
        .with_style("padding", "20px");
    document.add_from_library(&welcome, Some(Point::new(150.0, 100.0)), None);

    let get_started = LibraryComponent::new(
        "button",
        "Get Started Button",
        "interactive",
        "Get started button",
    )
    .with_prop("children", "Get Started")
    .with_style("backgroundColor", "#3b82f6")
    .with_style("color", "white")
    .with_style("padding", "12px 24px")
    .with_style("borderRadius", "8px")
    .with_style("border", "none")
    .with_style("cursor", "pointer")
    .with_style("fontSize", "16px")
    .with_style("fontWeight", "500");
    document.add_from_library(&get_started, Some(Point::new(250.0, 200.0)), None);

    let feature_card = LibraryComponent::new("card", "Feature Card", "content", "Feature card container")
        .with_prop("children", PropValue::Null)
        .with_style("backgroundColor", "white")
        .with_style("padding", "24px")
        .with_style("borderRadius", "12px")
        .with_style("boxShadow", "0 4px 6px -1px rgba(0, 0, 0, 0.1)")
        .with_style("border", "1px solid #e5e7eb")
        .with_style("width", "300px")
        .with_style("height", "200px");
    document.add_from_library(&feature_card, Some(Point::new(100.0, 300.0)), None);
}
