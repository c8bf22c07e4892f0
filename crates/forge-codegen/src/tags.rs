//! Component kind to output tag mapping.

/// Map a component kind to the HTML/JSX tag it renders as.
///
/// Unknown kinds fall back to `div`.
pub fn tag_for(kind: &str) -> &'static str {
    match kind {
        "text" => "span",
        "heading" => "h1",
        "button" => "button",
        "input" => "input",
        "image" => "img",
        "container" | "flex-container" | "grid-container" | "card" => "div",
        "list" => "ul",
        _ => "div",
    }
}
