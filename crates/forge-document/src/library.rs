//! The component library: the catalog of placeable component kinds.

use forge_core::{PropMap, PropValue, StyleMap};

/// A placeable component kind with its default props and styles.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryComponent {
    /// Kind key ("button", "card", ...); becomes the record's `kind`.
    pub kind: String,
    /// Display name for new instances.
    pub name: String,
    /// Library category ("layout", "text", "interactive", "media", "content").
    pub category: String,
    /// Short description shown in the library panel.
    pub description: String,
    /// Props applied to new instances.
    pub default_props: PropMap,
    /// Styles applied to new instances.
    pub default_styles: StyleMap,
}

impl LibraryComponent {
    /// Create a library entry.
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
            default_props: PropMap::new(),
            default_styles: StyleMap::new(),
        }
    }

    /// Add a default prop.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.default_props.insert(key.into(), value.into());
        self
    }

    /// Add a default style.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.default_styles.insert(key.into(), value.into());
        self
    }
}

/// The fixed catalog the editor's library panel offers.
#[derive(Debug, Clone)]
pub struct ComponentLibrary {
    items: Vec<LibraryComponent>,
}

impl ComponentLibrary {
    /// The standard catalog.
    pub fn standard() -> Self {
        Self {
            items: standard_items(),
        }
    }

    /// All entries.
    pub fn items(&self) -> &[LibraryComponent] {
        &self.items
    }

    /// Look up an entry by kind key.
    pub fn get(&self, kind: &str) -> Option<&LibraryComponent> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// Entries in a category.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a LibraryComponent> {
        self.items.iter().filter(move |item| item.category == category)
    }
}

impl Default for ComponentLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_items() -> Vec<LibraryComponent> {
    vec![
        // Layout
        LibraryComponent::new(
            "container",
            "Container",
            "layout",
            "Basic container for grouping elements",
        )
        .with_prop("children", PropValue::Null)
        .with_style("padding", "16px")
        .with_style("border", "2px dashed #d1d5db")
        .with_style("borderRadius", "8px")
        .with_style("minHeight", "100px")
        .with_style("display", "flex")
        .with_style("alignItems", "center")
        .with_style("justifyContent", "center"),
        LibraryComponent::new(
            "flex-container",
            "Flex Container",
            "layout",
            "Flexible layout container",
        )
        .with_prop("direction", "row")
        .with_prop("children", PropValue::Null)
        .with_style("display", "flex")
        .with_style("gap", "8px")
        .with_style("padding", "16px")
        .with_style("border", "2px dashed #3b82f6")
        .with_style("borderRadius", "8px")
        .with_style("minHeight", "100px"),
        LibraryComponent::new(
            "grid-container",
            "Grid Container",
            "layout",
            "Grid layout container",
        )
        .with_prop("columns", 2.0)
        .with_prop("children", PropValue::Null)
        .with_style("display", "grid")
        .with_style("gap", "8px")
        .with_style("padding", "16px")
        .with_style("border", "2px dashed #10b981")
        .with_style("borderRadius", "8px")
        .with_style("minHeight", "100px"),
        // Text
        LibraryComponent::new("text", "Text", "text", "Basic text element")
            .with_prop("children", "Text content")
            .with_style("color", "#374151")
            .with_style("fontSize", "16px"),
        LibraryComponent::new("heading", "Heading", "text", "Heading text with different levels")
            .with_prop("children", "Heading")
            .with_prop("level", 1.0)
            .with_style("color", "#111827")
            .with_style("fontSize", "32px")
            .with_style("fontWeight", "bold")
            .with_style("marginBottom", "16px"),
        // Interactive
        LibraryComponent::new("button", "Button", "interactive", "Interactive button element")
            .with_prop("children", "Button")
            .with_prop("onClick", PropValue::Null)
            .with_style("backgroundColor", "#3b82f6")
            .with_style("color", "white")
            .with_style("padding", "12px 24px")
            .with_style("borderRadius", "6px")
            .with_style("border", "none")
            .with_style("cursor", "pointer")
            .with_style("fontSize", "16px")
            .with_style("fontWeight", "500"),
        LibraryComponent::new("input", "Input", "interactive", "Text input field")
            .with_prop("placeholder", "Enter text...")
            .with_prop("type", "text")
            .with_style("padding", "12px")
            .with_style("border", "1px solid #d1d5db")
            .with_style("borderRadius", "6px")
            .with_style("fontSize", "16px")
            .with_style("width", "200px"),
        // Media
        LibraryComponent::new("image", "Image", "media", "Image element")
            .with_prop("src", "https://via.placeholder.com/150x100")
            .with_prop("alt", "Image")
            .with_style("borderRadius", "8px")
            .with_style("maxWidth", "100%")
            .with_style("height", "auto"),
        // Content
        LibraryComponent::new("card", "Card", "content", "Card container with shadow")
            .with_prop("children", PropValue::Null)
            .with_style("backgroundColor", "white")
            .with_style("padding", "24px")
            .with_style("borderRadius", "12px")
            .with_style("boxShadow", "0 4px 6px -1px rgba(0, 0, 0, 0.1)")
            .with_style("border", "1px solid #e5e7eb"),
        LibraryComponent::new("list", "List", "content", "Ordered or unordered list")
            .with_prop("ordered", false)
            .with_style("paddingLeft", "20px"),
    ]
}
