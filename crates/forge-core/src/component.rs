//! The component record: one element of a design canvas.

use crate::types::{ComponentId, Point, Size};
use crate::value::{PropMap, PropValue, StyleMap};

/// A single design-canvas element as persisted by the editor.
///
/// Records form a flat list; hierarchy is expressed through `parent_id`. The
/// `children` field is an alternate pre-nested representation some callers
/// produce — it is normalized away before tree building and is otherwise
/// empty.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ComponentRecord {
    /// Unique, stable identifier.
    pub id: ComponentId,
    /// Key into the component-kind table ("text", "button", "card", ...);
    /// determines the output tag and default styling.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Human-readable label, independent of `kind`.
    pub name: String,
    /// Library category ("layout", "text", "interactive", ...).
    pub category: String,
    /// Parent link; `None` (or a dangling id) makes this a root.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub parent_id: Option<ComponentId>,
    /// Semantic properties; the reserved key `children` holds literal text
    /// content rather than an attribute.
    pub props: PropMap,
    /// CSS-like declarations with camelCase keys.
    pub styles: StyleMap,
    /// Canvas position, used for absolute-positioned rendering.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub position: Option<Point>,
    /// Canvas size, used for absolute-positioned rendering.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<Size>,
    /// Pre-nested child records (alternate input representation).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<ComponentRecord>,
}

impl ComponentRecord {
    /// Create a record with the given id and kind.
    pub fn new(id: impl Into<ComponentId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the library category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the parent link.
    pub fn with_parent(mut self, parent: impl Into<ComponentId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// Add a property.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Add a style declaration.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    /// Set the canvas position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    /// Set the canvas size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Add a pre-nested child record.
    pub fn with_child(mut self, child: ComponentRecord) -> Self {
        self.children.push(child);
        self
    }

    /// Literal text content, if the reserved `children` prop holds a string.
    pub fn text_content(&self) -> Option<&str> {
        self.props.get("children").and_then(PropValue::as_str)
    }
}
