//! Style resolution and serialization.
//!
//! Canvas placement is reproduced in the generated markup through a
//! positioning policy: components that participate in flex/grid flow keep
//! their styles untouched, while free-floating components are pinned with
//! `position: absolute` at their canvas coordinates.

use convert_case::{Case, Casing};
use forge_core::{ComponentRecord, Point, PropValue, StyleMap};

use crate::attr::format_number;

/// Whether a component's rendering keeps flow-based layout.
///
/// True for the layout container kinds and for anything that declares a
/// flex/grid display itself.
pub fn is_layout_container(record: &ComponentRecord) -> bool {
    if matches!(
        record.kind.as_str(),
        "container" | "flex-container" | "grid-container"
    ) {
        return true;
    }
    matches!(
        record.styles.get("display").and_then(PropValue::as_str),
        Some("flex" | "inline-flex" | "grid" | "inline-grid")
    )
}

/// Whether the component explicitly declares absolute or fixed positioning.
pub fn is_absolute_positioned(record: &ComponentRecord) -> bool {
    matches!(
        record.styles.get("position").and_then(PropValue::as_str),
        Some("absolute" | "fixed")
    )
}

/// Resolve the styles to emit for a record.
///
/// Layout containers lose any stale `position`/`left`/`top` unless absolute
/// positioning was explicitly requested. Everything else is pinned at its
/// canvas position, with `width`/`height` taken from the record's size when
/// present (absent size means `auto`, expressed by omission).
pub fn resolved_styles(record: &ComponentRecord) -> StyleMap {
    let mut styles = record.styles.clone();

    if is_layout_container(record) {
        if !is_absolute_positioned(record) {
            styles.shift_remove("position");
            styles.shift_remove("left");
            styles.shift_remove("top");
        }
    } else if !is_absolute_positioned(record) {
        let position = record.position.unwrap_or(Point::ZERO);
        styles.insert("position".to_string(), "absolute".into());
        styles.insert("left".to_string(), px(position.x));
        styles.insert("top".to_string(), px(position.y));
        if let Some(size) = record.size {
            styles.insert("width".to_string(), px(size.width));
            styles.insert("height".to_string(), px(size.height));
        }
    }

    styles
}

fn px(value: f64) -> PropValue {
    PropValue::String(format!("{}px", format_number(value)))
}

/// Render styles as a JSX inline style object: `{ key: 'value', ... }`.
///
/// Returns an empty string for an empty map. Keys stay camelCase; every value
/// is single-quoted.
pub fn jsx_style_object(styles: &StyleMap) -> String {
    let entries: Vec<String> = styles
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| format!("{}: '{}'", key, value_text(value)))
        .collect();

    if entries.is_empty() {
        String::new()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}

/// Render styles as CSS declarations, one per line, keys converted to
/// kebab-case. Each line is prefixed with `indent`.
pub fn css_declarations(styles: &StyleMap, indent: &str) -> String {
    styles
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            format!("{indent}{}: {};", key.to_case(Case::Kebab), value_text(value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn value_text(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => s.clone(),
        PropValue::Number(n) => format_number(*n),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Null => String::new(),
    }
}
