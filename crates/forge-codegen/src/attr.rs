//! Attribute serialization shared by the backends.
//!
//! Every prop except the reserved `children` key becomes an output attribute;
//! null values are omitted entirely.

use forge_core::{PropMap, PropValue};

/// Render props as plain HTML attributes (`key="value"`), space-joined.
pub fn html_attributes(props: &PropMap) -> String {
    props
        .iter()
        .filter(|(key, value)| is_attribute(key, value))
        .map(|(key, value)| format!("{}=\"{}\"", key, attribute_text(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render props as JSX attributes: strings quoted, other values in
/// expression braces (`disabled={true}`), space-joined.
pub fn jsx_attributes(props: &PropMap) -> String {
    props
        .iter()
        .filter(|(key, value)| is_attribute(key, value))
        .map(|(key, value)| match value {
            PropValue::String(s) => format!("{key}=\"{s}\""),
            other => format!("{key}={{{}}}", js_literal(other)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_attribute(key: &str, value: &PropValue) -> bool {
    key != "children" && !value.is_null()
}

fn attribute_text(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => s.clone(),
        PropValue::Number(n) => format_number(*n),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Null => String::new(),
    }
}

fn js_literal(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("\"{s}\""),
        PropValue::Number(n) => format_number(*n),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Null => "null".to_string(),
    }
}

/// Format a numeric value the way JavaScript prints it: integral values
/// without a decimal point.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::PropMap;

    fn props(entries: &[(&str, PropValue)]) -> PropMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_children_and_nulls_are_skipped() {
        let props = props(&[
            ("children", PropValue::from("Click")),
            ("onClick", PropValue::Null),
            ("type", PropValue::from("submit")),
        ]);
        assert_eq!(html_attributes(&props), "type=\"submit\"");
        assert_eq!(jsx_attributes(&props), "type=\"submit\"");
    }

    #[test]
    fn test_jsx_non_string_values_use_braces() {
        let props = props(&[
            ("placeholder", PropValue::from("Enter text...")),
            ("tabIndex", PropValue::from(2.0)),
            ("disabled", PropValue::from(true)),
        ]);
        assert_eq!(
            jsx_attributes(&props),
            "placeholder=\"Enter text...\" tabIndex={2} disabled={true}"
        );
    }

    #[test]
    fn test_html_values_are_quoted_text() {
        let props = props(&[
            ("maxlength", PropValue::from(10.0)),
            ("required", PropValue::from(true)),
        ]);
        assert_eq!(html_attributes(&props), "maxlength=\"10\" required=\"true\"");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }
}
