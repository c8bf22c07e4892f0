//! Property and style value types.
//!
//! Props and styles are open key-value maps: the editor shell writes whatever
//! keys the property panels expose, and the emitters serialize them without
//! interpreting most of them. Values are restricted to a small closed union so
//! serialization stays exhaustive.

use indexmap::IndexMap;

/// A property or style value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl PropValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number if it's a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean if it's a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// Ordered map of element properties (insertion order is emission order).
pub type PropMap = IndexMap<String, PropValue>;

/// Ordered map of CSS-like style declarations, camelCase keys.
pub type StyleMap = IndexMap<String, PropValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(PropValue::from("hello").as_str(), Some("hello"));
        assert_eq!(PropValue::from(42.0).as_number(), Some(42.0));
        assert_eq!(PropValue::from(true).as_bool(), Some(true));
        assert!(PropValue::Null.is_null());
        assert_eq!(PropValue::from("hello").as_number(), None);
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let mut styles = StyleMap::new();
        styles.insert("display".to_string(), "flex".into());
        styles.insert("gap".to_string(), "8px".into());
        styles.insert("padding".to_string(), "16px".into());

        let keys: Vec<_> = styles.keys().map(String::as_str).collect();
        assert_eq!(keys, ["display", "gap", "padding"]);
    }
}
