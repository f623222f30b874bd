//! Field schema for patchable records.
//!
//! A record shape is declared once as a static table of [`FieldDef`]s. The
//! patch engine resolves operation paths against that table and uses the
//! field kind to type-check incoming values and to produce the reset value
//! for `remove`.

use std::fmt;

use serde_json::Value;

/// Declared type of a patchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    /// Value a field of this kind resets to when a patch removes it.
    pub fn default_value(self) -> Value {
        match self {
            FieldKind::Text => Value::String(String::new()),
            FieldKind::Integer => Value::from(0),
        }
    }

    /// Whether `value` is acceptable for this kind.
    ///
    /// Integers must be whole JSON numbers; there is no coercion from
    /// strings or floats.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.as_i64().is_some(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Integer => write!(f, "integer"),
        }
    }
}

/// One field in a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_defaults_to_empty_string() {
        assert_eq!(FieldKind::Text.default_value(), json!(""));
    }

    #[test]
    fn integer_defaults_to_zero() {
        assert_eq!(FieldKind::Integer.default_value(), json!(0));
    }

    #[test]
    fn text_accepts_only_strings() {
        assert!(FieldKind::Text.accepts(&json!("Dune")));
        assert!(FieldKind::Text.accepts(&json!("")));
        assert!(!FieldKind::Text.accepts(&json!(155)));
        assert!(!FieldKind::Text.accepts(&json!(null)));
    }

    #[test]
    fn integer_accepts_only_whole_numbers() {
        assert!(FieldKind::Integer.accepts(&json!(155)));
        assert!(FieldKind::Integer.accepts(&json!(-3)));
        assert!(!FieldKind::Integer.accepts(&json!(15.5)));
        assert!(!FieldKind::Integer.accepts(&json!("155")));
        assert!(!FieldKind::Integer.accepts(&json!(true)));
        assert!(!FieldKind::Integer.accepts(&json!(null)));
    }

    #[test]
    fn kinds_render_lowercase_names() {
        assert_eq!(FieldKind::Text.to_string(), "text");
        assert_eq!(FieldKind::Integer.to_string(), "integer");
    }
}
