//! The document model: an order-preserving JSON tree.
//!
//! Documents are plain [`serde_json::Value`]s. The workspace enables the
//! `preserve_order` feature of `serde_json`, so object keys iterate in
//! insertion order and every derived document keeps the key order of the
//! document it was built from.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;

/// A localization tree.
pub type Document = Value;

/// The ordered key/value entries of an object node.
pub type Entries = Map<String, Value>;

/// Shape classification of a document node.
///
/// Two nodes have the same shape at a leaf when their kinds are equal,
/// regardless of the values they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl NodeKind {
    /// Classify a node.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    /// Returns `true` for objects and arrays.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrow the entries of an object document.
pub fn as_entries(document: &Document) -> Result<&Entries, TypeError> {
    document
        .as_object()
        .ok_or_else(|| TypeError::NotAnObject(NodeKind::of(document)))
}

/// JavaScript-style truthiness of a leaf.
///
/// `null`, `false`, `0` and the empty string are falsy. Containers are
/// always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_kind_classification() {
        assert_eq!(NodeKind::of(&json!({})), NodeKind::Object);
        assert_eq!(NodeKind::of(&json!([])), NodeKind::Array);
        assert_eq!(NodeKind::of(&json!("x")), NodeKind::String);
        assert_eq!(NodeKind::of(&json!(1.5)), NodeKind::Number);
        assert_eq!(NodeKind::of(&json!(true)), NodeKind::Bool);
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Null);
        assert!(NodeKind::Array.is_container());
        assert!(!NodeKind::Null.is_container());
    }

    #[test]
    fn as_entries_rejects_non_objects() {
        assert!(as_entries(&json!({"a": 1})).is_ok());
        assert_eq!(
            as_entries(&json!([1, 2])).unwrap_err(),
            TypeError::NotAnObject(NodeKind::Array)
        );
    }

    #[test]
    fn truthiness_follows_js_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("hola")));
        assert!(is_truthy(&json!(-3)));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn object_keys_keep_insertion_order() {
        let doc: Document = serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let keys: Vec<&str> = as_entries(&doc).unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(NodeKind::Bool.to_string(), "bool");
    }
}
