//! Document model
//!
//! Documents are plain `serde_json::Value`s. The crate enables serde_json's
//! `preserve_order` feature, so objects keep their insertion order and that
//! order carries through to table columns.

use std::fmt;

use serde_json::Value;

/// An immutable, ordered, JSON-like tree value
pub type Document = Value;

/// The runtime shape of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Null => write!(f, "null"),
            Kind::Boolean => write!(f, "boolean"),
            Kind::Number => write!(f, "number"),
            Kind::String => write!(f, "string"),
            Kind::Array => write!(f, "array"),
            Kind::Object => write!(f, "object"),
        }
    }
}

/// Safe lookups over documents
///
/// None of these ever fail: a lookup that does not fit the shape of the
/// document yields `None`, which the evaluator turns into null.
pub trait DocumentExt {
    /// Look up a key on an object
    fn field(&self, name: &str) -> Option<&Document>;

    /// Look up a zero-based position on an array. Negative and
    /// out-of-range positions are absent.
    fn at(&self, index: i64) -> Option<&Document>;

    /// Runtime shape of this document
    fn kind(&self) -> Kind;

    /// Whether `||` should fall through to its right-hand side: null, `false`,
    /// and empty strings, arrays or objects. Numbers, zero included, are kept.
    fn is_absent(&self) -> bool;

    /// Text shown in a table cell
    fn cell_text(&self) -> String;
}

impl DocumentExt for Value {
    fn field(&self, name: &str) -> Option<&Document> {
        match self {
            Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn at(&self, index: i64) -> Option<&Document> {
        match self {
            Value::Array(items) => usize::try_from(index).ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Number(_) => false,
        }
    }

    fn cell_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
