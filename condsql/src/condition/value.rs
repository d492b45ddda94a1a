//! Condition value model
//!
//! A condition tree is plain data: objects, arrays, and scalars. This module
//! defines the owned tree type the compiler walks, plus conversions from
//! `serde_json::Value` and from Rust primitives.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Numeric scalar, keeping the integer/float distinction of the source document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

/// A node of a condition tree
///
/// Objects keep their members in insertion order, so groups compile in the
/// order the members appear in the source document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Condition {
    Object(IndexMap<String, Condition>),
    Array(Vec<Condition>),
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Condition {
    /// Look up an object member. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Condition> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for empty objects and empty arrays
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Object(map) => map.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Nesting depth of the tree. Scalars and empty containers are depth 0,
    /// a container of scalars is depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Object(map) => map.values().map(|v| v.depth() + 1).max().unwrap_or(0),
            Self::Array(items) => items.iter().map(|v| v.depth() + 1).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Human-readable name of the node kind, used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }
}

impl From<JsonValue> for Condition {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Self::Number(Number::Unsigned(u))
                } else if let Some(i) = n.as_i64() {
                    Self::Number(Number::Signed(i))
                } else {
                    // as_f64 only fails for arbitrary-precision numbers, which
                    // this crate does not enable
                    Self::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Condition {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Condition {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u64> for Condition {
    fn from(n: u64) -> Self {
        Self::Number(Number::Unsigned(n))
    }
}

impl From<i64> for Condition {
    fn from(n: i64) -> Self {
        Self::Number(Number::Signed(n))
    }
}

impl From<f64> for Condition {
    fn from(n: f64) -> Self {
        Self::Number(Number::Float(n))
    }
}

impl From<Vec<Condition>> for Condition {
    fn from(items: Vec<Condition>) -> Self {
        Self::Array(items)
    }
}

impl<K: Into<String>> FromIterator<(K, Condition)> for Condition {
    fn from_iter<T: IntoIterator<Item = (K, Condition)>>(iter: T) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
