//! Crusher input — plain text or a structured JSON value.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content handed to the crusher.
///
/// Deserializes untagged: a JSON string is text, an array is a sequence and an
/// object is a mapping. Key and element order follow the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Text(String),
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl Payload {
    /// Lift an arbitrary JSON value. Scalars other than strings become their
    /// JSON text.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Mapping(map),
            other => Self::Text(other.to_string()),
        }
    }

    /// Convert any serializable value, failing when serde_json cannot
    /// represent it (non-string map keys, for instance).
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::from_value(serde_json::to_value(value)?))
    }

    /// Canonical text form: text passes through, structured values are
    /// pretty-printed with two-space indentation.
    pub fn canonical_text(&self) -> Result<String> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            Self::Sequence(items) => Ok(serde_json::to_string_pretty(items)?),
            Self::Mapping(map) => Ok(serde_json::to_string_pretty(map)?),
        }
    }

    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Value>> for Payload {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
