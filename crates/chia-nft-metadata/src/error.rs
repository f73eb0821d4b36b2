//! Error types for metadata decoding.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The JSON type actually found where a field was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    /// The key was absent from the enclosing object.
    Missing,
}

impl JsonKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Classify an optional value, treating `None` as an absent key.
    pub fn of_opt(value: Option<&Value>) -> Self {
        value.map_or(Self::Missing, Self::of)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Errors raised while decoding schema-ambiguous metadata fields.
///
/// These indicate an out-of-spec document and are never transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A field held a JSON type outside its permitted shapes.
    #[error("unexpected {found} for field \"{field}\", expected {expected}")]
    UnexpectedValueType {
        field: String,
        found: JsonKind,
        expected: &'static str,
    },

    /// An attribute entry was not a JSON object.
    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: JsonKind },
}

impl CodecError {
    pub(crate) fn unexpected(field: &str, found: JsonKind, expected: &'static str) -> Self {
        Self::UnexpectedValueType {
            field: field.to_string(),
            found,
            expected,
        }
    }

    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnexpectedValueType { field, .. } => Some(field),
            Self::NotAnObject { .. } => None,
        }
    }
}
