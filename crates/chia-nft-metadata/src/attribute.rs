//! NFT-level attributes (`attributes[]` entries).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ambiguous::{encode_int_or_string, int_or_string_fields, into_object, optional_integer};
use crate::error::CodecError;

/// A single NFT trait.
///
/// `trait_type` and `value` may arrive as JSON integers or strings and are
/// held as strings. The numeric bounds are only meaningful when
/// `max_value` is non-zero; a zero maximum means "no bounds" and neither
/// bound is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
    pub min_value: i64,
    pub max_value: i64,
}

impl Attribute {
    /// Create an unbounded attribute.
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Attach numeric bounds.
    pub fn with_bounds(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Whether bounds will be emitted on encode.
    pub fn has_bounds(&self) -> bool {
        self.max_value != 0
    }
}

impl TryFrom<Value> for Attribute {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let object = into_object(value)?;
        let [trait_type, value] = int_or_string_fields(&object, ["trait_type", "value"])?;

        Ok(Self {
            trait_type,
            value,
            min_value: optional_integer(&object, "min_value")?.unwrap_or_default(),
            max_value: optional_integer(&object, "max_value")?.unwrap_or_default(),
        })
    }
}

impl From<Attribute> for Value {
    fn from(attribute: Attribute) -> Self {
        let mut object = Map::new();
        object.insert(
            "trait_type".to_string(),
            encode_int_or_string(&attribute.trait_type),
        );
        object.insert("value".to_string(), encode_int_or_string(&attribute.value));

        if attribute.has_bounds() {
            object.insert("min_value".to_string(), attribute.min_value.into());
            object.insert("max_value".to_string(), attribute.max_value.into());
        }

        Value::Object(object)
    }
}
