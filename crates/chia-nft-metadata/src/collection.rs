//! Collection block of a metadata document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ambiguous::{encode_int_or_string, int_or_string_fields, into_object};
use crate::error::CodecError;

/// The collection an NFT belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier (a UUID in CHIP-0007).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<CollectionAttribute>,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Find the first attribute with the given type.
    pub fn attribute(&self, kind: &str) -> Option<&CollectionAttribute> {
        self.attributes.iter().find(|a| a.kind == kind)
    }
}

/// A collection-level `{"type", "value"}` entry, such as a banner or website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct CollectionAttribute {
    /// Serialized as `type`.
    pub kind: String,
    pub value: String,
}

impl CollectionAttribute {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl TryFrom<Value> for CollectionAttribute {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let object = into_object(value)?;
        let [kind, value] = int_or_string_fields(&object, ["type", "value"])?;
        Ok(Self { kind, value })
    }
}

impl From<CollectionAttribute> for Value {
    fn from(attribute: CollectionAttribute) -> Self {
        let mut object = Map::new();
        object.insert("type".to_string(), encode_int_or_string(&attribute.kind));
        object.insert("value".to_string(), encode_int_or_string(&attribute.value));
        Value::Object(object)
    }
}
