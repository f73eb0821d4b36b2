//! The CHIP-0007 metadata document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attribute::Attribute;
use crate::collection::Collection;
use crate::sensitive::SensitiveContent;

/// Format identifier written by CHIP-0007 compliant tools.
pub const CHIP_0007_FORMAT: &str = "CHIP-0007";

/// An NFT metadata document.
///
/// Chia 1.4.0 wrote the edition counters as `series_number`/`series_total`;
/// 1.5.0 moved to `edition_number`/`edition_total`. Both pairs are kept so
/// documents from either release survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minting_tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_content: Option<SensitiveContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_total: Option<u64>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Collection>,
    /// Free-form extension data, kept untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Metadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            format: CHIP_0007_FORMAT.to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Find the first attribute with the given trait type.
    pub fn attribute(&self, trait_type: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.trait_type == trait_type)
    }

    /// Whether the document declares the CHIP-0007 format.
    pub fn is_chip_0007(&self) -> bool {
        self.format == CHIP_0007_FORMAT
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
