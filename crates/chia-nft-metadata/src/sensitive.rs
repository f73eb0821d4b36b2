//! The `sensitive_content` marker.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CodecError, JsonKind};

const FIELD: &str = "sensitive_content";

/// Content warning for an NFT: either a plain flag or a list of categories.
///
/// When categories are present they are written instead of the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SensitiveContent {
    pub flag: bool,
    pub categories: Vec<String>,
}

impl SensitiveContent {
    pub fn flagged(flag: bool) -> Self {
        Self {
            flag,
            categories: Vec::new(),
        }
    }

    pub fn categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flag: false,
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the content carries any warning at all.
    pub fn is_sensitive(&self) -> bool {
        self.flag || !self.categories.is_empty()
    }
}

impl TryFrom<Value> for SensitiveContent {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(flag) => Ok(Self::flagged(flag)),
            Value::Array(items) => {
                let categories = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(CodecError::unexpected(
                            FIELD,
                            JsonKind::of(&other),
                            "array of strings",
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::categories(categories))
            }
            other => Err(CodecError::unexpected(
                FIELD,
                JsonKind::of(&other),
                "boolean or array of strings",
            )),
        }
    }
}

impl From<SensitiveContent> for Value {
    fn from(content: SensitiveContent) -> Self {
        if content.categories.is_empty() {
            Value::Bool(content.flag)
        } else {
            Value::Array(content.categories.into_iter().map(Value::String).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_list_round_trip() {
        let content: SensitiveContent = serde_json::from_str(r#"["violence","nudity"]"#).unwrap();
        assert_eq!(content.categories, vec!["violence", "nudity"]);
        assert!(!content.flag);
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"["violence","nudity"]"#
        );
    }

    #[test]
    fn test_flag_round_trip() {
        for flag in [true, false] {
            let json = serde_json::to_string(&SensitiveContent::flagged(flag)).unwrap();
            assert_eq!(json, flag.to_string());
            let decoded: SensitiveContent = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded.flag, flag);
            assert!(decoded.categories.is_empty());
        }
    }

    #[test]
    fn test_categories_win_over_flag() {
        let content = SensitiveContent {
            flag: true,
            categories: vec!["gore".to_string()],
        };
        assert_eq!(serde_json::to_value(&content).unwrap(), json!(["gore"]));
    }

    #[test]
    fn test_empty_array_decodes_to_unflagged() {
        let content: SensitiveContent = serde_json::from_value(json!([])).unwrap();
        assert!(!content.is_sensitive());
        assert_eq!(serde_json::to_value(&content).unwrap(), json!(false));
    }

    #[test]
    fn test_non_string_element_rejected() {
        let err = SensitiveContent::try_from(json!(["violence", 3])).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedValueType { found: JsonKind::Number, .. }
        ));
    }

    #[test]
    fn test_other_shapes_rejected() {
        for value in [json!("yes"), json!(1), json!(null), json!({"flag": true})] {
            assert!(SensitiveContent::try_from(value).is_err());
        }
    }
}
