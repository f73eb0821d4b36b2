//! Number-or-string field handling shared by the attribute types.
//!
//! CHIP-0007 lets several fields appear either as a JSON integer or as a
//! JSON string. In memory they are always strings; on the wire a string
//! that parses as a base-10 integer is written back as a number.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{CodecError, JsonKind};

const INT_OR_STRING: &str = "string or integer";
const INTEGER: &str = "integer";

/// Take the object out of a value, or fail with the type that was found.
pub(crate) fn into_object(value: Value) -> Result<Map<String, Value>, CodecError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CodecError::NotAnObject {
            found: JsonKind::of(&other),
        }),
    }
}

/// Decode a set of required number-or-string fields, in the order given.
pub(crate) fn int_or_string_fields<const N: usize>(
    object: &Map<String, Value>,
    fields: [&str; N],
) -> Result<[String; N], CodecError> {
    let mut decoded: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, field) in decoded.iter_mut().zip(fields) {
        *slot = int_or_string(object, field)?;
    }
    Ok(decoded)
}

/// Decode one required number-or-string field.
pub(crate) fn int_or_string(object: &Map<String, Value>, field: &str) -> Result<String, CodecError> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(truncate(field, n).to_string()),
        other => Err(CodecError::unexpected(field, JsonKind::of_opt(other), INT_OR_STRING)),
    }
}

/// Decode an optional integer field. Absent keys yield `None`.
pub(crate) fn optional_integer(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<i64>, CodecError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(Some(saturate(field, n))),
        Some(other) => Err(CodecError::unexpected(field, JsonKind::of(other), INTEGER)),
    }
}

/// Encode an in-memory string: integers become numbers, anything else stays text.
pub(crate) fn encode_int_or_string(s: &str) -> Value {
    match s.parse::<i64>() {
        Ok(i) => Value::Number(i.into()),
        Err(_) => Value::String(s.to_string()),
    }
}

/// Integral view of a JSON number, kept exact where the number is integral.
enum Integral {
    Signed(i64),
    Unsigned(u64),
}

impl std::fmt::Display for Integral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signed(i) => write!(f, "{}", i),
            Self::Unsigned(u) => write!(f, "{}", u),
        }
    }
}

fn truncate(field: &str, n: &Number) -> Integral {
    if let Some(i) = n.as_i64() {
        Integral::Signed(i)
    } else if let Some(u) = n.as_u64() {
        Integral::Unsigned(u)
    } else {
        let f = n.as_f64().unwrap_or_default();
        debug!(field, value = f, "truncating fractional number to integer");
        // `as` saturates at the i64 bounds and maps NaN to zero.
        Integral::Signed(f.trunc() as i64)
    }
}

fn saturate(field: &str, n: &Number) -> i64 {
    match truncate(field, n) {
        Integral::Signed(i) => i,
        Integral::Unsigned(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        into_object(value).unwrap()
    }

    #[test]
    fn test_string_decodes_verbatim() {
        let obj = object(json!({"value": "Blue Sky"}));
        assert_eq!(int_or_string(&obj, "value").unwrap(), "Blue Sky");
    }

    #[test]
    fn test_number_decodes_to_base10() {
        let obj = object(json!({"a": 42, "b": -3, "c": 18446744073709551615u64}));
        assert_eq!(int_or_string(&obj, "a").unwrap(), "42");
        assert_eq!(int_or_string(&obj, "b").unwrap(), "-3");
        assert_eq!(int_or_string(&obj, "c").unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_fractional_number_truncates() {
        let obj = object(json!({"up": 7.9, "down": -7.9}));
        assert_eq!(int_or_string(&obj, "up").unwrap(), "7");
        assert_eq!(int_or_string(&obj, "down").unwrap(), "-7");
    }

    #[test]
    fn test_other_types_rejected_with_kind() {
        let obj = object(json!({"n": null, "b": true, "a": [1], "o": {}}));
        for (field, kind) in [
            ("n", JsonKind::Null),
            ("b", JsonKind::Boolean),
            ("a", JsonKind::Array),
            ("o", JsonKind::Object),
            ("absent", JsonKind::Missing),
        ] {
            match int_or_string(&obj, field) {
                Err(CodecError::UnexpectedValueType { field: f, found, .. }) => {
                    assert_eq!(f, field);
                    assert_eq!(found, kind);
                }
                other => panic!("expected type error for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_fields_decode_in_order() {
        let obj = object(json!({"type": 1, "value": "one"}));
        let [t, v] = int_or_string_fields(&obj, ["type", "value"]).unwrap();
        assert_eq!(t, "1");
        assert_eq!(v, "one");
    }

    #[test]
    fn test_optional_integer() {
        let obj = object(json!({"min_value": 2, "max_value": "9"}));
        assert_eq!(optional_integer(&obj, "min_value").unwrap(), Some(2));
        assert_eq!(optional_integer(&obj, "missing").unwrap(), None);
        assert!(matches!(
            optional_integer(&obj, "max_value"),
            Err(CodecError::UnexpectedValueType { found: JsonKind::String, .. })
        ));
    }

    #[test]
    fn test_encode_prefers_integer() {
        assert_eq!(encode_int_or_string("7"), json!(7));
        assert_eq!(encode_int_or_string("-12"), json!(-12));
        assert_eq!(encode_int_or_string("7a"), json!("7a"));
        assert_eq!(encode_int_or_string(""), json!(""));
        assert_eq!(encode_int_or_string("1.5"), json!("1.5"));
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            into_object(json!("x")).unwrap_err(),
            CodecError::NotAnObject { found: JsonKind::String }
        );
    }
}
