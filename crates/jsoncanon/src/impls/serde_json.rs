use serde::Serialize;
use serde_json::Value;

use crate::{
    value::{JsonValue, Number},
    Error,
};

/// Canonicalize any `Serialize` value.
///
/// The value is serialized through [`serde_json::Value`] first, so whatever
/// `serde` representation the type chooses (map ordering included) has no
/// effect on the output bytes.
///
/// # Errors
///
/// [`Error::Serialize`] if serialization itself fails, or any encoder error
/// such as [`Error::UnrepresentableNumber`] for non-finite floats.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    let value = serde_json::to_value(value)?;
    crate::canonicalize(&JsonValue::from(value))
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    JsonValue::Number(Number::Integer(i))
                } else {
                    // Above i64::MAX or fractional; serde_json numbers are
                    // always finite.
                    let f = num.as_f64().expect("serde_json numbers convert to f64");
                    JsonValue::Number(Number::Float(f))
                }
            }
            Value::String(s) => JsonValue::String(s.into()),
            Value::Array(old) => {
                let new: Vec<JsonValue> = old.into_iter().map(JsonValue::from).collect();
                JsonValue::Array(new.into_boxed_slice())
            }
            Value::Object(old) => {
                let members: Vec<(Box<str>, JsonValue)> = old
                    .into_iter()
                    .map(|(k, v)| (k.into(), JsonValue::from(v)))
                    .collect();
                JsonValue::Object(members.into_boxed_slice())
            }
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => compare_number(l, r),
        (Value::String(l), JsonValue::String(r)) => l.as_bytes() == r.as_bytes(),
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            // Member order is not semantic on either side
            l.len() == r.len()
                && r.iter().all(|(key, value)| {
                    l.get(key.as_ref()).is_some_and(|other| eq(other, value))
                })
        }
        _ => false,
    }
}

#[inline]
fn compare_number(lhs: &serde_json::Number, rhs: &Number) -> bool {
    match rhs {
        Number::Integer(i) => lhs.as_i64() == Some(*i),
        Number::Float(f) => lhs.as_f64() == Some(*f),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    #[test_case(json!(null), JsonValue::Null; "null")]
    #[test_case(json!(true), JsonValue::Bool(true); "bool")]
    #[test_case(json!(42), JsonValue::Number(Number::Integer(42)); "integer")]
    #[test_case(json!(-42), JsonValue::Number(Number::Integer(-42)); "negative integer")]
    #[test_case(json!(3.25), JsonValue::Number(Number::Float(3.25)); "float")]
    #[test_case(json!(u64::MAX), JsonValue::Number(Number::Float(1.8446744073709552e19)); "u64 range becomes float")]
    #[test_case(json!("hello"), JsonValue::String("hello".into()); "string")]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::Array(Box::new([
            JsonValue::Number(Number::Integer(1)),
            JsonValue::Number(Number::Integer(2)),
            JsonValue::Number(Number::Integer(3)),
        ]));
        "array"
    )]
    #[test_case(
        json!({"a": 1, "b": "test"}),
        JsonValue::Object(Box::new([
            ("a".into(), JsonValue::Number(Number::Integer(1))),
            ("b".into(), JsonValue::String("test".into())),
        ]));
        "object"
    )]
    fn conversion(value: serde_json::Value, expected: JsonValue) {
        assert_eq!(JsonValue::from(value), expected);
    }

    #[test_case(json!(null); "null")]
    #[test_case(json!([1, "x", {"k": false}]); "mixed array")]
    #[test_case(json!({"b": 2, "a": 1}); "object")]
    fn comparison_roundtrip(value: serde_json::Value) {
        let converted = JsonValue::from(value.clone());
        assert_eq!(value, converted);
        assert_eq!(converted, value);
    }

    #[test]
    fn comparison_ignores_member_order() {
        let converted = JsonValue::Object(Box::new([
            ("b".into(), JsonValue::Number(Number::Integer(2))),
            ("a".into(), JsonValue::Number(Number::Integer(1))),
        ]));
        assert_eq!(json!({"a": 1, "b": 2}), converted);
    }

    #[test]
    fn serializable_types_canonicalize() {
        #[derive(Serialize)]
        struct Payload {
            b: u32,
            a: &'static str,
        }

        let bytes = to_canonical_bytes(&Payload { b: 7, a: "x" }).expect("payload serializes");
        assert_eq!(bytes, br#"{"a":"x","b":7}"#);
    }

    #[test]
    fn serde_json_lowers_non_finite_to_null() {
        // serde_json itself maps NaN and infinities to null in value form,
        // so they never reach the number formatter through this entry point.
        let bytes = to_canonical_bytes(&f64::NAN).expect("NaN becomes null");
        assert_eq!(bytes, b"null");
    }
}
