//! `xsd:float`, `xsd:nonNegativeInteger` and `xsd:boolean`.

use serde_json::{Number, Value};

use super::CodecError;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Decodes any JSON number as a float. The number is kept as parsed, so
/// integers beyond `f64` precision and `-0.0` are written back unchanged.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] if `value` is not a number.
pub fn decode_float(value: &Value) -> Result<Number, CodecError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        other => Err(CodecError::shape("number", other)),
    }
}

/// Encodes a float as the number it was decoded from.
#[must_use]
pub fn encode_float(value: &Number) -> Value {
    Value::Number(value.clone())
}

/// Builds the JSON number for an `f64`. Integral values become JSON
/// integers so that `5.0` is written `5`; non-finite values have no JSON
/// form.
#[must_use]
pub fn float_from_f64(value: f64) -> Option<Number> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

/// Decodes a JSON integer that is zero or greater.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-numbers and [`CodecError::Syntax`]
/// for negative or fractional numbers.
pub fn decode_non_negative_integer(value: &Value) -> Result<u64, CodecError> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| {
            CodecError::syntax("non-negative integer", format!("{n} is negative or fractional"))
        }),
        other => Err(CodecError::shape("integer", other)),
    }
}

/// Encodes a non-negative integer.
#[must_use]
pub fn encode_non_negative_integer(value: u64) -> Value {
    Value::Number(Number::from(value))
}

/// Decodes a JSON boolean.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] if `value` is not a boolean.
pub fn decode_boolean(value: &Value) -> Result<bool, CodecError> {
    value.as_bool().ok_or_else(|| CodecError::shape("boolean", value))
}

/// Encodes a boolean.
#[must_use]
pub fn encode_boolean(value: bool) -> Value {
    Value::Bool(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn float_keeps_the_parsed_number() {
        let decoded = decode_float(&json!(5)).unwrap();
        assert_eq!(decoded.as_f64(), Some(5.0));
        assert_eq!(encode_float(&decoded), json!(5));
        assert!(decode_float(&json!("5")).is_err());

        let raw: Value = serde_json::from_str("9007199254740993").unwrap();
        let big = decode_float(&raw).unwrap();
        assert_eq!(serde_json::to_string(&encode_float(&big)).unwrap(), "9007199254740993");

        let raw: Value = serde_json::from_str("-0.0").unwrap();
        let zero = decode_float(&raw).unwrap();
        assert_eq!(serde_json::to_string(&encode_float(&zero)).unwrap(), "-0.0");
    }

    #[test]
    fn float_from_f64_prefers_integers() {
        assert_eq!(float_from_f64(5.0).map(Value::Number), Some(json!(5)));
        assert_eq!(float_from_f64(-12.25).map(Value::Number), Some(json!(-12.25)));
        assert!(float_from_f64(f64::NAN).is_none());
        assert!(float_from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn non_negative_integer_rejects_signs_and_fractions() {
        assert_eq!(decode_non_negative_integer(&json!(42)).unwrap(), 42);
        assert!(matches!(
            decode_non_negative_integer(&json!(-1)),
            Err(CodecError::Syntax { .. })
        ));
        assert!(decode_non_negative_integer(&json!(1.5)).is_err());
        assert!(matches!(
            decode_non_negative_integer(&json!("1")),
            Err(CodecError::Shape { .. })
        ));
    }

    #[test]
    fn boolean_is_strict() {
        assert!(decode_boolean(&json!(true)).unwrap());
        assert!(decode_boolean(&json!("true")).is_err());
        assert_eq!(encode_boolean(false), json!(false));
    }
}
