//! `xsd:string` and RFC 5988 link relations.

use serde_json::Value;

use super::{expect_str, CodecError};

/// Decodes a plain string.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] if `value` is not a JSON string.
pub fn decode(value: &Value) -> Result<String, CodecError> {
    expect_str(value, "string").map(str::to_owned)
}

/// Encodes a plain string.
#[must_use]
pub fn encode(value: &str) -> Value {
    Value::String(value.to_owned())
}

/// Decodes a link relation: a non-empty token with no whitespace.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-strings and [`CodecError::Syntax`]
/// for empty or space-separated text.
pub fn decode_link_relation(value: &Value) -> Result<String, CodecError> {
    let text = expect_str(value, "link relation string")?;
    if text.is_empty() {
        return Err(CodecError::syntax("link relation", "empty"));
    }
    if text.chars().any(char::is_whitespace) {
        return Err(CodecError::syntax("link relation", "contains whitespace"));
    }
    Ok(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_accepts_only_strings() {
        assert_eq!(decode(&json!("hi")).unwrap(), "hi");
        assert!(decode(&json!(1)).is_err());
        assert!(decode(&json!({"en": "hi"})).is_err());
    }

    #[test]
    fn link_relation_rejects_whitespace() {
        assert_eq!(decode_link_relation(&json!("canonical")).unwrap(), "canonical");
        assert!(decode_link_relation(&json!("a b")).is_err());
        assert!(decode_link_relation(&json!("")).is_err());
    }
}
