//! `rdf:langString`: a map of language tag to string.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::CodecError;

/// A natural-language value keyed by language tag, in document order.
pub type LangString = IndexMap<String, String>;

/// Decodes a language map. Every entry must be a string and the map must not
/// be empty.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-maps and [`CodecError::Syntax`] for
/// empty maps or non-string entries.
pub fn decode(value: &Value) -> Result<LangString, CodecError> {
    let map = value
        .as_object()
        .ok_or_else(|| CodecError::shape("language map", value))?;
    decode_map(map)
}

pub(crate) fn decode_map(map: &Map<String, Value>) -> Result<LangString, CodecError> {
    if map.is_empty() {
        return Err(CodecError::syntax("language map", "no entries"));
    }
    map.iter()
        .map(|(tag, text)| match text {
            Value::String(s) => Ok((tag.clone(), s.clone())),
            other => Err(CodecError::syntax(
                "language map",
                format!("entry `{tag}` is a {}", super::json_type(other)),
            )),
        })
        .collect()
}

/// Encodes a language map.
#[must_use]
pub fn encode(value: &LangString) -> Value {
    Value::Object(
        value
            .iter()
            .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_entry_order() {
        let raw = json!({"fr": "bonjour", "en": "hello"});
        let decoded = decode(&raw).unwrap();
        let tags: Vec<&str> = decoded.keys().map(String::as_str).collect();
        assert_eq!(tags, ["fr", "en"]);
        assert_eq!(encode(&decoded), raw);
    }

    #[test]
    fn rejects_empty_and_non_string_entries() {
        assert!(decode(&json!({})).is_err());
        assert!(decode(&json!({"en": 1})).is_err());
        assert!(decode(&json!("hello")).is_err());
    }
}
