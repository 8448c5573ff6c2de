//! BCP 47 language tags.

use std::fmt;

use serde_json::Value;

use super::{expect_str, CodecError};

/// A well-formed BCP 47 language tag such as `en` or `zh-Hant-TW`.
///
/// Only the shape is checked: a 1–8 letter primary subtag followed by
/// alphanumeric subtags of 1–8 characters. Registry membership is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parses a language tag.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] when a subtag is empty, too long, or
    /// contains characters outside `[A-Za-z0-9]`.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let mut subtags = text.split('-');
        let primary = subtags.next().unwrap_or_default();
        if primary.is_empty() || primary.len() > 8 || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CodecError::syntax("language tag", format!("bad primary subtag in `{text}`")));
        }
        for subtag in subtags {
            if subtag.is_empty() || subtag.len() > 8 || !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(CodecError::syntax("language tag", format!("bad subtag `{subtag}`")));
            }
        }
        Ok(Self(text.to_owned()))
    }

    /// The tag as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decodes a language tag string.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-strings and [`CodecError::Syntax`]
/// for malformed tags.
pub fn decode(value: &Value) -> Result<LanguageTag, CodecError> {
    LanguageTag::parse(expect_str(value, "language tag string")?)
}

/// Encodes a language tag.
#[must_use]
pub fn encode(value: &LanguageTag) -> Value {
    Value::String(value.0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_common_tags() {
        for tag in ["en", "en-US", "zh-Hant-TW", "de-CH-1901"] {
            assert_eq!(decode(&json!(tag)).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "en_US", "en--US", "toolongprimary", "1en"] {
            assert!(LanguageTag::parse(tag).is_err(), "{tag} should be rejected");
        }
    }
}
