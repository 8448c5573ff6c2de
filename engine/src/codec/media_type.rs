//! RFC 2045 MIME media types.

use std::fmt;

use mime::Mime;
use serde_json::Value;

use super::{expect_str, CodecError};

/// A media type, validated by [`mime::Mime`] but kept as written.
#[derive(Debug, Clone)]
pub struct MediaType {
    text: String,
    mime: Mime,
}

impl MediaType {
    /// Parses a media type such as `text/html; charset=utf-8`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] when the text is not a valid media type.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let mime = text
            .parse::<Mime>()
            .map_err(|e| CodecError::syntax("media type", e))?;
        Ok(Self {
            text: text.to_owned(),
            mime,
        })
    }

    /// The media type as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed form.
    #[must_use]
    pub fn mime(&self) -> &Mime {
        &self.mime
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Decodes a media type string.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-strings and [`CodecError::Syntax`]
/// for malformed types.
pub fn decode(value: &Value) -> Result<MediaType, CodecError> {
    MediaType::parse(expect_str(value, "media type string")?)
}

/// Encodes a media type as written.
#[must_use]
pub fn encode(value: &MediaType) -> Value {
    Value::String(value.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_parameters() {
        let decoded = decode(&json!("text/html; charset=utf-8")).unwrap();
        assert_eq!(decoded.mime().type_(), mime::TEXT);
        assert_eq!(encode(&decoded), json!("text/html; charset=utf-8"));
    }

    #[test]
    fn rejects_bare_words() {
        assert!(decode(&json!("html")).is_err());
        assert!(decode(&json!(null)).is_err());
    }
}
