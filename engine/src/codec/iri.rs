//! `xsd:anyURI`: absolute IRI references.

use std::fmt;

use serde_json::Value;
use url::Url;

use super::{expect_str, CodecError};

/// An absolute IRI, validated by [`url::Url`] but kept as written so that
/// serialization reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Iri {
    text: String,
    url: Url,
}

impl Iri {
    /// Parses an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] for relative references and anything
    /// [`Url::parse`] rejects.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let url = Url::parse(text).map_err(|e| CodecError::syntax("IRI", e))?;
        Ok(Self {
            text: text.to_owned(),
            url,
        })
    }

    /// The IRI as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed form.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Iri {}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Self {
            text: url.as_str().to_owned(),
            url,
        }
    }
}

impl std::str::FromStr for Iri {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iri::parse(s)
    }
}

/// Decodes an absolute IRI string.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-strings and [`CodecError::Syntax`]
/// for relative or malformed references.
pub fn decode(value: &Value) -> Result<Iri, CodecError> {
    Iri::parse(expect_str(value, "IRI string")?)
}

/// Encodes an IRI as written.
#[must_use]
pub fn encode(value: &Iri) -> Value {
    Value::String(value.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_original_spelling() {
        let raw = json!("https://example.com");
        let iri = decode(&raw).unwrap();
        assert_eq!(iri.url().as_str(), "https://example.com/");
        assert_eq!(encode(&iri), raw);
    }

    #[test]
    fn accepts_non_http_schemes() {
        assert!(decode(&json!("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66")).is_ok());
        assert!(decode(&json!("mailto:a@example.com")).is_ok());
    }

    #[test]
    fn rejects_relative_and_plain_text() {
        assert!(decode(&json!("hi")).is_err());
        assert!(decode(&json!("/relative/path")).is_err());
        assert!(decode(&json!("2020-01-01T00:00:00Z")).is_err());
        assert!(decode(&json!(1)).is_err());
    }
}
