//! Scalar codecs.
//!
//! Each sub-module is an independent decode/encode pair for one literal
//! encoding. `decode` never panics: a value of the wrong shape or with
//! malformed text yields a [`CodecError`], which resolution treats as "this
//! alternative does not match" rather than as a failure.

pub mod datetime;
pub mod duration;
pub mod iri;
pub mod langstring;
pub mod language_tag;
pub mod media_type;
pub mod number;
pub mod string;

pub use duration::Duration;
pub use iri::Iri;
pub use langstring::LangString;
pub use language_tag::LanguageTag;
pub use media_type::MediaType;

use serde_json::Value;

/// Why a codec rejected a raw value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// The raw value has the wrong JSON shape for this encoding.
    #[error("expected {expected}, found {found}")]
    Shape {
        /// What the codec accepts.
        expected: &'static str,
        /// What it was given.
        found: &'static str,
    },
    /// The raw value has the right shape but its text does not parse.
    #[error("invalid {encoding}: {reason}")]
    Syntax {
        /// The encoding that failed.
        encoding: &'static str,
        /// Parser detail.
        reason: String,
    },
}

impl CodecError {
    pub(crate) fn shape(expected: &'static str, found: &Value) -> Self {
        CodecError::Shape {
            expected,
            found: json_type(found),
        }
    }

    pub(crate) fn syntax(encoding: &'static str, reason: impl ToString) -> Self {
        CodecError::Syntax {
            encoding,
            reason: reason.to_string(),
        }
    }
}

/// Names the JSON type of `value` for diagnostics.
#[must_use]
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows the string inside `value`, or reports a shape mismatch.
pub(crate) fn expect_str<'v>(value: &'v Value, expected: &'static str) -> Result<&'v str, CodecError> {
    value.as_str().ok_or_else(|| CodecError::shape(expected, value))
}
