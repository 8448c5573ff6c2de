//! Engine errors.
//!
//! Only genuinely malformed payloads surface here. A value that matches no
//! declared alternative is not an error; it is kept as
//! [`PropertyValue::Unknown`](crate::PropertyValue::Unknown).

use astreams_vocab::Kind;

use crate::codec::CodecError;

/// Errors raised while decoding or editing documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A document was expected but the raw value is not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type actually found.
        found: &'static str,
    },

    /// A declared `<name>Map` key does not hold a map of strings.
    #[error("`{key}` must map language tags to strings: {source}")]
    MalformedLocalized {
        /// The offending wire key.
        key: String,
        /// Codec detail.
        source: CodecError,
    },

    /// A nested document chosen for a property failed to decode.
    #[error("in `{property}`: {source}")]
    Nested {
        /// Property holding the nested document.
        property: &'static str,
        /// The nested failure.
        source: Box<Error>,
    },

    /// Nested documents exceed the configured depth.
    #[error("documents nested deeper than {limit} levels")]
    DepthLimit {
        /// Configured maximum.
        limit: usize,
    },

    /// A mutating accessor named a property the kind neither declares nor
    /// withholds.
    #[error("{kind} does not declare `{property}`")]
    UndeclaredProperty {
        /// Kind of the document being edited.
        kind: Kind,
        /// Requested property name.
        property: String,
    },

    /// Strict decoding found no known kind in the top-level type tag.
    #[error("no known kind among type names {0:?}")]
    UnknownKind(Vec<String>),
}

impl Error {
    pub(crate) fn nested(property: &'static str, source: Error) -> Self {
        Error::Nested {
            property,
            source: Box::new(source),
        }
    }
}

/// Engine result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
