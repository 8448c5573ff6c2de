//! Polymorphic property resolution and round-trip serialization for
//! Activity Streams 2.0 documents.
//!
//! Every property of every [`Kind`] may hold several structurally different
//! alternatives: a nested typed document, a bare IRI, a literal in one of
//! several encodings, or a value the vocabulary does not recognize. This
//! crate decides which alternative a raw JSON value is, stores it as one
//! [`PropertyValue`], and writes documents back out so that a
//! deserialize/serialize cycle loses nothing.
//!
//! # Entry Point
//!
//! ```
//! use astreams::{to_document, Kind};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Create",
//!     "actor": "https://example.com/alice",
//!     "object": {"type": "Note", "content": "Hello"},
//! });
//! let doc = to_document(&raw)?;
//! assert_eq!(doc.kind(), Kind::Create);
//! let note = doc.get("object").and_then(|v| v.as_document());
//! assert_eq!(note.map(|n| n.kind()), Some(Kind::Note));
//! # Ok::<(), astreams::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod codec;
pub mod document;
pub mod error;
pub mod localized;
pub mod resolve;
pub mod slot;
pub mod unknown;
pub mod value;

pub use astreams_vocab::{Kind, PropertyDecl, Range, Registry};
pub use document::Document;
pub use error::{Error, Result};
pub use localized::Localized;
pub use resolve::DecodeOptions;
pub use slot::PropertySlot;
pub use unknown::UnknownBag;
pub use value::{Alternative, PropertyValue, Scalar};

use resolve::Resolver;
use serde_json::Value;

/// Decodes a top-level document, choosing its kind from the type tag.
///
/// The first type name the registry knows wins. A tag naming no known kind
/// decodes as [`Kind::Object`].
///
/// # Errors
///
/// See [`to_document_with`].
pub fn to_document(raw: &Value) -> Result<Document> {
    to_document_with(raw, &DecodeOptions::default())
}

/// Decodes a top-level document with explicit options.
///
/// # Errors
///
/// Returns [`Error::NotAnObject`] if `raw` is not a map,
/// [`Error::UnknownKind`] under [`DecodeOptions::strict_types`] when no type
/// name is known, and any error [`Document::deserialize_with`] raises.
pub fn to_document_with(raw: &Value, options: &DecodeOptions) -> Result<Document> {
    let resolver = Resolver::new(options);
    let kind = resolver.top_level_kind(raw)?;
    resolver.document(kind, raw)
}
