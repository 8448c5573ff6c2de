//! Property values: one sum type for every alternative a property can hold.
//!
//! A [`PropertyValue`] is exactly one of a nested document, a bare IRI
//! reference, a literal, or an unrecognized raw value. Holding more than one
//! alternative at once is unrepresentable.

use astreams_vocab::{Kind, Range};
use chrono::{DateTime, FixedOffset};
use serde_json::{Number, Value};

use crate::codec::{self, Duration, Iri, LangString, LanguageTag, MediaType};
use crate::document::Document;

/// A literal in one of the recognized encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `xsd:string`
    String(String),
    /// `rdf:langString`
    LangString(LangString),
    /// `xsd:dateTime`
    DateTime(DateTime<FixedOffset>),
    /// `xsd:duration`
    Duration(Duration),
    /// `xsd:float`, kept as the JSON number it was read from.
    Float(Number),
    /// `xsd:boolean`
    Boolean(bool),
    /// `xsd:nonNegativeInteger`
    NonNegativeInteger(u64),
    /// RFC 2045 media type.
    MediaType(MediaType),
    /// BCP 47 language tag.
    LanguageTag(LanguageTag),
    /// RFC 5988 link relation.
    LinkRelation(String),
}

impl Scalar {
    /// Decodes `raw` with the codec for `range`.
    ///
    /// Returns `None` for [`Range::Kind`] and [`Range::Iri`], which are not
    /// literal encodings.
    pub(crate) fn decode(range: Range, raw: &Value) -> Option<Result<Scalar, codec::CodecError>> {
        let decoded = match range {
            Range::Kind(_) | Range::Iri => return None,
            Range::String => codec::string::decode(raw).map(Scalar::String),
            Range::LangString => codec::langstring::decode(raw).map(Scalar::LangString),
            Range::DateTime => codec::datetime::decode(raw).map(Scalar::DateTime),
            Range::Duration => codec::duration::decode(raw).map(Scalar::Duration),
            Range::Float => codec::number::decode_float(raw).map(Scalar::Float),
            Range::Boolean => codec::number::decode_boolean(raw).map(Scalar::Boolean),
            Range::NonNegativeInteger => {
                codec::number::decode_non_negative_integer(raw).map(Scalar::NonNegativeInteger)
            }
            Range::MediaType => codec::media_type::decode(raw).map(Scalar::MediaType),
            Range::LanguageTag => codec::language_tag::decode(raw).map(Scalar::LanguageTag),
            Range::LinkRelation => {
                codec::string::decode_link_relation(raw).map(Scalar::LinkRelation)
            }
        };
        Some(decoded)
    }

    /// The range this literal satisfies.
    #[must_use]
    pub fn range(&self) -> Range {
        match self {
            Scalar::String(_) => Range::String,
            Scalar::LangString(_) => Range::LangString,
            Scalar::DateTime(_) => Range::DateTime,
            Scalar::Duration(_) => Range::Duration,
            Scalar::Float(_) => Range::Float,
            Scalar::Boolean(_) => Range::Boolean,
            Scalar::NonNegativeInteger(_) => Range::NonNegativeInteger,
            Scalar::MediaType(_) => Range::MediaType,
            Scalar::LanguageTag(_) => Range::LanguageTag,
            Scalar::LinkRelation(_) => Range::LinkRelation,
        }
    }

    /// Encodes this literal.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Scalar::String(s) | Scalar::LinkRelation(s) => codec::string::encode(s),
            Scalar::LangString(m) => codec::langstring::encode(m),
            Scalar::DateTime(t) => codec::datetime::encode(t),
            Scalar::Duration(d) => codec::duration::encode(d),
            Scalar::Float(f) => codec::number::encode_float(f),
            Scalar::Boolean(b) => codec::number::encode_boolean(*b),
            Scalar::NonNegativeInteger(n) => codec::number::encode_non_negative_integer(*n),
            Scalar::MediaType(m) => codec::media_type::encode(m),
            Scalar::LanguageTag(t) => codec::language_tag::encode(t),
        }
    }
}

/// Which alternative a [`PropertyValue`] holds, without its payload.
///
/// Variants are listed in serialization priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// A nested document of the given kind.
    Document(Kind),
    /// A bare IRI reference.
    Iri,
    /// A literal of the given range.
    Scalar(Range),
    /// An unrecognized raw value.
    Unknown,
}

/// One property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A nested, owned document.
    Document(Box<Document>),
    /// A bare reference.
    Iri(Iri),
    /// A literal.
    Scalar(Scalar),
    /// A value no declared alternative accepted, kept for round-tripping.
    Unknown(Value),
}

impl PropertyValue {
    /// Serializes this value. Nested documents delegate to
    /// [`Document::serialize`]; unknown values are emitted unchanged.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            PropertyValue::Document(doc) => doc.serialize(),
            PropertyValue::Iri(iri) => codec::iri::encode(iri),
            PropertyValue::Scalar(scalar) => scalar.to_value(),
            PropertyValue::Unknown(raw) => raw.clone(),
        }
    }

    /// Names the alternative held.
    #[must_use]
    pub fn alternative(&self) -> Alternative {
        match self {
            PropertyValue::Document(doc) => Alternative::Document(doc.kind()),
            PropertyValue::Iri(_) => Alternative::Iri,
            PropertyValue::Scalar(scalar) => Alternative::Scalar(scalar.range()),
            PropertyValue::Unknown(_) => Alternative::Unknown,
        }
    }

    /// Returns `true` if this value satisfies `range`. A nested document
    /// satisfies `Range::Kind(k)` when its kind is, or extends, `k`.
    #[must_use]
    pub fn matches(&self, range: Range) -> bool {
        match (self, range) {
            (PropertyValue::Document(doc), Range::Kind(capability)) => doc.is_a(capability),
            (PropertyValue::Iri(_), Range::Iri) => true,
            (PropertyValue::Scalar(scalar), range) => scalar.range() == range,
            _ => false,
        }
    }

    /// The nested document, if that is the alternative held.
    #[must_use]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            PropertyValue::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Mutable access to the nested document.
    pub fn as_document_mut(&mut self) -> Option<&mut Document> {
        match self {
            PropertyValue::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// The IRI, if that is the alternative held.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            PropertyValue::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The literal, if that is the alternative held.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            PropertyValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The plain string, if that is the alternative held.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The language map, if that is the alternative held.
    #[must_use]
    pub fn as_lang_string(&self) -> Option<&LangString> {
        match self {
            PropertyValue::Scalar(Scalar::LangString(m)) => Some(m),
            _ => None,
        }
    }

    /// The timestamp, if that is the alternative held.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            PropertyValue::Scalar(Scalar::DateTime(t)) => Some(t),
            _ => None,
        }
    }

    /// The duration, if that is the alternative held.
    #[must_use]
    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            PropertyValue::Scalar(Scalar::Duration(d)) => Some(d),
            _ => None,
        }
    }

    /// The float, if that is the alternative held.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Scalar(Scalar::Float(f)) => f.as_f64(),
            _ => None,
        }
    }

    /// The boolean, if that is the alternative held.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Scalar(Scalar::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// The non-negative integer, if that is the alternative held.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            PropertyValue::Scalar(Scalar::NonNegativeInteger(n)) => Some(*n),
            _ => None,
        }
    }

    /// The media type, if that is the alternative held.
    #[must_use]
    pub fn as_media_type(&self) -> Option<&MediaType> {
        match self {
            PropertyValue::Scalar(Scalar::MediaType(m)) => Some(m),
            _ => None,
        }
    }

    /// The unrecognized raw value, if that is the alternative held.
    #[must_use]
    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            PropertyValue::Unknown(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns `true` for the unrecognized alternative.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, PropertyValue::Unknown(_))
    }
}

impl From<Document> for PropertyValue {
    fn from(doc: Document) -> Self {
        PropertyValue::Document(Box::new(doc))
    }
}

impl From<Iri> for PropertyValue {
    fn from(iri: Iri) -> Self {
        PropertyValue::Iri(iri)
    }
}

impl From<Scalar> for PropertyValue {
    fn from(scalar: Scalar) -> Self {
        PropertyValue::Scalar(scalar)
    }
}

impl From<DateTime<FixedOffset>> for PropertyValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PropertyValue::Scalar(Scalar::DateTime(value))
    }
}

impl From<Duration> for PropertyValue {
    fn from(value: Duration) -> Self {
        PropertyValue::Scalar(Scalar::Duration(value))
    }
}

impl From<MediaType> for PropertyValue {
    fn from(value: MediaType) -> Self {
        PropertyValue::Scalar(Scalar::MediaType(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(Scalar::String(value))
    }
}

/// Non-finite values have no JSON form and become `Unknown(null)`.
impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        match codec::number::float_from_f64(value) {
            Some(n) => PropertyValue::Scalar(Scalar::Float(n)),
            None => PropertyValue::Unknown(Value::Null),
        }
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::Scalar(Scalar::NonNegativeInteger(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Scalar(Scalar::Boolean(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alternative_reports_payload_shape() {
        let iri = PropertyValue::from(Iri::parse("https://example.com/a").unwrap());
        assert_eq!(iri.alternative(), Alternative::Iri);
        assert_eq!(PropertyValue::from("hi").alternative(), Alternative::Scalar(Range::String));
        assert_eq!(PropertyValue::Unknown(json!(1)).alternative(), Alternative::Unknown);
        let note = PropertyValue::from(Document::new(Kind::Note));
        assert_eq!(note.alternative(), Alternative::Document(Kind::Note));
    }

    #[test]
    fn matches_uses_capability_for_documents() {
        let note = PropertyValue::from(Document::new(Kind::Note));
        assert!(note.matches(Range::Kind(Kind::Object)));
        assert!(note.matches(Range::Kind(Kind::Note)));
        assert!(!note.matches(Range::Kind(Kind::Link)));
        assert!(!note.matches(Range::Iri));
        assert!(PropertyValue::from(true).matches(Range::Boolean));
    }

    #[test]
    fn scalar_serialization_delegates_to_codecs() {
        assert_eq!(PropertyValue::from(3.0).to_value(), json!(3));
        assert_eq!(PropertyValue::from(7_u64).to_value(), json!(7));
        let raw = json!({"nested": [1, {"deep": true}]});
        assert_eq!(PropertyValue::Unknown(raw.clone()).to_value(), raw);
    }

    #[test]
    fn accessors_are_exclusive() {
        let value = PropertyValue::from("hi");
        assert_eq!(value.as_str(), Some("hi"));
        assert!(value.as_iri().is_none());
        assert!(value.as_document().is_none());
        assert!(value.as_unknown().is_none());
        assert!(!value.is_unknown());
    }
}
