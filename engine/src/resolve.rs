//! Alternative resolution: deciding, for one raw value and one declared
//! property, which alternative the value is.
//!
//! Typed maps are matched against the property's kind alternatives, outer
//! loop over alternatives in declared order and inner loop over the value's
//! type names in listed order, so a value tagged `["Link", "Note"]` lands in
//! the first declared alternative either name satisfies. Untyped maps are
//! never treated as documents. Everything else goes through the literal and
//! IRI codecs in declared order. A value nothing accepts is kept verbatim.

use astreams_vocab::{Kind, PropertyDecl, Range, Registry};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::{self, json_type};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::slot::PropertySlot;
use crate::unknown;
use crate::value::{PropertyValue, Scalar};

/// Wire key carrying the type tag.
pub const TYPE_KEY: &str = "type";

/// Decoding knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject top-level documents whose type tag names no known kind instead
    /// of decoding them as [`Kind::Object`].
    pub strict_types: bool,
    /// Maximum nesting depth of documents.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_types: false,
            max_depth: 64,
        }
    }
}

/// Walks one raw tree, tracking nesting depth.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'a> {
    registry: &'static Registry,
    options: &'a DecodeOptions,
    depth: usize,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(options: &'a DecodeOptions) -> Self {
        Self {
            registry: Registry::global(),
            options,
            depth: 0,
        }
    }

    pub(crate) fn registry(&self) -> &'static Registry {
        self.registry
    }

    fn nested(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Decodes `raw` as a document of `kind`.
    pub(crate) fn document(&self, kind: Kind, raw: &Value) -> Result<Document> {
        let map = raw.as_object().ok_or(Error::NotAnObject {
            found: json_type(raw),
        })?;
        self.document_map(kind, map)
    }

    /// Decodes an already-destructured map as a document of `kind`.
    pub(crate) fn document_map(&self, kind: Kind, map: &Map<String, Value>) -> Result<Document> {
        if self.depth > self.options.max_depth {
            return Err(Error::DepthLimit {
                limit: self.options.max_depth,
            });
        }
        Document::decode(self, kind, map)
    }

    /// Picks the top-level kind from a type tag.
    pub(crate) fn top_level_kind(&self, raw: &Value) -> Result<Kind> {
        let map = raw.as_object().ok_or(Error::NotAnObject {
            found: json_type(raw),
        })?;
        let names = map.get(TYPE_KEY).and_then(type_names).unwrap_or_default();
        if let Some(kind) = names.iter().find_map(|name| self.registry.lookup(name)) {
            return Ok(kind);
        }
        if self.options.strict_types {
            return Err(Error::UnknownKind(
                names.into_iter().map(str::to_owned).collect(),
            ));
        }
        debug!(?names, "no known kind in type tag; decoding as Object");
        Ok(Kind::Object)
    }

    /// Decodes `raw` into a slot for `decl`. Each element of a sequence is
    /// resolved independently; a sequence given to a functional property
    /// matches nothing and is kept whole as unknown.
    pub(crate) fn slot(&self, decl: &'static PropertyDecl, raw: &Value) -> Result<PropertySlot> {
        if decl.functional {
            return Ok(PropertySlot::Functional(Some(self.value(decl, raw)?)));
        }
        let values = match raw {
            Value::Array(items) => items
                .iter()
                .map(|item| self.value(decl, item))
                .collect::<Result<Vec<_>>>()?,
            single => vec![self.value(decl, single)?],
        };
        Ok(PropertySlot::NonFunctional(values))
    }

    /// Resolves one raw value against the alternatives of `decl`.
    pub(crate) fn value(&self, decl: &'static PropertyDecl, raw: &Value) -> Result<PropertyValue> {
        match raw {
            Value::Object(map) => match map.get(TYPE_KEY).and_then(type_names) {
                Some(names) => {
                    if let Some(kind) = self.first_kind(decl, &names) {
                        trace!(property = decl.name, %kind, "nested document");
                        let doc = self
                            .nested()
                            .document_map(kind, map)
                            .map_err(|e| Error::nested(decl.name, e))?;
                        return Ok(doc.into());
                    }
                }
                None if decl.range.contains(&Range::LangString) => {
                    if let Ok(m) = codec::langstring::decode_map(map) {
                        return Ok(Scalar::LangString(m).into());
                    }
                }
                None => {}
            },
            Value::Null => {}
            _ => {
                for range in decl.range {
                    if let Some(value) = literal(*range, raw) {
                        return Ok(value);
                    }
                }
            }
        }
        debug!(
            property = decl.name,
            found = json_type(raw),
            "no alternative accepted the value; keeping it as unknown"
        );
        Ok(PropertyValue::Unknown(unknown::normalize(raw)))
    }

    fn first_kind(&self, decl: &PropertyDecl, names: &[&str]) -> Option<Kind> {
        decl.kind_ranges().find_map(|capability| {
            names
                .iter()
                .find_map(|name| self.registry.resolve(name, capability))
        })
    }
}

/// Tries the IRI or literal codec for `range`; `None` on rejection.
fn literal(range: Range, raw: &Value) -> Option<PropertyValue> {
    if range == Range::Iri {
        return match codec::iri::decode(raw) {
            Ok(iri) => Some(PropertyValue::Iri(iri)),
            Err(e) => {
                trace!(%range, error = %e, "alternative rejected");
                None
            }
        };
    }
    match Scalar::decode(range, raw)? {
        Ok(scalar) => Some(scalar.into()),
        Err(e) => {
            trace!(%range, error = %e, "alternative rejected");
            None
        }
    }
}

/// Reads a type tag that is a string or a list of strings.
pub(crate) fn type_names(raw: &Value) -> Option<Vec<&str>> {
    match raw {
        Value::String(name) => Some(vec![name.as_str()]),
        Value::Array(items) => items.iter().map(Value::as_str).collect(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astreams_vocab::properties;
    use serde_json::json;

    fn resolve(decl: &'static PropertyDecl, raw: Value) -> PropertyValue {
        let options = DecodeOptions::default();
        Resolver::new(&options).value(decl, &raw).unwrap()
    }

    #[test]
    fn bare_string_resolves_to_iri() {
        let value = resolve(&properties::ACTOR, json!("https://example.com/alice"));
        assert_eq!(value.as_iri().map(|i| i.as_str()), Some("https://example.com/alice"));
    }

    #[test]
    fn typed_map_becomes_document_of_capable_kind() {
        let value = resolve(&properties::ACTOR, json!({"type": "Person", "name": "A"}));
        assert_eq!(value.as_document().map(Document::kind), Some(Kind::Person));
    }

    #[test]
    fn alternatives_outrank_type_name_order() {
        // `attachment` tries Object before Link, so `Note` wins even when
        // `Link` is listed first.
        let value = resolve(&properties::ATTACHMENT, json!({"type": ["Link", "Note"]}));
        assert_eq!(value.as_document().map(Document::kind), Some(Kind::Note));
    }

    #[test]
    fn untyped_map_is_never_a_document() {
        let value = resolve(&properties::ACTOR, json!({"name": "Anon"}));
        assert_eq!(value.as_unknown(), Some(&json!({"name": "Anon"})));
    }

    #[test]
    fn untyped_map_of_strings_can_be_a_lang_string() {
        let value = resolve(&properties::NAME, json!({"en": "Hi", "fr": "Salut"}));
        assert_eq!(value.as_lang_string().map(|m| m.len()), Some(2));
    }

    #[test]
    fn unknown_type_name_falls_back_to_unknown() {
        let raw = json!({"type": "Widget", "x": 1});
        assert_eq!(resolve(&properties::OBJECT, raw.clone()).as_unknown(), Some(&raw));
    }

    #[test]
    fn codec_failure_means_no_match() {
        let value = resolve(&properties::PUBLISHED, json!("not a date"));
        assert_eq!(value.as_unknown(), Some(&json!("not a date")));
        assert!(resolve(&properties::PUBLISHED, Value::Null).is_unknown());
    }

    #[test]
    fn declared_order_decides_between_literals() {
        let closed = resolve(&properties::CLOSED, json!("2024-01-01T00:00:00Z"));
        assert!(closed.as_datetime().is_some());
        assert_eq!(resolve(&properties::CLOSED, json!(true)).as_bool(), Some(true));
        assert!(resolve(&properties::UNITS, json!("m")).as_str().is_some());
    }

    #[test]
    fn nested_failure_names_the_property() {
        let options = DecodeOptions::default();
        let raw = json!({"type": "Note", "nameMap": 5});
        let err = Resolver::new(&options)
            .value(&properties::OBJECT, &raw)
            .unwrap_err();
        assert!(matches!(err, Error::Nested { property: "object", .. }), "{err}");
    }

    #[test]
    fn depth_limit_is_enforced() {
        let options = DecodeOptions {
            max_depth: 2,
            ..DecodeOptions::default()
        };
        let raw = json!({"type": "Note", "inReplyTo": {"type": "Note", "inReplyTo": {"type": "Note", "inReplyTo": {"type": "Note"}}}});
        let err = Resolver::new(&options).document(Kind::Note, &raw).unwrap_err();
        let mut cursor = &err;
        while let Error::Nested { source, .. } = cursor {
            cursor = source.as_ref();
        }
        assert!(matches!(cursor, Error::DepthLimit { limit: 2 }));
    }

    #[test]
    fn top_level_kind_respects_strictness() {
        let lenient = DecodeOptions::default();
        let raw = json!({"type": ["Widget", "as:Create"]});
        assert_eq!(Resolver::new(&lenient).top_level_kind(&raw).unwrap(), Kind::Create);
        let unknown = json!({"type": "Widget"});
        assert_eq!(Resolver::new(&lenient).top_level_kind(&unknown).unwrap(), Kind::Object);

        let strict = DecodeOptions {
            strict_types: true,
            ..DecodeOptions::default()
        };
        assert!(matches!(
            Resolver::new(&strict).top_level_kind(&unknown),
            Err(Error::UnknownKind(names)) if names == ["Widget"]
        ));
    }
}
