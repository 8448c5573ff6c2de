//! Typed documents.
//!
//! A [`Document`] is one decoded map: its kind, the type tag it arrived with,
//! one [`PropertySlot`] per effective property of the kind, the optional
//! language map of each localized property, and every key the kind does not
//! declare. Properties are addressed by wire name; the kind's effective
//! property list (see [`KindInfo`]) fixes both the set of valid names and the
//! order they are written back out in.
//!
//! Properties withheld by the kind (`object` on intransitive activities) are
//! inert: reads are empty, writes succeed without effect, and they never
//! appear on output.

use astreams_vocab::{Kind, KindInfo, PropertyDecl, Registry};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::Iri;
use crate::error::{Error, Result};
use crate::localized::Localized;
use crate::resolve::{DecodeOptions, Resolver, TYPE_KEY};
use crate::slot::PropertySlot;
use crate::unknown::{normalize, UnknownBag, EXEMPT_KEY};
use crate::value::PropertyValue;

/// One entry of a type tag.
#[derive(Debug, Clone)]
enum TypeEntry {
    Name(String),
    Other(Value),
}

impl TypeEntry {
    fn from_value(raw: &Value) -> Self {
        match raw {
            Value::String(name) => TypeEntry::Name(name.clone()),
            other => TypeEntry::Other(normalize(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PropertyEntry {
    slot: PropertySlot,
    localized: Localized,
}

enum Lookup {
    Declared(usize),
    Withheld,
    Undeclared,
}

/// A decoded document of one [`Kind`].
#[derive(Debug, Clone)]
pub struct Document {
    kind: Kind,
    types: Vec<TypeEntry>,
    // Aligned with `KindInfo::properties` of `kind`.
    entries: Vec<PropertyEntry>,
    unknown: UnknownBag,
}

impl Document {
    /// Creates an empty document of `kind` with no explicit type tag.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        let entries = Registry::global()
            .info(kind)
            .properties
            .iter()
            .map(|decl| PropertyEntry {
                slot: PropertySlot::new(decl.functional),
                localized: Localized::new(),
            })
            .collect();
        Self {
            kind,
            types: Vec::new(),
            entries,
            unknown: UnknownBag::new(),
        }
    }

    /// Creates an empty document for `type_name` if it names a kind that is,
    /// or extends, `capability`.
    #[must_use]
    pub fn for_type(type_name: &str, capability: Kind) -> Option<Self> {
        Registry::global()
            .resolve(type_name, capability)
            .map(Self::new)
    }

    /// Decodes `raw` as a document of `kind` with default options.
    ///
    /// # Errors
    ///
    /// See [`Document::deserialize_with`].
    pub fn deserialize(kind: Kind, raw: &Value) -> Result<Self> {
        Self::deserialize_with(kind, raw, &DecodeOptions::default())
    }

    /// Decodes `raw` as a document of `kind`.
    ///
    /// Values no alternative accepts are kept as unknown and do not fail the
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `raw` is not a map,
    /// [`Error::MalformedLocalized`] for a language map that does not hold
    /// strings, [`Error::DepthLimit`] past `options.max_depth`, and
    /// [`Error::Nested`] wrapping any of these from a nested document.
    pub fn deserialize_with(kind: Kind, raw: &Value, options: &DecodeOptions) -> Result<Self> {
        Resolver::new(options).document(kind, raw)
    }

    pub(crate) fn decode(
        resolver: &Resolver<'_>,
        kind: Kind,
        map: &Map<String, Value>,
    ) -> Result<Self> {
        let info = resolver.registry().info(kind);
        let mut doc = Document::new(kind);
        for (key, raw) in map {
            if key == EXEMPT_KEY {
                continue;
            }
            if key == TYPE_KEY {
                doc.types = match raw {
                    Value::Array(items) => items.iter().map(TypeEntry::from_value).collect(),
                    single => vec![TypeEntry::from_value(single)],
                };
                continue;
            }
            if let Some(index) = info.index_of(key) {
                let slot = resolver.slot(info.properties[index], raw)?;
                if let Some(entry) = doc.entries.get_mut(index) {
                    entry.slot = slot;
                }
            } else if let Some(index) = info.index_of_map(key) {
                let localized = Localized::from_value(raw).map_err(|source| {
                    Error::MalformedLocalized {
                        key: key.clone(),
                        source,
                    }
                })?;
                if let Some(entry) = doc.entries.get_mut(index) {
                    entry.localized = localized;
                }
            } else {
                debug!(%kind, key = key.as_str(), "keeping undeclared key");
                doc.unknown.insert(key.as_str(), raw);
            }
        }
        Ok(doc)
    }

    /// Encodes the document.
    ///
    /// The type tag comes first, then declared properties in registry order
    /// (each language map directly after its property), then unknown keys in
    /// the order they were captured. Empty properties and absent language
    /// maps are omitted.
    #[must_use]
    pub fn serialize(&self) -> Value {
        let mut out = Map::new();
        out.insert(TYPE_KEY.to_owned(), squeeze(self.effective_types()));
        for (decl, entry) in self.info().properties.iter().zip(&self.entries) {
            if let Some(value) = entry.slot.to_value() {
                out.insert(decl.name.to_owned(), value);
            }
            if let (Some(key), Some(value)) = (decl.map_key(), entry.localized.to_value()) {
                out.insert(key, value);
            }
        }
        for (key, value) in self.unknown.iter() {
            if out.contains_key(key) {
                debug!(kind = %self.kind, key, "unknown key collides with a declared key; skipped");
                continue;
            }
            out.insert(key.to_owned(), value.clone());
        }
        Value::Object(out)
    }

    /// The kind this document was decoded as.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns `true` if the document's kind is, or extends, `capability`.
    #[must_use]
    pub fn is_a(&self, capability: Kind) -> bool {
        self.kind.is_a(capability)
    }

    /// Effective properties of this document's kind, in output order.
    #[must_use]
    pub fn declared(&self) -> &'static [&'static PropertyDecl] {
        &self.info().properties
    }

    /// String entries of the stored type tag, as written.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().filter_map(|entry| match entry {
            TypeEntry::Name(name) => Some(name.as_str()),
            TypeEntry::Other(_) => None,
        })
    }

    /// Appends `name` to the type tag unless already listed verbatim.
    pub fn add_type(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.type_names().any(|existing| existing == name) {
            self.types.push(TypeEntry::Name(name));
        }
    }

    /// The `id` of this document, if set to an IRI.
    #[must_use]
    pub fn id(&self) -> Option<&Iri> {
        self.get("id").and_then(PropertyValue::as_iri)
    }

    /// Sets the `id` of this document.
    pub fn set_id(&mut self, id: Iri) {
        if let Some(slot) = self.slot_mut("id") {
            slot.set(id);
        }
    }

    /// The slot for `name`; `None` if the kind does not declare it or
    /// withholds it.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&PropertySlot> {
        let index = self.info().index_of(name)?;
        self.entries.get(index).map(|e| &e.slot)
    }

    /// Mutable slot for `name`; `None` if the kind does not declare it or
    /// withholds it.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut PropertySlot> {
        let index = self.info().index_of(name)?;
        self.entries.get_mut(index).map(|e| &mut e.slot)
    }

    /// Number of values held by `name`.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.slot(name).map_or(0, PropertySlot::len)
    }

    /// Returns `true` if `name` holds at least one value.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// The value of a functional property, or the first value of a
    /// non-functional one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.slot(name).and_then(PropertySlot::get)
    }

    /// The value at `index` of `name`.
    #[must_use]
    pub fn at(&self, name: &str, index: usize) -> Option<&PropertyValue> {
        self.slot(name).and_then(|slot| slot.at(index))
    }

    /// Replaces the contents of `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredProperty`] if the kind neither declares
    /// nor withholds `name`.
    pub fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> Result<()> {
        if let Some(slot) = self.editable(name)? {
            slot.set(value);
        }
        Ok(())
    }

    /// Appends `value` to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredProperty`] if the kind neither declares
    /// nor withholds `name`.
    pub fn append(&mut self, name: &str, value: impl Into<PropertyValue>) -> Result<()> {
        if let Some(slot) = self.editable(name)? {
            slot.append(value);
        }
        Ok(())
    }

    /// Prepends `value` to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredProperty`] if the kind neither declares
    /// nor withholds `name`.
    pub fn prepend(&mut self, name: &str, value: impl Into<PropertyValue>) -> Result<()> {
        if let Some(slot) = self.editable(name)? {
            slot.prepend(value);
        }
        Ok(())
    }

    /// Removes the value at `index` of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredProperty`] if the kind neither declares
    /// nor withholds `name`.
    pub fn remove_at(&mut self, name: &str, index: usize) -> Result<Option<PropertyValue>> {
        Ok(self
            .editable(name)?
            .and_then(|slot| slot.remove_at(index)))
    }

    /// Removes every value of `name`. The language map is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredProperty`] if the kind neither declares
    /// nor withholds `name`.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        if let Some(slot) = self.editable(name)? {
            slot.clear();
        }
        Ok(())
    }

    /// The language map of `name`; `None` unless `name` is a localized
    /// property of this kind.
    #[must_use]
    pub fn localized(&self, name: &str) -> Option<&Localized> {
        let index = self.info().index_of(name)?;
        if !self.info().properties[index].localized {
            return None;
        }
        self.entries.get(index).map(|e| &e.localized)
    }

    /// Mutable language map of `name`; `None` unless `name` is a localized
    /// property of this kind.
    pub fn localized_mut(&mut self, name: &str) -> Option<&mut Localized> {
        let info = self.info();
        let index = info.index_of(name)?;
        if !info.properties[index].localized {
            return None;
        }
        self.entries.get_mut(index).map(|e| &mut e.localized)
    }

    /// Set properties with their slots, in output order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static PropertyDecl, &PropertySlot)> {
        self.info()
            .properties
            .iter()
            .copied()
            .zip(self.entries.iter().map(|e| &e.slot))
            .filter(|(_, slot)| !slot.is_empty())
    }

    /// Keys the kind does not declare.
    #[must_use]
    pub fn unknown(&self) -> &UnknownBag {
        &self.unknown
    }

    /// Mutable access to the undeclared keys.
    pub fn unknown_mut(&mut self) -> &mut UnknownBag {
        &mut self.unknown
    }

    fn info(&self) -> &'static KindInfo {
        Registry::global().info(self.kind)
    }

    fn lookup(&self, name: &str) -> Lookup {
        let info = self.info();
        match info.index_of(name) {
            Some(index) => Lookup::Declared(index),
            None if info.withholds(name) => Lookup::Withheld,
            None => Lookup::Undeclared,
        }
    }

    /// Resolves `name` for a mutation: a slot, `None` for a withheld
    /// property, or an error for a name the kind has never heard of.
    fn editable(&mut self, name: &str) -> Result<Option<&mut PropertySlot>> {
        match self.lookup(name) {
            Lookup::Declared(index) => Ok(self.entries.get_mut(index).map(|e| &mut e.slot)),
            Lookup::Withheld => {
                trace!(kind = %self.kind, property = name, "ignoring write to withheld property");
                Ok(None)
            }
            Lookup::Undeclared => Err(Error::UndeclaredProperty {
                kind: self.kind,
                property: name.to_owned(),
            }),
        }
    }

    /// The type tag as it will be written: stored entries with repeats of
    /// this document's own kind dropped, and the kind appended if no entry
    /// names it.
    fn effective_types(&self) -> Vec<Value> {
        let registry = Registry::global();
        let mut out = Vec::with_capacity(self.types.len() + 1);
        let mut own = false;
        for entry in &self.types {
            match entry {
                TypeEntry::Name(name) => {
                    if registry.lookup(name) == Some(self.kind) {
                        if own {
                            continue;
                        }
                        own = true;
                    }
                    out.push(Value::String(name.clone()));
                }
                TypeEntry::Other(raw) => out.push(raw.clone()),
            }
        }
        if !own {
            out.push(Value::String(self.kind.name().to_owned()));
        }
        out
    }
}

fn squeeze(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.pop().unwrap_or(Value::Null)
    } else {
        Value::Array(values)
    }
}

/// Documents compare by what they would serialize to, so a document with no
/// stored type tag equals its own round trip.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.entries == other.entries
            && self.unknown == other.unknown
            && self.effective_types() == other.effective_types()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&Document::serialize(self), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Document {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = <Value as serde::Deserialize>::deserialize(deserializer)?;
        crate::to_document(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn empty_document_serializes_its_kind() {
        assert_eq!(Document::new(Kind::Note).serialize(), json!({"type": "Note"}));
    }

    #[test]
    fn output_follows_registry_order() {
        let mut note = Document::new(Kind::Note);
        note.unknown_mut().insert("extra", &json!(1));
        note.set("content", "body").unwrap();
        note.set("name", "title").unwrap();
        note.set_id(iri("https://example.com/n/1"));
        note.localized_mut("name").unwrap().set("fr", "titre");

        let out = note.serialize();
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
        let position = |k: &str| keys.iter().position(|x| *x == k).unwrap();
        assert_eq!(keys[0], "type");
        assert_eq!(keys[1], "id");
        assert!(position("content") < position("name"));
        assert_eq!(position("nameMap"), position("name") + 1);
        assert_eq!(keys.last(), Some(&"extra"));
    }

    #[test]
    fn type_tag_keeps_extras_and_drops_own_repeats() {
        let raw = json!({"type": ["Note", "as:Note", "https://example.com/Custom"]});
        let doc = Document::deserialize(Kind::Note, &raw).unwrap();
        assert_eq!(doc.serialize()["type"], json!(["Note", "https://example.com/Custom"]));

        let mut doc = Document::new(Kind::Note);
        doc.add_type("https://example.com/Custom");
        assert_eq!(doc.serialize()["type"], json!(["https://example.com/Custom", "Note"]));
        assert_eq!(doc.type_names().collect::<Vec<_>>(), ["https://example.com/Custom"]);
    }

    #[test]
    fn equivalent_spellings_count_as_present() {
        let raw = json!({"type": "https://www.w3.org/ns/activitystreams#Note"});
        let doc = Document::deserialize(Kind::Note, &raw).unwrap();
        assert_eq!(doc.serialize()["type"], json!("https://www.w3.org/ns/activitystreams#Note"));
    }

    #[test]
    fn withheld_property_is_inert() {
        let mut arrive = Document::new(Kind::Arrive);
        arrive.set("object", "ignored").unwrap();
        arrive.append("object", "ignored").unwrap();
        assert!(arrive.clear("object").is_ok());
        assert_eq!(arrive.remove_at("object", 0).unwrap(), None);
        assert_eq!(arrive.count("object"), 0);
        assert!(arrive.get("object").is_none());
        assert!(arrive.slot("object").is_none());
        assert_eq!(arrive.serialize(), json!({"type": "Arrive"}));
    }

    #[test]
    fn undeclared_property_is_rejected_on_write_only() {
        let mut note = Document::new(Kind::Note);
        assert!(note.get("actor").is_none());
        assert!(matches!(
            note.set("actor", "x"),
            Err(Error::UndeclaredProperty { kind: Kind::Note, .. })
        ));
    }

    #[test]
    fn withheld_key_on_input_is_kept_as_unknown() {
        let raw = json!({"type": "Arrive", "object": "https://example.com/o"});
        let doc = Document::deserialize(Kind::Arrive, &raw).unwrap();
        assert!(!doc.has("object"));
        assert_eq!(doc.unknown().get("object"), Some(&json!("https://example.com/o")));
        assert_eq!(doc.serialize(), raw);
    }

    #[test]
    fn context_key_is_dropped() {
        let raw = json!({"@context": "https://www.w3.org/ns/activitystreams", "type": "Note"});
        let doc = Document::deserialize(Kind::Note, &raw).unwrap();
        assert!(doc.unknown().is_empty());
        assert_eq!(doc.serialize(), json!({"type": "Note"}));
    }

    #[test]
    fn malformed_language_map_fails() {
        let raw = json!({"type": "Note", "contentMap": ["en"]});
        assert!(matches!(
            Document::deserialize(Kind::Note, &raw),
            Err(Error::MalformedLocalized { ref key, .. }) if key == "contentMap"
        ));
    }

    #[test]
    fn not_an_object_is_an_error() {
        assert!(matches!(
            Document::deserialize(Kind::Note, &json!([1])),
            Err(Error::NotAnObject { found: "array" })
        ));
    }

    #[test]
    fn unknown_keys_never_shadow_declared_output() {
        let mut note = Document::new(Kind::Note);
        note.set("content", "real").unwrap();
        note.unknown_mut().insert("content", &json!("shadow"));
        note.unknown_mut().insert("type", &json!("Shadow"));
        let out = note.serialize();
        assert_eq!(out["content"], json!("real"));
        assert_eq!(out["type"], json!("Note"));
    }

    #[test]
    fn equality_ignores_implicit_type_tag() {
        let mut note = Document::new(Kind::Note);
        note.set("content", "hi").unwrap();
        let again = Document::deserialize(Kind::Note, &note.serialize()).unwrap();
        assert_eq!(note, again);
    }

    #[test]
    fn for_type_checks_capability() {
        assert_eq!(Document::for_type("Mention", Kind::Link).map(|d| d.kind()), Some(Kind::Mention));
        assert!(Document::for_type("Note", Kind::Link).is_none());
    }

    #[test]
    fn properties_lists_only_set_slots() {
        let mut create = Document::new(Kind::Create);
        create.append("actor", iri("https://example.com/alice")).unwrap();
        create.append("to", iri("https://example.com/bob")).unwrap();
        let names: Vec<&str> = create.properties().map(|(decl, _)| decl.name).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"actor") && names.contains(&"to"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_impls_delegate_to_the_engine() {
        let raw = json!({"type": "Note", "name": "hi", "extra": [1, 2]});
        let note: Document = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(note.kind(), Kind::Note);
        assert_eq!(serde_json::to_value(&note).unwrap(), raw);
        assert!(serde_json::from_value::<Document>(json!("Note")).is_err());
    }
}
