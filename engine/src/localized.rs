//! Per-language variants of a natural-language property (`nameMap`,
//! `contentMap`, ...).
//!
//! A [`Localized`] value has its own lifecycle, separate from the property's
//! slot: it is absent until first written, and "present but empty" is a
//! distinct, observable state that serializes as `{}`.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::codec::{langstring, CodecError};

/// Language tag to text, lazily allocated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localized {
    map: Option<IndexMap<String, String>>,
}

impl Localized {
    /// Creates an absent map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags present, in insertion order. Empty when absent or empty.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.map.iter().flat_map(|m| m.keys().map(String::as_str))
    }

    /// Text for `tag`, or `""` when the tag (or the whole map) is absent.
    #[must_use]
    pub fn get(&self, tag: &str) -> &str {
        self.map
            .as_ref()
            .and_then(|m| m.get(tag))
            .map_or("", String::as_str)
    }

    /// Returns `true` if `tag` has an entry.
    #[must_use]
    pub fn has(&self, tag: &str) -> bool {
        self.map.as_ref().is_some_and(|m| m.contains_key(tag))
    }

    /// Writes the text for `tag`, allocating the map on first use.
    pub fn set(&mut self, tag: impl Into<String>, text: impl Into<String>) {
        self.map
            .get_or_insert_with(IndexMap::new)
            .insert(tag.into(), text.into());
    }

    /// Removes the entry for `tag`. The map stays present even if emptied.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.map.as_mut().and_then(|m| m.shift_remove(tag))
    }

    /// Marks the map present without adding entries.
    pub fn touch(&mut self) {
        self.map.get_or_insert_with(IndexMap::new);
    }

    /// Returns to the absent state.
    pub fn clear(&mut self) {
        self.map = None;
    }

    /// Returns `true` once the map has been written, even if now empty.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.map.is_some()
    }

    /// Number of entries; zero when absent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, IndexMap::len)
    }

    /// Returns `true` when there are no entries, present or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes a wire map. An empty map yields a present, empty value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if `raw` is not a map of strings.
    pub fn from_value(raw: &Value) -> Result<Self, CodecError> {
        let map = raw
            .as_object()
            .ok_or_else(|| CodecError::shape("language map", raw))?;
        if map.is_empty() {
            return Ok(Self {
                map: Some(IndexMap::new()),
            });
        }
        langstring::decode_map(map).map(|m| Self { map: Some(m) })
    }

    /// Encodes the map; `None` when absent.
    #[must_use]
    pub fn to_value(&self) -> Option<Value> {
        self.map.as_ref().map(|m| {
            Value::Object(
                m.iter()
                    .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
                    .collect::<Map<String, Value>>(),
            )
        })
    }
}
