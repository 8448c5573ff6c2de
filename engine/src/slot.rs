//! Multiplicity wrapper around [`PropertyValue`].
//!
//! A functional slot holds zero or one value. A non-functional slot holds an
//! ordered sequence whose entries may each be a different alternative; index
//! `2` can be a nested document while index `0` is an IRI.

use astreams_vocab::Range;
use serde_json::Value;

use crate::codec::Iri;
use crate::document::Document;
use crate::value::{Alternative, PropertyValue};

/// Storage for one property of one document.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySlot {
    /// At most one value.
    Functional(Option<PropertyValue>),
    /// Any number of values, in document order, duplicates allowed.
    NonFunctional(Vec<PropertyValue>),
}

impl PropertySlot {
    /// Creates an empty slot of the given multiplicity.
    #[must_use]
    pub fn new(functional: bool) -> Self {
        if functional {
            PropertySlot::Functional(None)
        } else {
            PropertySlot::NonFunctional(Vec::new())
        }
    }

    /// Returns `true` for functional slots.
    #[must_use]
    pub fn is_functional(&self) -> bool {
        matches!(self, PropertySlot::Functional(_))
    }

    /// Number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            PropertySlot::Functional(value) => usize::from(value.is_some()),
            PropertySlot::NonFunctional(values) => values.len(),
        }
    }

    /// Returns `true` if no value is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Views the held values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PropertyValue] {
        match self {
            PropertySlot::Functional(value) => value.as_slice(),
            PropertySlot::NonFunctional(values) => values,
        }
    }

    /// Iterates over the held values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyValue> {
        self.as_slice().iter()
    }

    /// The functional value, or the first value of a sequence.
    #[must_use]
    pub fn get(&self) -> Option<&PropertyValue> {
        self.as_slice().first()
    }

    /// The value at `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&PropertyValue> {
        self.as_slice().get(index)
    }

    /// Mutable access to the value at `index`.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut PropertyValue> {
        match self {
            PropertySlot::Functional(value) if index == 0 => value.as_mut(),
            PropertySlot::Functional(_) => None,
            PropertySlot::NonFunctional(values) => values.get_mut(index),
        }
    }

    /// Replaces the contents with the single `value`.
    pub fn set(&mut self, value: impl Into<PropertyValue>) {
        let value = value.into();
        match self {
            PropertySlot::Functional(slot) => *slot = Some(value),
            PropertySlot::NonFunctional(values) => {
                values.clear();
                values.push(value);
            }
        }
    }

    /// Adds `value` at the end. A functional slot is overwritten.
    pub fn append(&mut self, value: impl Into<PropertyValue>) {
        match self {
            PropertySlot::Functional(slot) => *slot = Some(value.into()),
            PropertySlot::NonFunctional(values) => values.push(value.into()),
        }
    }

    /// Adds `value` at the front. A functional slot is overwritten.
    pub fn prepend(&mut self, value: impl Into<PropertyValue>) {
        self.insert(0, value);
    }

    /// Inserts `value` before `index`, clamped to the end of the sequence.
    /// A functional slot is overwritten.
    pub fn insert(&mut self, index: usize, value: impl Into<PropertyValue>) {
        match self {
            PropertySlot::Functional(slot) => *slot = Some(value.into()),
            PropertySlot::NonFunctional(values) => {
                let index = index.min(values.len());
                values.insert(index, value.into());
            }
        }
    }

    /// Replaces the value at `index`, returning the old one. Out-of-range
    /// indexes leave the slot unchanged and return `None`.
    pub fn set_at(&mut self, index: usize, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.at_mut(index)
            .map(|slot| std::mem::replace(slot, value.into()))
    }

    /// Removes and returns the value at `index`; `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<PropertyValue> {
        match self {
            PropertySlot::Functional(slot) if index == 0 => slot.take(),
            PropertySlot::Functional(_) => None,
            PropertySlot::NonFunctional(values) => {
                (index < values.len()).then(|| values.remove(index))
            }
        }
    }

    /// Swaps two positions of a sequence; out-of-range indexes are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if let PropertySlot::NonFunctional(values) = self {
            if a < values.len() && b < values.len() {
                values.swap(a, b);
            }
        }
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        match self {
            PropertySlot::Functional(slot) => *slot = None,
            PropertySlot::NonFunctional(values) => values.clear(),
        }
    }

    /// Which alternative is held at `index`.
    #[must_use]
    pub fn alternative_at(&self, index: usize) -> Option<Alternative> {
        self.at(index).map(PropertyValue::alternative)
    }

    /// Returns `true` if the value at `index` satisfies `range`.
    #[must_use]
    pub fn is_kind_at(&self, index: usize, range: Range) -> bool {
        self.at(index).is_some_and(|v| v.matches(range))
    }

    /// Returns `true` if `index` holds a nested document.
    #[must_use]
    pub fn is_document_at(&self, index: usize) -> bool {
        matches!(self.at(index), Some(PropertyValue::Document(_)))
    }

    /// Returns `true` if `index` holds a bare IRI.
    #[must_use]
    pub fn is_iri_at(&self, index: usize) -> bool {
        matches!(self.at(index), Some(PropertyValue::Iri(_)))
    }

    /// Returns `true` if `index` holds an unrecognized value.
    #[must_use]
    pub fn is_unknown_at(&self, index: usize) -> bool {
        self.at(index).is_some_and(PropertyValue::is_unknown)
    }

    /// The nested document at `index`, if that is what it holds.
    #[must_use]
    pub fn document_at(&self, index: usize) -> Option<&Document> {
        self.at(index).and_then(PropertyValue::as_document)
    }

    /// The IRI at `index`, if that is what it holds.
    #[must_use]
    pub fn iri_at(&self, index: usize) -> Option<&Iri> {
        self.at(index).and_then(PropertyValue::as_iri)
    }

    /// The plain string at `index`, if that is what it holds.
    #[must_use]
    pub fn str_at(&self, index: usize) -> Option<&str> {
        self.at(index).and_then(PropertyValue::as_str)
    }

    /// The unknown value held by the **first** entry only.
    ///
    /// Later unknown entries are reachable through [`PropertySlot::at`] or
    /// [`PropertySlot::first_unknown_position`].
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        self.get().and_then(PropertyValue::as_unknown)
    }

    /// Index of the first unknown entry anywhere in the slot.
    #[must_use]
    pub fn first_unknown_position(&self) -> Option<usize> {
        self.iter().position(PropertyValue::is_unknown)
    }

    /// Stable sort by serialization priority: documents, then IRIs, then
    /// literals in range order, then unknown values. Entries of the same
    /// alternative keep their relative order.
    pub fn sort_by_alternative(&mut self) {
        if let PropertySlot::NonFunctional(values) = self {
            values.sort_by_key(|v| priority(&v.alternative()));
        }
    }

    /// Serializes the slot: `None` when empty, the bare value for a functional
    /// slot or a one-entry sequence, and an array otherwise.
    ///
    /// A one-entry sequence whose element is itself an array stays wrapped,
    /// since the bare array would read back as several entries.
    #[must_use]
    pub fn to_value(&self) -> Option<Value> {
        match self.as_slice() {
            [] => None,
            [single] => {
                let value = single.to_value();
                if value.is_array() && !self.is_functional() {
                    Some(Value::Array(vec![value]))
                } else {
                    Some(value)
                }
            }
            many => Some(Value::Array(many.iter().map(PropertyValue::to_value).collect())),
        }
    }
}

fn priority(alternative: &Alternative) -> u8 {
    match alternative {
        Alternative::Document(_) => 0,
        Alternative::Iri => 1,
        Alternative::Scalar(range) => 2 + scalar_rank(*range),
        Alternative::Unknown => u8::MAX,
    }
}

fn scalar_rank(range: Range) -> u8 {
    match range {
        Range::Kind(_) | Range::Iri | Range::String => 0,
        Range::LangString => 1,
        Range::DateTime => 2,
        Range::Duration => 3,
        Range::Float => 4,
        Range::Boolean => 5,
        Range::NonNegativeInteger => 6,
        Range::MediaType => 7,
        Range::LanguageTag => 8,
        Range::LinkRelation => 9,
    }
}

impl<'a> IntoIterator for &'a PropertySlot {
    type Item = &'a PropertyValue;
    type IntoIter = std::slice::Iter<'a, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astreams_vocab::Kind;
    use serde_json::json;

    fn iri(s: &str) -> PropertyValue {
        PropertyValue::Iri(Iri::parse(s).unwrap())
    }

    #[test]
    fn functional_slot_holds_at_most_one() {
        let mut slot = PropertySlot::new(true);
        assert!(slot.to_value().is_none());
        slot.append("a");
        slot.append("b");
        assert_eq!(slot.len(), 1);
        assert_eq!(slot.to_value(), Some(json!("b")));
        assert_eq!(slot.remove_at(0).and_then(|v| v.as_str().map(str::to_owned)), Some("b".into()));
        assert!(slot.is_empty());
    }

    #[test]
    fn sequence_positions_mix_alternatives() {
        let mut slot = PropertySlot::new(false);
        slot.append(iri("https://example.com/a"));
        slot.append("text");
        slot.append(Document::new(Kind::Note));
        assert!(slot.is_kind_at(0, Range::Iri));
        assert!(slot.is_kind_at(1, Range::String));
        assert!(slot.is_kind_at(2, Range::Kind(Kind::Object)));
        assert!(!slot.is_kind_at(2, Range::Iri));
        assert!(slot.document_at(0).is_none());
        assert!(slot.is_iri_at(0) && !slot.is_iri_at(1));
        assert!(slot.is_document_at(2) && !slot.is_unknown_at(2));
        assert_eq!(slot.document_at(2).map(Document::kind), Some(Kind::Note));
        assert!(slot.at(3).is_none());
    }

    #[test]
    fn prepend_insert_and_remove_keep_order() {
        let mut slot = PropertySlot::new(false);
        slot.append("b");
        slot.prepend("a");
        slot.insert(99, "d");
        slot.insert(2, "c");
        let texts: Vec<&str> = slot.iter().filter_map(PropertyValue::as_str).collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);
        assert_eq!(slot.remove_at(1).as_ref().and_then(PropertyValue::as_str), Some("b"));
        assert!(slot.remove_at(10).is_none());
        assert_eq!(slot.len(), 3);
    }

    #[test]
    fn squeezes_single_entry_sequences() {
        let mut slot = PropertySlot::new(false);
        slot.append("only");
        assert_eq!(slot.to_value(), Some(json!("only")));
        slot.append("second");
        assert_eq!(slot.to_value(), Some(json!(["only", "second"])));
    }

    #[test]
    fn lone_array_entry_is_not_squeezed() {
        let mut slot = PropertySlot::new(false);
        slot.append(PropertyValue::Unknown(json!(["x"])));
        assert_eq!(slot.to_value(), Some(json!([["x"]])));

        let mut functional = PropertySlot::new(true);
        functional.set(PropertyValue::Unknown(json!(["x", "y"])));
        assert_eq!(functional.to_value(), Some(json!(["x", "y"])));
    }

    #[test]
    fn unknown_accessor_inspects_first_entry_only() {
        let mut slot = PropertySlot::new(false);
        slot.append("known");
        slot.append(PropertyValue::Unknown(json!({"x": 1})));
        assert!(slot.unknown().is_none());
        assert_eq!(slot.first_unknown_position(), Some(1));

        slot.prepend(PropertyValue::Unknown(json!(7)));
        assert_eq!(slot.unknown(), Some(&json!(7)));
    }

    #[test]
    fn sort_by_alternative_is_stable() {
        let mut slot = PropertySlot::new(false);
        slot.append(PropertyValue::Unknown(json!(1)));
        slot.append("z");
        slot.append(iri("https://example.com/2"));
        slot.append("a");
        slot.append(iri("https://example.com/1"));
        slot.sort_by_alternative();
        let alts: Vec<Alternative> = slot.iter().map(PropertyValue::alternative).collect();
        assert_eq!(
            alts,
            [
                Alternative::Iri,
                Alternative::Iri,
                Alternative::Scalar(Range::String),
                Alternative::Scalar(Range::String),
                Alternative::Unknown,
            ]
        );
        assert_eq!(slot.iri_at(0).map(Iri::as_str), Some("https://example.com/2"));
        assert_eq!(slot.str_at(2), Some("z"));
    }

    #[test]
    fn set_at_and_swap() {
        let mut slot = PropertySlot::new(false);
        slot.append("a");
        slot.append("b");
        assert!(slot.set_at(5, "x").is_none());
        assert_eq!(slot.set_at(0, "c").as_ref().and_then(PropertyValue::as_str), Some("a"));
        slot.swap(0, 1);
        assert_eq!(slot.str_at(0), Some("b"));
        assert_eq!(slot.str_at(1), Some("c"));
    }
}
