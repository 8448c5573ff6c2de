//! Property-based tests for the round-trip guarantees.
//!
//! Uses proptest to check that decoding and encoding lose nothing for
//! arbitrary unknown payloads and API-built documents.

use astreams::codec::Iri;
use astreams::{Document, Kind, PropertyValue};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// One sequence entry, nested arrays included.
fn arb_element() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        prop::collection::vec(arb_json(), 0..3).prop_map(Value::Array),
        prop::collection::btree_map("[a-z]{1,6}", arb_json(), 0..4)
            .prop_map(|m| Value::Object(m.into_iter().collect())),
    ]
}

fn arb_iri() -> impl Strategy<Value = Iri> {
    "[a-z]{1,8}".prop_map(|path| {
        Iri::parse(&format!("https://example.com/{path}")).unwrap_or_else(|e| panic!("{e}"))
    })
}

fn arb_kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::ALL.to_vec())
}

fn arb_note() -> impl Strategy<Value = Document> {
    (
        prop::option::of(arb_iri()),
        prop::collection::vec("[a-z ]{0,10}", 0..3),
        prop::collection::vec(arb_iri(), 0..4),
        prop::collection::btree_map("[a-z]{2}", "[a-z]{0,6}", 0..3),
        prop::collection::btree_map("x_[a-z]{1,6}", arb_json(), 0..3),
    )
        .prop_map(|(id, names, to, name_map, extra)| {
            let mut note = Document::new(Kind::Note);
            if let Some(id) = id {
                note.set_id(id);
            }
            for name in names {
                note.append("name", name).unwrap_or_else(|e| panic!("{e}"));
            }
            for iri in to {
                note.append("to", iri).unwrap_or_else(|e| panic!("{e}"));
            }
            if !name_map.is_empty() {
                if let Some(localized) = note.localized_mut("name") {
                    for (tag, text) in name_map {
                        localized.set(tag, text);
                    }
                }
            }
            for (key, value) in extra {
                note.unknown_mut().insert(key, &value);
            }
            note
        })
}

proptest! {
    /// deserialize(serialize(d)) == d
    #[test]
    fn prop_round_trip(note in arb_note()) {
        let again = Document::deserialize(Kind::Note, &note.serialize()).unwrap();
        prop_assert_eq!(again, note);
    }

    /// A second cycle changes nothing once arrays are squeezed.
    #[test]
    fn prop_serialize_is_idempotent(note in arb_note()) {
        let once = note.serialize();
        let twice = Document::deserialize(Kind::Note, &once).unwrap().serialize();
        prop_assert_eq!(twice, once);
    }

    /// Undeclared keys come back out exactly as they went in.
    #[test]
    fn prop_unknown_fidelity(extra in prop::collection::btree_map("x_[a-z]{1,6}", arb_json(), 1..5)) {
        let mut raw = Map::new();
        raw.insert("type".to_owned(), json!("Note"));
        for (key, value) in &extra {
            raw.insert(key.clone(), value.clone());
        }
        let raw = Value::Object(raw);
        let doc = Document::deserialize(Kind::Note, &raw).unwrap();
        prop_assert_eq!(doc.unknown().len(), extra.len());
        prop_assert_eq!(doc.serialize(), raw);
    }

    /// Arbitrary payloads under a declared property never fail decoding.
    #[test]
    fn prop_unmatched_values_are_kept(values in prop::collection::vec(arb_element(), 0..4)) {
        let mut raw = Map::new();
        raw.insert("type".to_owned(), json!("Create"));
        raw.insert("actor".to_owned(), Value::Array(values));
        let raw = Value::Object(raw);
        let doc = Document::deserialize(Kind::Create, &raw).unwrap();
        let once = doc.serialize();
        let again = Document::deserialize(Kind::Create, &once).unwrap();
        prop_assert_eq!(again.serialize(), once);
        prop_assert_eq!(again, doc);
    }

    /// The own kind appears exactly once in the type tag.
    #[test]
    fn prop_type_tag_idempotent(kind in arb_kind(), extra in prop::option::of("https://example.com/[A-Z][a-z]{1,6}")) {
        let mut doc = Document::new(kind);
        prop_assert_eq!(doc.serialize()["type"].clone(), json!(kind.name()));
        doc.add_type(kind.name());
        doc.add_type(format!("as:{}", kind.name()));
        if let Some(extra) = extra.clone() {
            doc.add_type(extra);
        }
        let tag = doc.serialize()["type"].clone();
        match extra {
            None => prop_assert_eq!(tag, json!(kind.name())),
            Some(extra) => prop_assert_eq!(tag, json!([kind.name(), extra])),
        }
    }

    /// Writes to a withheld property never change the document.
    #[test]
    fn prop_suppression_is_a_no_op(
        kind in prop::sample::select(vec![Kind::IntransitiveActivity, Kind::Arrive, Kind::Travel, Kind::Question]),
        values in prop::collection::vec("[a-z]{0,8}", 0..4),
        index in 0_usize..4,
    ) {
        let mut doc = Document::new(kind);
        let before = doc.serialize();
        for value in values {
            prop_assert!(doc.set("object", value.as_str()).is_ok());
            prop_assert!(doc.append("object", PropertyValue::from(value.clone())).is_ok());
            prop_assert!(doc.prepend("object", value).is_ok());
        }
        prop_assert_eq!(doc.remove_at("object", index).unwrap(), None);
        prop_assert!(doc.clear("object").is_ok());
        prop_assert_eq!(doc.count("object"), 0);
        prop_assert!(doc.get("object").is_none());
        prop_assert!(doc.at("object", index).is_none());
        prop_assert_eq!(doc.serialize(), before);
    }
}
