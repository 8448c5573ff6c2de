//! Per-kind round-trip validator.
//!
//! For every kind, builds two documents and checks that each survives a
//! decode/encode cycle unchanged:
//! - the empty document, which must encode as `{"type": "<Kind>"}`
//! - a saturated document with every effective property (and every language
//!   map) set to a sample of its first declared alternative, which must
//!   decode to exactly that alternative

use astreams::{to_document, Alternative, Kind, PropertyDecl, Range, Registry};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "roundtrip/kinds";

/// Validates empty and saturated round trips for every kind.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let violations: Vec<String> = Kind::ALL.iter().filter_map(|k| check_empty(*k)).collect();
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        format!("All {} kinds round-trip when empty", Kind::ALL.len()),
        "Empty documents do not round-trip",
    ));

    let violations: Vec<String> = Kind::ALL
        .iter()
        .flat_map(|k| check_saturated(*k))
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Every declared property decodes to its first alternative and round-trips",
        "Saturated documents do not round-trip",
    ));

    report
}

fn check_empty(kind: Kind) -> Option<String> {
    let raw = json!({"type": kind.name()});
    match to_document(&raw) {
        Ok(doc) if doc.kind() != kind => Some(format!("{kind}: decoded as {}", doc.kind())),
        Ok(doc) if doc.serialize() != raw => {
            Some(format!("{kind}: re-encoded as {}", doc.serialize()))
        }
        Ok(_) => None,
        Err(e) => Some(format!("{kind}: {e}")),
    }
}

fn check_saturated(kind: Kind) -> Vec<String> {
    let info = Registry::global().info(kind);
    let mut raw = Map::new();
    raw.insert("type".to_owned(), json!(kind.name()));
    for decl in &info.properties {
        raw.insert(decl.name.to_owned(), sample(decl));
        if let Some(key) = decl.map_key() {
            raw.insert(key, json!({"en": "sample", "fr": "exemple"}));
        }
    }
    let raw = Value::Object(raw);

    let doc = match to_document(&raw) {
        Ok(doc) => doc,
        Err(e) => return vec![format!("{kind}: {e}")],
    };
    debug!(%kind, properties = info.properties.len(), "decoded saturated document");

    let mut violations = Vec::new();
    for decl in &info.properties {
        let expected = decl.range.first().copied().map(expected_alternative);
        let actual = doc.get(decl.name).map(|v| v.alternative());
        if actual != expected {
            violations.push(format!(
                "{kind}.{}: expected {expected:?}, decoded {actual:?}",
                decl.name
            ));
        }
    }
    let encoded = doc.serialize();
    if encoded != raw {
        violations.push(format!("{kind}: re-encoded as {encoded}"));
    }
    violations
}

fn expected_alternative(range: Range) -> Alternative {
    match range {
        Range::Kind(kind) => Alternative::Document(kind),
        Range::Iri => Alternative::Iri,
        literal => Alternative::Scalar(literal),
    }
}

/// A raw value accepted by the first alternative of `decl`.
fn sample(decl: &PropertyDecl) -> Value {
    let Some(range) = decl.range.first() else {
        return Value::Null;
    };
    match range {
        Range::Kind(kind) => json!({"type": kind.name()}),
        Range::Iri => json!(format!("https://example.com/{}", decl.name)),
        Range::String => json!("sample"),
        Range::LangString => json!({"en": "sample"}),
        Range::DateTime => json!("2024-01-01T00:00:00Z"),
        Range::Duration => json!("PT1H30M"),
        Range::Float => json!(1.5),
        Range::Boolean => json!(true),
        Range::NonNegativeInteger => json!(3),
        Range::MediaType => json!("text/html"),
        Range::LanguageTag => json!("en-GB"),
        Range::LinkRelation => json!("canonical"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "round-trip failures: {failures:#?}");
    }

    #[test]
    fn samples_follow_first_alternative() {
        assert_eq!(sample(&astreams_vocab::properties::PUBLISHED), json!("2024-01-01T00:00:00Z"));
        assert_eq!(sample(&astreams_vocab::properties::ACTOR), json!({"type": "Object"}));
    }
}
