//! Vocabulary inventory validator.
//!
//! Verifies that the registry exposes every kind under all three spellings
//! and that the kind and property counts match the published vocabulary:
//! - 54 kinds (8 core, 28 activities, 5 actors, 12 object types, 1 link type)
//! - 72 distinct properties

use std::collections::BTreeSet;

use astreams_vocab::{Kind, Registry};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocab/inventory";

/// Expected inventory counts.
const EXPECTED_KINDS: usize = 54;
const EXPECTED_PROPERTIES: usize = 72;

/// Validates vocabulary inventory counts and registry coverage.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    validate_counts(&mut report);
    validate_spellings(&mut report);
    validate_roots(&mut report);
    report
}

fn validate_counts(report: &mut ConformanceReport) {
    check_count(report, "kinds", Kind::ALL.len(), EXPECTED_KINDS);

    let properties: BTreeSet<&str> = Kind::ALL
        .iter()
        .flat_map(|kind| kind.decl().properties.iter().map(|p| p.name))
        .collect();
    check_count(report, "properties", properties.len(), EXPECTED_PROPERTIES);
}

fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

/// Every kind must resolve from its bare, compact and full IRI spellings.
fn validate_spellings(report: &mut ConformanceReport) {
    let registry = Registry::global();
    let mut violations = Vec::new();
    for kind in Kind::ALL {
        let spellings = [
            kind.name().to_owned(),
            format!("as:{}", kind.name()),
            kind.iri(),
        ];
        for spelling in spellings {
            if registry.lookup(&spelling) != Some(kind) {
                violations.push(format!("{spelling} does not resolve to {kind}"));
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Every kind resolves from bare, compact and IRI spellings",
        "Registry lookup misses kind spellings",
    ));
}

/// Every kind must descend from `Object` or `Link`.
fn validate_roots(report: &mut ConformanceReport) {
    let violations: Vec<String> = Kind::ALL
        .iter()
        .filter(|kind| !kind.is_a(Kind::Object) && !kind.is_a(Kind::Link))
        .map(|kind| format!("{kind} descends from neither Object nor Link"))
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Every kind descends from Object or Link",
        "Kinds outside the Object/Link hierarchy",
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_passes() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "inventory failures: {failures:#?}");
    }
}
