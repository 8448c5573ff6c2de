//! Vocabulary consistency validator.
//!
//! Checks structural rules the type system cannot express:
//! - property names are unique within each declaration, and no kind
//!   redeclares a property it already inherits
//! - every nested-document alternative names a registered kind, and no
//!   range lists the same alternative twice
//! - every withheld property is actually inherited from an ancestor
//! - localized properties accept plain strings, and their `<name>Map` wire
//!   key does not collide with a declared property name

use std::collections::HashSet;

use astreams_vocab::{Kind, Range, Registry};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocab/consistency";

/// Validates vocabulary consistency.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    validate_unique_names(&mut report);
    validate_ranges(&mut report);
    validate_withholds(&mut report);
    validate_localized(&mut report);
    report
}

fn validate_unique_names(report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    for kind in Kind::ALL {
        let mut seen = HashSet::new();
        for decl in kind.decl().properties {
            if !seen.insert(decl.name) {
                violations.push(format!("{kind} declares `{}` twice", decl.name));
            }
            let inherited = kind
                .ancestors()
                .iter()
                .find(|a| a.decl().properties.iter().any(|p| p.name == decl.name));
            if let Some(ancestor) = inherited {
                violations.push(format!(
                    "{kind} redeclares `{}` already inherited from {ancestor}",
                    decl.name
                ));
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Property names are unique along every lineage",
        "Duplicate property declarations",
    ));
}

fn validate_ranges(report: &mut ConformanceReport) {
    let registry = Registry::global();
    let mut violations = Vec::new();
    for kind in Kind::ALL {
        for decl in kind.decl().properties {
            if decl.range.is_empty() {
                violations.push(format!("{kind}.{} has no alternatives", decl.name));
            }
            for (i, range) in decl.range.iter().enumerate() {
                if decl.range[..i].contains(range) {
                    violations.push(format!("{kind}.{} lists {range} twice", decl.name));
                }
                if let Range::Kind(target) = range {
                    if registry.lookup(target.name()) != Some(*target) {
                        violations.push(format!(
                            "{kind}.{} targets unregistered kind {target}",
                            decl.name
                        ));
                    }
                }
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Every range is non-empty, duplicate-free and targets registered kinds",
        "Malformed property ranges",
    ));
}

fn validate_withholds(report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    for kind in Kind::ALL {
        for name in kind.decl().withholds {
            let inherited = kind
                .ancestors()
                .iter()
                .any(|a| a.decl().properties.iter().any(|p| p.name == *name));
            if !inherited {
                violations.push(format!("{kind} withholds `{name}` but never inherits it"));
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Every withheld property is inherited",
        "Withheld properties that are not inherited",
    ));
}

fn validate_localized(report: &mut ConformanceReport) {
    let registry = Registry::global();
    let mut violations = Vec::new();
    for kind in Kind::ALL {
        let info = registry.info(kind);
        for decl in &info.properties {
            let Some(map_key) = decl.map_key() else {
                continue;
            };
            if !decl.range.contains(&Range::String) {
                violations.push(format!("{kind}.{} is localized without a string range", decl.name));
            }
            if info.index_of(&map_key).is_some() {
                violations.push(format!("{kind}: `{map_key}` collides with a declared property"));
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        violations,
        "Localized properties accept strings and have collision-free map keys",
        "Inconsistent localized properties",
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_consistent() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "consistency failures: {failures:#?}");
    }
}
