//! Fixture round-trip validator.
//!
//! Every `*.json` file under the fixtures directory is decoded and
//! re-encoded. The output must equal the input with the top-level
//! `@context` removed, or the sibling `<name>.expected.json` when one exists
//! (for inputs the engine canonicalizes, such as one-entry arrays). A second
//! cycle must then reproduce the first output exactly.

use std::path::Path;

use anyhow::{Context, Result};
use astreams::to_document;
use astreams::unknown::EXEMPT_KEY;
use serde_json::Value;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "roundtrip/fixtures";
const EXPECTED_SUFFIX: &str = ".expected.json";

/// Validates every fixture under `fixtures`.
///
/// # Errors
///
/// Returns an error if a fixture file cannot be read.
pub fn validate(fixtures: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !fixtures.is_dir() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("Fixture directory {} not found; skipped", fixtures.display()),
        ));
        return Ok(report);
    }

    let mut inputs: Vec<_> = WalkDir::new(fixtures)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| {
            let name = p.to_string_lossy();
            name.ends_with(".json") && !name.ends_with(EXPECTED_SUFFIX)
        })
        .collect();
    inputs.sort();

    let mut violations = Vec::new();
    for path in &inputs {
        debug!(path = %path.display(), "checking fixture");
        if let Some(problem) = check_fixture(path)? {
            violations.push(format!("{}: {problem}", path.display()));
        }
    }
    info!(fixtures = inputs.len(), failures = violations.len(), "fixture round trip complete");

    if inputs.is_empty() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("No fixtures found in {}", fixtures.display()),
        ));
    } else {
        report.push(TestResult::check(
            VALIDATOR,
            violations,
            format!("All {} fixtures round-trip", inputs.len()),
            "Fixtures do not round-trip",
        ));
    }
    Ok(report)
}

/// Returns a description of the first problem with one fixture, if any.
fn check_fixture(path: &Path) -> Result<Option<String>> {
    let Ok(input) = read_json(path)? else {
        return Ok(Some("not valid JSON".to_owned()));
    };
    let expected = match expected_path(path) {
        Some(expected) if expected.is_file() => match read_json(&expected)? {
            Ok(value) => value,
            Err(_) => return Ok(Some("expected output is not valid JSON".to_owned())),
        },
        _ => without_context(&input),
    };

    let once = match to_document(&input) {
        Ok(doc) => doc.serialize(),
        Err(e) => return Ok(Some(format!("decode failed: {e}"))),
    };
    if once != expected {
        return Ok(Some(format!("re-encoded as {once}")));
    }
    let twice = match to_document(&once) {
        Ok(doc) => doc.serialize(),
        Err(e) => return Ok(Some(format!("second decode failed: {e}"))),
    };
    if twice != once {
        return Ok(Some(format!("second cycle changed output to {twice}")));
    }
    Ok(None)
}

/// Reads `path`; the inner result carries JSON syntax errors, which are
/// fixture failures rather than I/O failures.
fn read_json(path: &Path) -> Result<serde_json::Result<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(serde_json::from_str(&content))
}

fn expected_path(path: &Path) -> Option<std::path::PathBuf> {
    let stem = path.file_stem()?.to_string_lossy().into_owned();
    Some(path.with_file_name(format!("{stem}{EXPECTED_SUFFIX}")))
}

fn without_context(input: &Value) -> Value {
    let mut output = input.clone();
    if let Value::Object(map) = &mut output {
        map.remove(EXEMPT_KEY);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[test]
    fn bundled_fixtures_pass() {
        let report = validate(&fixture_dir()).unwrap();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "fixture failures: {failures:#?}");
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn missing_directory_is_a_warning() {
        let report = validate(Path::new("/nonexistent/astreams-fixtures")).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn expected_path_uses_suffix() {
        let path = expected_path(Path::new("fixtures/squeeze.json"));
        assert_eq!(path, Some(PathBuf::from("fixtures/squeeze.expected.json")));
    }
}
