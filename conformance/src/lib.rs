//! astreams conformance suite.
//!
//! This crate checks the vocabulary tables for internal consistency and the
//! engine for lossless round trips, and aggregates the outcome into one
//! [`ConformanceReport`].
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Vocabulary | Activity Streams 2.0 core and extended vocabulary |
//! | Registry | bare, compact (`as:`) and full IRI type spellings |
//! | Engine | decode/encode identity modulo `@context` and array squeeze |
//!
//! # Entry Point
//!
//! ```no_run
//! use astreams_conformance::{run_all, SuitePaths};
//! use std::path::PathBuf;
//!
//! let paths = SuitePaths {
//!     fixtures: PathBuf::from("conformance/fixtures"),
//! };
//! let report = run_all(&paths)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct SuitePaths {
    /// Directory of JSON documents to round-trip (searched recursively).
    pub fixtures: PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Vocabulary inventory (54 kinds, 72 properties, registry spellings)
/// 2. Vocabulary consistency (names, ranges, withholds, localized keys)
/// 3. Per-kind round trip (empty and saturated documents)
/// 4. Fixture round trip
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &SuitePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1-2. Vocabulary (live tables, no file I/O)
    report.extend(validators::vocab::inventory::validate());
    report.extend(validators::vocab::consistency::validate());

    // 3. Engine against every kind
    report.extend(validators::roundtrip::kinds::validate());

    // 4. Engine against fixtures on disk
    report.extend(validators::roundtrip::fixtures::validate(&paths.fixtures)?);

    tracing::info!(
        passed = report.pass_count(),
        warnings = report.warning_count(),
        failed = report.failure_count(),
        "conformance run complete"
    );
    Ok(report)
}
