//! `astreams-conformance`: Runs the astreams conformance suite.
//!
//! Checks the vocabulary tables for consistency and every fixture under the
//! fixtures directory for a lossless round trip.
//!
//! **Usage:**
//! ```text
//! astreams-conformance [--fixtures <path>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use astreams_clients::init_tracing;
use astreams_conformance::{run_all, SuitePaths};
use clap::Parser;

/// Run the astreams conformance suite.
#[derive(Parser)]
#[command(
    name = "astreams-conformance",
    about = "Validate the vocabulary and engine round trips"
)]
struct Args {
    /// Directory of JSON fixtures to round-trip.
    #[arg(long, default_value = "conformance/fixtures")]
    fixtures: PathBuf,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let paths = SuitePaths {
        fixtures: args.fixtures,
    };
    let report = run_all(&paths)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("astreams Conformance Report");
        println!("===========================");
        println!();
        for result in &report.results {
            println!("{result}");
        }
        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            report.pass_count(),
            report.warning_count(),
            report.failure_count()
        );
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
