//! `astreams-normalize`: Decodes an Activity Streams document and writes it
//! back out in canonical form.
//!
//! The output drops `@context`, orders keys as the vocabulary declares them,
//! squeezes one-entry arrays and keeps every unrecognized key verbatim.
//!
//! **Usage:**
//! ```text
//! astreams-normalize [--input <path>|-] [--out <path>] [--pretty] [--kind <Kind>] [--strict]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use astreams::{to_document_with, DecodeOptions, Document, Registry};
use astreams_clients::{init_tracing, read_json, write_json};
use clap::Parser;

/// Normalize an Activity Streams document.
#[derive(Parser)]
#[command(name = "astreams-normalize", about = "Decode and re-encode an Activity Streams document")]
struct Args {
    /// Input file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Decode as this kind instead of reading it from the type tag.
    #[arg(long)]
    kind: Option<String>,

    /// Reject documents whose type tag names no known kind.
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of documents.
    #[arg(long, default_value_t = DecodeOptions::default().max_depth)]
    max_depth: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let options = DecodeOptions {
        strict_types: args.strict,
        max_depth: args.max_depth,
    };
    let raw = read_json(&args.input)?;

    let doc = match &args.kind {
        Some(name) => {
            let kind = Registry::global()
                .lookup(name)
                .ok_or_else(|| anyhow!("Unknown kind: {name}"))?;
            Document::deserialize_with(kind, &raw, &options)
        }
        None => to_document_with(&raw, &options),
    }
    .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    tracing::debug!(
        kind = %doc.kind(),
        unknown_keys = doc.unknown().len(),
        "decoded document"
    );

    write_json(&doc.serialize(), args.out.as_deref(), args.pretty)
}
