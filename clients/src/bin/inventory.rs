//! `astreams-inventory`: Dumps the vocabulary as the registry sees it.
//!
//! For each kind: its lineage, withheld properties, and effective properties
//! in output order with multiplicity and alternatives.
//!
//! **Usage:**
//! ```text
//! astreams-inventory [--kind <Kind>] [--json] [--pretty]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{anyhow, Result};
use astreams_clients::{init_tracing, write_json};
use astreams_vocab::{Kind, PropertyDecl, Registry};
use clap::Parser;
use serde_json::{json, Value};

/// Dump the Activity Streams vocabulary.
#[derive(Parser)]
#[command(name = "astreams-inventory", about = "Dump vocabulary kinds and properties")]
struct Args {
    /// Only show this kind.
    #[arg(long)]
    kind: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let registry = Registry::global();

    let kinds: Vec<Kind> = match &args.kind {
        Some(name) => vec![registry
            .lookup(name)
            .ok_or_else(|| anyhow!("Unknown kind: {name}"))?],
        None => Kind::ALL.to_vec(),
    };

    if args.json {
        let dump: Vec<Value> = kinds.iter().map(|k| kind_json(registry, *k)).collect();
        return write_json(&Value::Array(dump), None, args.pretty);
    }

    for kind in &kinds {
        print_kind(registry, *kind);
    }
    if args.kind.is_none() {
        println!("{} kinds", kinds.len());
    }
    Ok(())
}

fn print_kind(registry: &Registry, kind: Kind) {
    let info = registry.info(kind);
    let lineage: Vec<&str> = info.lineage.iter().map(|k| k.name()).collect();
    println!("{}", lineage.join(" < "));
    if !info.withholds.is_empty() {
        println!("  withholds: {}", info.withholds.join(", "));
    }
    for decl in &info.properties {
        println!("  {:<20} {}", decl.name, describe(decl));
    }
    println!();
}

fn describe(decl: &PropertyDecl) -> String {
    let ranges: Vec<String> = decl.range.iter().map(ToString::to_string).collect();
    let mut out = format!(
        "{} [{}]",
        if decl.functional { "one" } else { "many" },
        ranges.join(" | ")
    );
    if let Some(key) = decl.map_key() {
        out.push_str(&format!(" +{key}"));
    }
    out
}

fn kind_json(registry: &Registry, kind: Kind) -> Value {
    let info = registry.info(kind);
    let properties: Vec<Value> = info
        .properties
        .iter()
        .map(|decl| {
            json!({
                "name": decl.name,
                "functional": decl.functional,
                "localized": decl.localized,
                "range": decl.range.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "kind": kind.name(),
        "iri": kind.iri(),
        "comment": kind.decl().comment,
        "lineage": info.lineage.iter().map(|k| k.name()).collect::<Vec<_>>(),
        "withholds": info.withholds,
        "properties": properties,
    })
}
