//! Command-line front end for the acervo search engine.
//!
//! Loads a JSON record set (a flat array of field → value objects) and runs
//! one engine operation against it. This binary stands in for the
//! consultation views: each subcommand maps to one UI interaction.
//!
//! ## Usage
//!
//! ```bash
//! # Rank autocomplete suggestions for a query
//! acervo --data inventory.json suggest "silla"
//!
//! # Classify which field a query most likely targets
//! acervo --data inventory.json classify "abc123"
//!
//! # Filter with pinned chips plus free text, sorted
//! acervo --data inventory.json filter \
//!     --chip area=juridica --chip estado=bueno \
//!     --query silla --sort id
//!
//! # Custody-record view uses the custody schema
//! acervo --data resguardos.json --schema custody suggest "perez"
//!
//! # Index statistics
//! acervo --data inventory.json stats
//! ```
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=acervo=debug`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use acervo_core::Engine;
use acervo_types::{ActiveFilter, FieldKind, Record, Schema, SortDirection};

#[derive(Parser)]
#[command(name = "acervo", version, about = "Inventory and custody-record search")]
struct Cli {
    /// Path to a JSON array of records.
    #[arg(long)]
    data: PathBuf,

    /// Which consultation view's schema to use.
    #[arg(long, value_enum, default_value = "inventory")]
    schema: SchemaKind,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    Inventory,
    Custody,
}

#[derive(Subcommand)]
enum Command {
    /// Print ranked autocomplete suggestions for a query.
    Suggest {
        /// Free-text query (minimum two characters).
        query: String,
    },
    /// Print the field a query most likely targets.
    Classify {
        /// Free-text query.
        query: String,
    },
    /// Print the records passing the given chips and free text.
    Filter {
        /// Pinned filter chip as `field=term`; repeatable, AND-combined.
        #[arg(long = "chip")]
        chips: Vec<String>,
        /// Free text, OR-matched across the schema's searchable fields.
        #[arg(long, default_value = "")]
        query: String,
        /// Sort the result by this field.
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending instead of ascending.
        #[arg(long)]
        desc: bool,
    },
    /// Print index statistics for the data set.
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.data)
        .with_context(|| format!("failed to read {}", cli.data.display()))?;
    let records: Vec<Record> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {} as a record array", cli.data.display()))?;
    tracing::debug!(records = records.len(), "loaded data set");

    let schema = match cli.schema {
        SchemaKind::Inventory => Schema::inventory(),
        SchemaKind::Custody => Schema::custody(),
    };
    let mut engine = Engine::new(schema);
    engine.set_records(records);

    match cli.command {
        Command::Suggest { query } => {
            engine.set_query(query);
            let suggestions = engine.suggestions();
            if suggestions.is_empty() {
                println!("no suggestions");
            }
            for s in suggestions {
                println!("{s}");
            }
        }
        Command::Classify { query } => {
            engine.set_query(query);
            match engine.match_kind() {
                Some(kind) => println!("{kind}"),
                None => println!("no match"),
            }
        }
        Command::Filter {
            chips,
            query,
            sort,
            desc,
        } => {
            for chip in &chips {
                engine.add_filter(parse_chip(chip)?);
            }
            engine.set_query(query);

            let rows = match sort {
                Some(field) => {
                    let kind: FieldKind = field
                        .parse()
                        .with_context(|| format!("invalid sort field {field:?}"))?;
                    let direction = if desc {
                        SortDirection::Descending
                    } else {
                        SortDirection::Ascending
                    };
                    engine.visible_sorted(kind, direction)
                }
                None => engine.visible(),
            };

            for row in &rows {
                println!("{}", serde_json::to_string(row)?);
            }
            eprintln!("{} of {} records", rows.len(), engine.len());
        }
        Command::Stats => {
            println!("{}", engine.stats());
        }
    }

    Ok(())
}

/// Parses a `field=term` chip argument.
fn parse_chip(chip: &str) -> Result<ActiveFilter> {
    let (field, term) = chip
        .split_once('=')
        .with_context(|| format!("chip {chip:?} is not of the form field=term"))?;
    let kind: FieldKind = field
        .parse()
        .with_context(|| format!("invalid chip field {field:?}"))?;
    Ok(ActiveFilter::new(Some(kind), term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_chip_accepts_field_and_term() {
        let chip = parse_chip("area=juridica").expect("should parse");
        assert_eq!(chip.kind, Some(FieldKind::Area));
        assert_eq!(chip.term, "juridica");
    }

    #[test]
    fn parse_chip_accepts_source_field_names() {
        let chip = parse_chip("usufinal=perez").expect("should parse");
        assert_eq!(chip.kind, Some(FieldKind::Director));
    }

    #[test]
    fn parse_chip_rejects_malformed_input() {
        assert!(parse_chip("area").is_err());
        assert!(parse_chip("serial=x").is_err());
    }
}
