// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration document for tabula.
//!
//! A configuration names the schema source and lists the generators to run,
//! in order. Each generator entry is kept as raw JSON (minus its `type`
//! discriminator) so the matching target can deserialize its own options.

mod error;
mod file;

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};
use tabula_codegen::GeneratorKind;

pub use error::{Error, Result, SourceContext};
pub use file::ConfigFile;

/// File name looked up when no configuration path is given.
pub const DEFAULT_CONFIG: &str = "tabula.json";

/// Where the schema model comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    /// A JSON schema snapshot, relative to the configuration file.
    Snapshot { path: PathBuf },
}

/// One configured generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorEntry {
    pub kind: GeneratorKind,
    /// The entry's remaining fields.
    pub options: Value,
}

/// Root of `tabula.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: DataSource,
    /// Generators in the order they run.
    pub generators: Vec<GeneratorEntry>,
}

#[derive(Deserialize)]
struct RawConfig {
    source: DataSource,
    #[serde(default)]
    generators: Vec<Map<String, Value>>,
}

impl Config {
    /// Parse a configuration (uses "tabula.json" as the filename in diagnostics)
    pub fn parse_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, DEFAULT_CONFIG)
    }

    /// Parse a configuration with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawConfig = serde_json::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let generators = raw
            .generators
            .into_iter()
            .enumerate()
            .map(|(index, entry)| generator_entry(&ctx, index, entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: raw.source,
            generators,
        })
    }
}

fn generator_entry(
    ctx: &SourceContext<'_>,
    index: usize,
    mut entry: Map<String, Value>,
) -> Result<GeneratorEntry> {
    let name = match entry.remove("type") {
        Some(Value::String(name)) => name,
        Some(_) => {
            return Err(ctx.validation_error(
                format!("generator #{}: 'type' must be a string", index + 1),
                None,
            ));
        }
        None => {
            return Err(ctx.validation_error(
                format!("generator #{} is missing 'type'", index + 1),
                None,
            ));
        }
    };

    let kind = name.parse::<GeneratorKind>().map_err(|_| {
        let expected: Vec<_> = GeneratorKind::ALL.iter().map(|k| k.as_str()).collect();
        ctx.unknown_generator_error(
            &name,
            expected.join(", "),
            error::find_string_span(ctx.src(), "type", &name),
        )
    })?;

    Ok(GeneratorEntry {
        kind,
        options: Value::Object(entry),
    })
}
