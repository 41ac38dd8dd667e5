//! The generator contract and the configuration every target shares.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, de::DeserializeOwned};
use tabula_core::{Error, Result, require_dir};
use tabula_schema::{InspectResult, Table};
use tracing::info;

use crate::{PreviewFile, Renderer, Templates};

/// The closed set of generator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Hibernate,
    Protobuf,
    Docs,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Hibernate,
        GeneratorKind::Protobuf,
        GeneratorKind::Docs,
    ];

    /// The `type` discriminator used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Hibernate => "hibernate",
            GeneratorKind::Protobuf => "protobuf",
            GeneratorKind::Docs => "docs",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GeneratorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = GeneratorKind::ALL.iter().map(|k| k.as_str()).collect();
                Error::configuration(
                    "generator",
                    format!(
                        "unknown generator type '{}' (expected one of: {})",
                        s,
                        known.join(", ")
                    ),
                )
            })
    }
}

/// Trait for target generators.
///
/// A generator is configured once, then built against a schema model. Every
/// table (minus ignored ones) and every enum type is emitted in schema order;
/// the first failure aborts the build.
pub trait Generator {
    fn kind(&self) -> GeneratorKind;

    /// Directory the generator writes into.
    fn output_dir(&self) -> &Path;

    /// Generate all files into the output directory.
    fn build(&self, schema: &InspectResult) -> Result<GenerateResult>;

    /// Render all files without writing to disk.
    fn preview(&self, schema: &InspectResult) -> Result<Vec<PreviewFile>>;
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub kind: GeneratorKind,
    pub output: PathBuf,
    /// File names written, in emission order.
    pub files: Vec<String>,
}

/// Options every target accepts. Flattened into each target's options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputOptions {
    /// Output directory. Must already exist.
    pub output: PathBuf,
    /// Optional template directory overriding the built-in layouts.
    #[serde(default)]
    pub templates: Option<PathBuf>,
    /// Tables to skip, by exact name.
    #[serde(default)]
    pub ignore_tables: Vec<String>,
}

/// Deserialize a target's options from its raw configuration entry.
pub fn parse_options<T: DeserializeOwned>(
    kind: GeneratorKind,
    raw: &serde_json::Value,
) -> Result<T> {
    T::deserialize(raw).map_err(|e| Error::configuration(kind.as_str(), e.to_string()))
}

/// A configured output location: directory, renderer and table filter.
#[derive(Debug)]
pub struct OutputTarget<R = Templates> {
    kind: GeneratorKind,
    output: PathBuf,
    ignore_tables: Vec<String>,
    renderer: R,
}

impl OutputTarget {
    /// Resolve paths against `root`, check the output directory and load
    /// templates.
    pub fn open(
        kind: GeneratorKind,
        root: &Path,
        options: &OutputOptions,
        required_templates: &[&str],
    ) -> Result<Self> {
        let output = root.join(&options.output);
        require_dir(kind.as_str(), &output)?;

        let templates = options.templates.as_ref().map(|dir| root.join(dir));
        let renderer = Templates::load(kind.as_str(), templates.as_deref(), required_templates)?;

        Ok(Self {
            kind,
            output,
            ignore_tables: options.ignore_tables.clone(),
            renderer,
        })
    }
}

impl<R: Renderer> OutputTarget<R> {
    /// Swap the renderer, keeping the rest of the configuration.
    pub fn with_renderer<S: Renderer>(self, renderer: S) -> OutputTarget<S> {
        OutputTarget {
            kind: self.kind,
            output: self.output,
            ignore_tables: self.ignore_tables,
            renderer,
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn output_dir(&self) -> &Path {
        &self.output
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_ignored(&self, table: &str) -> bool {
        self.ignore_tables.iter().any(|t| t == table)
    }

    /// Tables to generate, in schema order.
    pub fn tables<'a>(&'a self, schema: &'a InspectResult) -> impl Iterator<Item = &'a Table> {
        schema.tables().filter(|t| !self.is_ignored(&t.name))
    }

    /// Log where this target writes and which templates it uses.
    pub fn log_start(&self) {
        let templates = self
            .renderer
            .template_dir()
            .map_or_else(|| "builtin".to_string(), |dir| dir.display().to_string());
        info!(
            target_kind = %self.kind,
            output = %self.output.display(),
            templates = %templates,
            "generating"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tabula_core::ErrorCategory;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.as_str().parse::<GeneratorKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "graphql".parse::<GeneratorKind>().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("'graphql'"));
    }

    #[test]
    fn test_parse_options() {
        let options: OutputOptions = parse_options(
            GeneratorKind::Docs,
            &json!({"output": "out", "ignore_tables": ["flyway_schema_history"]}),
        )
        .unwrap();
        assert_eq!(options.output, PathBuf::from("out"));
        assert_eq!(options.templates, None);
        assert_eq!(options.ignore_tables, ["flyway_schema_history"]);

        let err = parse_options::<OutputOptions>(GeneratorKind::Docs, &json!({"templates": 3}))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().starts_with("invalid docs configuration"));
    }

    #[test]
    fn test_open_resolves_against_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();

        let options = OutputOptions {
            output: PathBuf::from("out"),
            templates: None,
            ignore_tables: vec!["flyway_schema_history".into()],
        };
        let target = OutputTarget::open(GeneratorKind::Docs, temp.path(), &options, &[]).unwrap();

        assert_eq!(target.output_dir(), temp.path().join("out"));
        assert!(target.is_ignored("flyway_schema_history"));
        assert!(!target.is_ignored("user"));
    }

    #[test]
    fn test_open_requires_output_dir() {
        let temp = TempDir::new().unwrap();
        let options = OutputOptions {
            output: PathBuf::from("missing"),
            templates: None,
            ignore_tables: vec![],
        };

        let err = OutputTarget::open(GeneratorKind::Docs, temp.path(), &options, &[]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_open_checks_templates() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();
        fs::create_dir(temp.path().join("tmpl")).unwrap();

        let options = OutputOptions {
            output: PathBuf::from("out"),
            templates: Some(PathBuf::from("tmpl")),
            ignore_tables: vec![],
        };

        let err = OutputTarget::open(GeneratorKind::Docs, temp.path(), &options, &["table"])
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);

        fs::write(temp.path().join("tmpl/table.tmpl"), "{{ name }}").unwrap();
        let target =
            OutputTarget::open(GeneratorKind::Docs, temp.path(), &options, &["table"]).unwrap();
        assert_eq!(
            target.renderer().template_dir(),
            Some(temp.path().join("tmpl").as_path())
        );
    }

    #[test]
    fn test_tables_skips_ignored() {
        let temp = TempDir::new().unwrap();
        let options = OutputOptions {
            output: PathBuf::from("."),
            templates: None,
            ignore_tables: vec!["flyway_schema_history".into()],
        };
        let target = OutputTarget::open(GeneratorKind::Docs, temp.path(), &options, &[]).unwrap();
        let schema = InspectResult::new(
            [
                Table::new("user"),
                Table::new("flyway_schema_history"),
                Table::new("account"),
            ],
            [],
        )
        .unwrap();

        let names: Vec<_> = target.tables(&schema).map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["user", "account"]);
    }
}
