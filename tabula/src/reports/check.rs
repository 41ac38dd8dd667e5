//! Check command report data structures.

use std::path::PathBuf;

use tabula_codegen::GeneratorKind;

use super::{
    count,
    output::{Output, Report},
};

/// Report data from configuration and schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub tables: usize,
    pub types: usize,
    /// Configured targets in run order, with their output directories.
    pub targets: Vec<(GeneratorKind, PathBuf)>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.targets.is_empty() {
            out.warning("no generators configured");
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value(
            "Schema",
            &format!("{}, {}", count(self.tables, "table"), count(self.types, "type")),
        );

        if !self.targets.is_empty() {
            out.section("Targets");
            for (kind, output) in &self.targets {
                out.list_item(&format!("{} -> {}", kind, output.display()));
            }
        }
    }
}
