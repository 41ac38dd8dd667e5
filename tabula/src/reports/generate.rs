//! Generate command report data structures.

use tabula_codegen::{GenerateResult, PreviewFile};

use super::{
    count,
    output::{Output, Report},
};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Tables in the schema model, before any target ignores some.
    pub tables: usize,
    pub types: usize,
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, per generator in run order.
    Written(Vec<GenerateResult>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(results) => self.render_written(out, results),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn schema_summary(&self) -> String {
        format!("{}, {}", count(self.tables, "table"), count(self.types, "type"))
    }

    fn render_written(&self, out: &mut dyn Output, results: &[GenerateResult]) {
        out.key_value("Schema", &self.schema_summary());

        for result in results {
            out.newline();
            out.section(&format!("{} ({})", result.kind, result.output.display()));
            for file in &result.files {
                out.added_item(file);
            }
        }

        let total: usize = results.iter().map(|r| r.files.len()).sum();
        out.newline();
        out.key_value("Generated", &count(total, "file"));
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.key_value("Schema", &self.schema_summary());
        out.preformatted(&format!("{} would be generated", count(files.len(), "file")));
    }
}
