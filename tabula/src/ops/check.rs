//! Check operation - configuration and schema validation.

use eyre::{Context, Result};
use tabula_config::ConfigFile;
use tabula_schema::{SchemaProvider, SnapshotProvider};

use crate::{registry, reports::CheckReport};

/// Execute the check operation.
///
/// Configures every generator and loads the schema model without writing
/// anything.
pub fn check(file: &ConfigFile) -> Result<CheckReport> {
    let generators = registry::configure(file.root(), &file.config().generators)
        .wrap_err_with(|| format!("invalid configuration in '{}'", file.path().display()))?;

    let schema = SnapshotProvider::new(file.snapshot_path())
        .introspect()
        .wrap_err("failed to load the schema model")?;

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        tables: schema.tables().len(),
        types: schema.types().len(),
        targets: generators
            .iter()
            .map(|g| (g.kind(), g.output_dir().to_path_buf()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tabula_codegen::GeneratorKind;

    use super::*;
    use crate::ops::fixtures::Project;

    #[test]
    fn test_check_reports_targets() {
        let project = Project::new(
            r#"[{"type": "protobuf", "output": "out/proto"}, {"type": "docs", "output": "out/docs"}]"#,
        );

        let report = check(&project.config()).unwrap();
        assert_eq!(report.tables, 2);
        assert_eq!(report.types, 1);
        assert_eq!(
            report.targets,
            [
                (GeneratorKind::Protobuf, project.out("proto")),
                (GeneratorKind::Docs, project.out("docs")),
            ]
        );
        assert_eq!(fs::read_dir(project.out("proto")).unwrap().count(), 0);
    }

    #[test]
    fn test_check_fails_on_bad_snapshot() {
        let project = Project::new("[]");
        fs::write(
            project.dir.path().join("schema.json"),
            r#"{"tables": [{"name": "a"}], "types": [{"name": "a", "values": []}]}"#,
        )
        .unwrap();

        let err = check(&project.config()).unwrap_err();
        assert_eq!(err.to_string(), "failed to load the schema model");
    }
}
