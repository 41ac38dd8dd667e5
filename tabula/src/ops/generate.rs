//! Generate operation - run every configured generator.

use eyre::{Context, Result};
use tabula_config::ConfigFile;
use tabula_schema::{SchemaProvider, SnapshotProvider};
use tracing::info;

use crate::{
    registry,
    reports::{GenerateReport, GenerationResult},
};

/// Execute the generate operation.
///
/// Every generator is configured before the schema is loaded, so a bad
/// entry fails without touching the data source. Generators then run in
/// configuration order; the first failure aborts the run.
pub fn generate(file: &ConfigFile, dry_run: bool) -> Result<GenerateReport> {
    let config = file.config();

    let generators = registry::configure(file.root(), &config.generators)
        .wrap_err_with(|| format!("invalid configuration in '{}'", file.path().display()))?;

    let schema = SnapshotProvider::new(file.snapshot_path())
        .introspect()
        .wrap_err("failed to load the schema model")?;
    info!(
        tables = schema.tables().len(),
        types = schema.types().len(),
        "schema loaded"
    );

    let result = if dry_run {
        let mut files = Vec::new();
        for generator in &generators {
            let preview = generator
                .preview(&schema)
                .wrap_err_with(|| format!("{} generator failed", generator.kind()))?;
            files.extend(preview);
        }
        GenerationResult::Preview(files)
    } else {
        let results = generators
            .iter()
            .map(|generator| {
                generator
                    .build(&schema)
                    .wrap_err_with(|| format!("{} generator failed", generator.kind()))
            })
            .collect::<Result<Vec<_>>>()?;
        GenerationResult::Written(results)
    };

    let mut warnings = Vec::new();
    if generators.is_empty() {
        warnings.push("no generators configured".to_string());
    }

    Ok(GenerateReport {
        tables: schema.tables().len(),
        types: schema.types().len(),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tabula_core::{Error, ErrorCategory};

    use super::*;
    use crate::ops::fixtures::Project;

    fn category(err: &eyre::Report) -> Option<ErrorCategory> {
        err.chain()
            .find_map(|e| e.downcast_ref::<Error>())
            .map(Error::category)
    }

    #[test]
    fn test_generate_all_targets() {
        let project = Project::new(
            r#"[
                {"type": "hibernate", "output": "out/java", "package_name": "com.acme",
                 "ignore_tables": ["flyway_schema_history"]},
                {"type": "protobuf", "output": "out/proto", "package_name": "acme",
                 "ignore_tables": ["flyway_schema_history"]},
                {"type": "docs", "output": "out/docs"}
            ]"#,
        );

        let report = generate(&project.config(), false).unwrap();
        assert_eq!(report.tables, 2);
        assert_eq!(report.types, 1);

        let GenerationResult::Written(results) = report.result else {
            panic!("expected written files");
        };
        let files: Vec<_> = results.iter().map(|r| r.files.clone()).collect();
        assert_eq!(
            files,
            [
                vec!["User.java", "User_.java", "Status.java", "StatusUserType.java"],
                vec!["User.proto", "enum.proto"],
                vec!["User.md", "FlywaySchemaHistory.md", "enums.md"],
            ]
        );

        let status = fs::read_to_string(project.out("java").join("Status.java")).unwrap();
        assert!(status.contains("ACTIVE(2, \"active\");"));
        let proto = fs::read_to_string(project.out("proto").join("enum.proto")).unwrap();
        assert!(proto.contains("STATUS_ACTIVE = 0;"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let project = Project::new(r#"[{"type": "docs", "output": "out/docs"}]"#);

        let report = generate(&project.config(), true).unwrap();
        let GenerationResult::Preview(files) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 3);
        assert_eq!(fs::read_dir(project.out("docs")).unwrap().count(), 0);
    }

    #[test]
    fn test_configuration_checked_before_introspection() {
        let project = Project::new(
            r#"[{"type": "docs", "output": "out/docs"}, {"type": "protobuf", "output": "out/missing"}]"#,
        );
        fs::remove_file(project.dir.path().join("schema.json")).unwrap();

        let err = generate(&project.config(), false).unwrap_err();
        assert_eq!(category(&err), Some(ErrorCategory::Configuration));
        assert_eq!(fs::read_dir(project.out("docs")).unwrap().count(), 0);
    }

    #[test]
    fn test_introspection_failure_runs_nothing() {
        let project = Project::new(r#"[{"type": "docs", "output": "out/docs"}]"#);
        fs::write(project.dir.path().join("schema.json"), "{").unwrap();

        let err = generate(&project.config(), false).unwrap_err();
        assert_eq!(category(&err), Some(ErrorCategory::Introspection));
        assert_eq!(fs::read_dir(project.out("docs")).unwrap().count(), 0);
    }

    #[test]
    fn test_no_generators_warns() {
        let project = Project::new("[]");
        let report = generate(&project.config(), false).unwrap();
        assert_eq!(report.warnings, ["no generators configured"]);
    }
}
