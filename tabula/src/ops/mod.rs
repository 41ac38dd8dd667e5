//! Core operations.
//!
//! This module contains the business logic for tabula commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::{fs, path::PathBuf};

    use tabula_config::ConfigFile;
    use tempfile::TempDir;

    pub const SNAPSHOT: &str = r#"{
  "tables": [
    {
      "name": "user",
      "columns": [
        {"name": "id", "data_type": "serial", "primary_key": true, "not_null": true, "serial": true},
        {"name": "status", "data_type": "status"}
      ]
    },
    {"name": "flyway_schema_history", "columns": [{"name": "version", "data_type": "text"}]}
  ],
  "types": [{"name": "status", "values": ["1", "2", "active"]}]
}"#;

    /// A project directory with a snapshot, output directories and a
    /// configuration listing `generators`.
    pub struct Project {
        pub dir: TempDir,
    }

    impl Project {
        pub fn new(generators: &str) -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("schema.json"), SNAPSHOT).unwrap();
            for out in ["java", "proto", "docs"] {
                fs::create_dir_all(dir.path().join("out").join(out)).unwrap();
            }
            fs::write(
                dir.path().join("tabula.json"),
                format!(
                    r#"{{"source": {{"kind": "snapshot", "path": "schema.json"}}, "generators": {}}}"#,
                    generators
                ),
            )
            .unwrap();
            Self { dir }
        }

        pub fn config(&self) -> ConfigFile {
            ConfigFile::open(self.dir.path().join("tabula.json")).unwrap()
        }

        pub fn out(&self, target: &str) -> PathBuf {
            self.dir.path().join("out").join(target)
        }
    }
}
