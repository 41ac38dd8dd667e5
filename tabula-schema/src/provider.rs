//! Schema providers.
//!
//! Querying a live catalog is left to external providers; this module ships
//! the provider contract plus a JSON snapshot reader.

use std::path::{Path, PathBuf};

use tabula_core::{Error, Result};

use crate::InspectResult;

/// Source of the schema model for a run.
pub trait SchemaProvider {
    /// Produce the schema model. Failure aborts the run before any generator.
    fn introspect(&self) -> Result<InspectResult>;
}

/// Reads a schema snapshot (`{"tables": [...], "types": [...]}`) from disk.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    path: PathBuf,
}

impl SnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaProvider for SnapshotProvider {
    fn introspect(&self) -> Result<InspectResult> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| Error::Introspection {
            message: format!("cannot read snapshot '{}'", self.path.display()),
            source: Some(Box::new(e)),
        })?;

        serde_json::from_str(&content).map_err(|e| Error::Introspection {
            message: format!("invalid snapshot '{}'", self.path.display()),
            source: Some(Box::new(e)),
        })
    }
}

/// Serves an already-built schema model.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    schema: InspectResult,
}

impl StaticProvider {
    pub fn new(schema: InspectResult) -> Self {
        Self { schema }
    }
}

impl SchemaProvider for StaticProvider {
    fn introspect(&self) -> Result<InspectResult> {
        Ok(self.schema.clone())
    }
}
