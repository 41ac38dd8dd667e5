use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Header line placed at the top of generated sources.
pub const GENERATED_HEADER: &str = "Code generated by tabula. DO NOT EDIT.";

/// A generated file opened for writing.
///
/// The file is created (and truncated) on [`OutputFile::create`] and closed
/// when the value is dropped, so every exit path releases the handle. A file
/// that is created but never written stays on disk empty.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: fs::File,
}

impl OutputFile {
    /// Create or truncate the file at `path`. The parent directory must exist.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = fs::File::create(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self { path, file })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full content and flush.
    pub fn write(mut self, content: &str) -> Result<()> {
        self.file
            .write_all(content.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| Error::io(&self.path, e))
    }
}

/// Check that `dir` exists and is a directory. Generators never create it.
pub fn require_dir(target: &str, dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::configuration(
            target,
            format!("output directory '{}' does not exist", dir.display()),
        ))
    }
}
