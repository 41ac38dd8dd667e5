//! File emission.

use std::path::{Path, PathBuf};

use tabula_core::{OutputFile, Result};
use tracing::debug;

/// Destination for generated files.
pub trait Emitter {
    /// Emit one file. `render` produces its content.
    fn emit<F>(&mut self, file_name: &str, render: F) -> Result<()>
    where
        F: FnOnce() -> Result<String>;
}

/// Writes files into an output directory.
///
/// The file is opened before its content is rendered; a render failure
/// leaves an empty file behind.
#[derive(Debug)]
pub struct DiskEmitter {
    dir: PathBuf,
    written: Vec<String>,
}

impl DiskEmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File names written so far, in order.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    pub fn into_written(self) -> Vec<String> {
        self.written
    }
}

impl Emitter for DiskEmitter {
    fn emit<F>(&mut self, file_name: &str, render: F) -> Result<()>
    where
        F: FnOnce() -> Result<String>,
    {
        let file = OutputFile::create(self.dir.join(file_name))?;
        let content = render()?;
        file.write(&content)?;

        debug!(path = %self.dir.join(file_name).display(), "wrote file");
        self.written.push(file_name.to_string());
        Ok(())
    }
}

/// A rendered file that was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Collects rendered files in memory.
#[derive(Debug)]
pub struct PreviewEmitter {
    dir: PathBuf,
    files: Vec<PreviewFile>,
}

impl PreviewEmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: Vec::new(),
        }
    }

    pub fn into_files(self) -> Vec<PreviewFile> {
        self.files
    }
}

impl Emitter for PreviewEmitter {
    fn emit<F>(&mut self, file_name: &str, render: F) -> Result<()>
    where
        F: FnOnce() -> Result<String>,
    {
        let content = render()?;
        self.files.push(PreviewFile {
            path: self.dir.join(file_name),
            content,
        });
        Ok(())
    }
}
