use std::path::{Path, PathBuf};

use crate::{Config, DataSource, Error, Result};

/// A configuration file with both raw content and parsed configuration.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative paths in the configuration resolve against.
    pub fn root(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Path of the schema snapshot, resolved against [`ConfigFile::root`].
    pub fn snapshot_path(&self) -> PathBuf {
        match &self.config.source {
            DataSource::Snapshot { path } => self.root().join(path),
        }
    }
}
