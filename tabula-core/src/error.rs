use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of schema entity an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Table,
    Type,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Table => f.write_str("table"),
            EntityKind::Type => f.write_str("type"),
        }
    }
}

/// Coarse classification of an [`Error`], ignoring entity context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Introspection,
    Render,
    Io,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {target} configuration: {message}")]
    #[diagnostic(code(tabula::configuration))]
    Configuration { target: String, message: String },

    #[error("schema introspection failed: {message}")]
    #[diagnostic(
        code(tabula::introspection),
        help("no generator was run; fix the data source and try again")
    )]
    Introspection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    #[error("failed to render template '{template}': {message}")]
    #[diagnostic(code(tabula::render))]
    Render { template: String, message: String },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(tabula::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("while generating {kind} '{name}'")]
    Entity {
        kind: EntityKind,
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn configuration(target: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Configuration {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn introspection(message: impl Into<String>) -> Self {
        Error::Introspection {
            message: message.into(),
            source: None,
        }
    }

    pub fn render(template: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Render {
            template: template.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the table or type this error happened in.
    pub fn within(self, kind: EntityKind, name: impl Into<String>) -> Self {
        Error::Entity {
            kind,
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Classify the error, looking through entity context.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Configuration { .. } => ErrorCategory::Configuration,
            Error::Introspection { .. } => ErrorCategory::Introspection,
            Error::Render { .. } => ErrorCategory::Render,
            Error::Io { .. } => ErrorCategory::Io,
            Error::Entity { source, .. } => source.category(),
        }
    }

    /// The innermost table or type name attached to this error, if any.
    pub fn entity(&self) -> Option<(EntityKind, &str)> {
        match self {
            Error::Entity { kind, name, source } => {
                source.entity().or(Some((*kind, name.as_str())))
            }
            _ => None,
        }
    }
}

/// Extension trait for attaching entity context to results.
pub trait ResultExt<T> {
    /// Wrap an error with the table it occurred in.
    fn in_table(self, name: &str) -> Result<T>;

    /// Wrap an error with the enum type it occurred in.
    fn in_type(self, name: &str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn in_table(self, name: &str) -> Result<T> {
        self.map_err(|e| e.within(EntityKind::Table, name))
    }

    fn in_type(self, name: &str) -> Result<T> {
        self.map_err(|e| e.within(EntityKind::Type, name))
    }
}
