use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of a configuration document, used to build
/// diagnostics that point into it.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a parse error from a serde_json error, labelled at its position.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span =
            offset(self.src, source.line(), source.column()).map(|at| SourceSpan::from(at..at));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally labelled.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn unknown_generator_error(
        &self,
        name: impl Into<String>,
        expected: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownGenerator {
            src: self.named_source(),
            span,
            name: name.into(),
            expected: expected.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(
        code(tabula::config::io),
        help("pass the configuration file with '--config <path>'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(tabula::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown generator type '{name}'")]
    #[diagnostic(code(tabula::config::unknown_generator), help("valid types are: {expected}"))]
    UnknownGenerator {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        name: String,
        expected: String,
    },

    #[error("{message}")]
    #[diagnostic(code(tabula::config::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
///
/// Column 0 is clamped to the start of the line.
fn offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let at = start + column.saturating_sub(1);
    Some(at.min(src.len()))
}

/// Span of the string value `"value"` following `"key":` in a JSON document.
pub(crate) fn find_string_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let quoted_key = format!("\"{}\"", key);
    let quoted_value = format!("\"{}\"", value);

    src.match_indices(&quoted_value)
        .find(|(at, _)| {
            src[..*at]
                .trim_end()
                .strip_suffix(':')
                .is_some_and(|before| before.trim_end().ends_with(&quoted_key))
        })
        .map(|(at, _)| SourceSpan::from(at..at + quoted_value.len()))
}
