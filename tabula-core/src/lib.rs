//! Core utilities and types for tabula.
//!
//! This crate provides the naming normalizer, the error taxonomy shared by
//! every generator, and scoped output files.

mod error;
mod naming;
mod output;

// Errors
pub use error::{EntityKind, Error, ErrorCategory, Result, ResultExt};
// Naming
pub use naming::{is_integer_literal, to_lower_camel, to_upper_camel, to_upper_snake};
// File operations
pub use output::{GENERATED_HEADER, OutputFile, require_dir};
