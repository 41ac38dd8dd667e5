//! Shared code generation pipeline for tabula.
//!
//! This crate provides the target-agnostic half of every generator. The
//! per-target crates (e.g., `tabula-codegen-hibernate`) supply type tables,
//! view models and built-in renderings on top of it.
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks (CodeBuilder, Indent)
//! - [`mapping`] - Shared type resolution order (TypeMapper)
//! - [`column`] - Column trait analysis and write policies
//! - [`naming`] - Per-target naming conventions
//! - [`enums`] - Enum member naming and ordinal assignment
//! - [`render`] - View models and renderers (built-in, template directory)
//! - [`emit`] - File emission to disk or to an in-memory preview
//! - [`generator`] - The generator contract and its configuration
//! - [`testing`] - Test fixtures (feature-gated)

pub mod builder;
pub mod column;
pub mod emit;
pub mod enums;
pub mod generator;
pub mod mapping;
pub mod naming;
pub mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, Indent};
pub use column::{ColumnTraits, Conversion, WritePolicy, single_line, warn_missing_primary_key};
pub use emit::{DiskEmitter, Emitter, PreviewEmitter, PreviewFile};
pub use enums::{EnumMember, OrdinalStrategy, enum_members};
pub use generator::{
    GenerateResult, Generator, GeneratorKind, OutputOptions, OutputTarget, parse_options,
};
pub use mapping::{TypeMapper, TypeResolution, TypeSource};
pub use naming::NamingConvention;
pub use render::{Renderer, TemplateRenderer, Templates, View};
