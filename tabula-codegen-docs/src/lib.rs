//! Markdown documentation generator for tabula.
//!
//! Writes one page per table (`User.md`) and a single `enums.md` describing
//! every enum type.

mod generator;
mod naming;
mod type_mapper;

pub mod files;

pub use generator::{DocsGenerator, DocsOptions, TYPES_FILE};
pub use naming::DOCS_NAMING;
pub use tabula_codegen::{GenerateResult, Generator, PreviewFile};
pub use type_mapper::DocsTypeMapper;
