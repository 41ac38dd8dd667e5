//! Protocol Buffers generator for tabula.
//!
//! Writes one `X.proto` message per table and a single `enum.proto` holding
//! every enum type.

mod generator;
mod naming;
mod type_mapper;

pub mod files;

pub use generator::{ENUM_FILE, ProtobufGenerator, ProtobufOptions};
pub use naming::PROTOBUF_NAMING;
pub use tabula_codegen::{GenerateResult, Generator, PreviewFile};
pub use type_mapper::ProtobufTypeMapper;
