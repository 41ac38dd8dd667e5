//! Line-oriented text assembly shared by every target.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
