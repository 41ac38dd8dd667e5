//! Indentation width for generated files.

/// Number of spaces per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub usize);

impl Indent {
    /// Java sources.
    pub const JAVA: Self = Self(4);

    /// Protobuf style guide. Markdown nested lists use the same width.
    pub const PROTOBUF: Self = Self(2);

    /// Append `level` indentation units to `buf`.
    pub fn write(&self, buf: &mut String, level: usize) {
        buf.extend(std::iter::repeat_n(' ', self.0 * level));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
