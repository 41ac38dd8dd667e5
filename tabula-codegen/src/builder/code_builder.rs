//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use tabula_codegen::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public class User {")
///     .indent()
///     .line("private Long id;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public class User {\n    private Long id;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Create a new CodeBuilder with 2-space indentation (protobuf default).
    pub fn protobuf() -> Self {
        Self::new(Indent::PROTOBUF)
    }

    /// Markdown documents use 2-space list indentation.
    pub fn markdown() -> Self {
        Self::new(Indent::PROTOBUF)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use tabula_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::protobuf()
    ///     .block_with_close("message User {", "}", |b| b.line("int64 id = 1;"))
    ///     .build();
    ///
    /// assert_eq!(code, "message User {\n  int64 id = 1;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a comment line (e.g., `// text`).
    pub fn comment(self, text: &str) -> Self {
        self.doc("//", text)
    }

    /// Add a prefixed line, e.g. ` * text` inside a Javadoc block.
    fn doc(mut self, prefix: &str, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a Javadoc block comment. Single lines stay on one line.
    pub fn javadoc(self, text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        match lines.as_slice() {
            [] => self,
            [single] => self.line(&format!("/** {} */", single)),
            _ => self
                .line("/**")
                .each(lines.iter().copied(), |b, line| b.doc(" *", line))
                .line(" */"),
        }
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
