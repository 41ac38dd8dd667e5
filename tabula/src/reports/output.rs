//! Output trait for rendering reports to different sinks.

/// Where a rendered line belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Report body.
    Body,
    /// Diagnostics that should not mix with generated content.
    Diagnostic,
}

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods. Sinks only
/// decide where each formatted line goes.
pub trait Output {
    /// Emit one formatted line.
    fn line(&mut self, stream: Stream, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.line(Stream::Body, &format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Stream::Body, &format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Stream::Body, &format!("  - {}", text));
    }

    /// Render a written file.
    fn added_item(&mut self, text: &str) {
        self.line(Stream::Body, &format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Stream::Diagnostic, &format!("warning: {}", msg));
    }

    /// Render a separator carrying a label, used between previewed files.
    fn divider(&mut self, label: &str) {
        self.line(Stream::Body, &format!("── {} ──", label));
    }

    /// Render text verbatim.
    fn preformatted(&mut self, text: &str) {
        self.line(Stream::Body, text);
    }

    fn newline(&mut self) {
        self.line(Stream::Body, "");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: body on stdout, diagnostics on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, stream: Stream, text: &str) {
        match stream {
            Stream::Body => println!("{}", text),
            Stream::Diagnostic => eprintln!("{}", text),
        }
    }
}

/// Collects rendered lines in memory, regardless of stream.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, _stream: Stream, text: &str) {
        self.lines.push(text.to_string());
    }
}
