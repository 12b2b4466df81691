//! Column-tracking text buffer.

/// A string buffer that knows its current line and column.
///
/// Text passed to [`print`](Self::print) must not contain newlines; use
/// [`println`](Self::println). Continuation lines start at the current
/// indent, applied lazily on the first print of a line.
#[derive(Clone, Debug, Default)]
pub struct IndentedWriter {
    buf: String,
    column: usize,
    row: usize,
    indent: usize,
    at_line_start: bool,
}

impl IndentedWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            at_line_start: true,
            ..Self::default()
        }
    }

    /// Current column (0-based).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Current line (0-based).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current indent.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Set the indent for following lines; returns the previous one.
    pub fn set_indent(&mut self, indent: usize) -> usize {
        std::mem::replace(&mut self.indent, indent)
    }

    /// Write text on the current line.
    pub fn print(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.ensure_indented();
        self.buf.push_str(text);
        self.column += text.chars().count();
    }

    /// Pad with spaces up to `column`; if already there or past it, write
    /// a single separating space.
    pub fn pad_to(&mut self, column: usize) {
        self.ensure_indented();
        let width = column.saturating_sub(self.column).max(1);
        self.spaces(width);
    }

    /// End the current line.
    pub fn println(&mut self) {
        self.buf.push('\n');
        self.column = 0;
        self.row += 1;
        self.at_line_start = true;
    }

    /// Consume the writer.
    pub fn into_string(self) -> String {
        self.buf
    }

    fn ensure_indented(&mut self) {
        if self.at_line_start {
            self.at_line_start = false;
            let indent = self.indent;
            self.spaces(indent);
        }
    }

    fn spaces(&mut self, n: usize) {
        self.buf.extend(std::iter::repeat_n(' ', n));
        self.column += n;
    }
}
