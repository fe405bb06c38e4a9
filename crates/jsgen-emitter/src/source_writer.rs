//! Output buffer for the printer.
//!
//! Besides appending, the writer supports a few retroactive edits keyed by a
//! byte offset recorded before a child was emitted (`len()`), which lets the
//! printer fix up token adjacency once it knows what the child produced.

#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
        }
    }

    /// Write text to output.
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub fn write_space(&mut self) {
        self.output.push(' ');
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
    }

    /// Current length in bytes; use as a mark for the edits below.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Text written since `mark`.
    pub fn text_since(&self, mark: usize) -> &str {
        self.output.get(mark..).unwrap_or_default()
    }

    /// Insert a space at `mark`.
    pub fn insert_space_at(&mut self, mark: usize) {
        self.output.insert(mark, ' ');
    }

    /// Wrap everything written since `mark` in parentheses.
    pub fn wrap_since(&mut self, mark: usize) {
        self.output.insert(mark, '(');
        self.output.push(')');
    }

    /// Discard everything written since `mark`.
    pub fn truncate(&mut self, mark: usize) {
        self.output.truncate(mark);
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Take the accumulated output, leaving the writer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_and_edits() {
        let mut writer = SourceWriter::new();
        writer.write("-");
        let mark = writer.len();
        writer.write("-x");
        assert_eq!(writer.text_since(mark), "-x");
        writer.insert_space_at(mark);
        assert_eq!(writer.as_str(), "- -x");

        let mark = writer.len();
        writer.write(" + y");
        writer.truncate(mark);
        assert_eq!(writer.as_str(), "- -x");
    }

    #[test]
    fn test_wrap_since() {
        let mut writer = SourceWriter::new();
        writer.write("x = ");
        let mark = writer.len();
        writer.write("a, b");
        writer.wrap_since(mark);
        assert_eq!(writer.take(), "x = (a, b)");
        assert!(writer.is_empty());
    }
}
