//! Indentation-disciplined source writer.
//!
//! A block pushes its opening line plus a brace and bumps the indent
//! counter; the closure form guarantees the matching close is written on
//! every exit path, so generated braces can never go unbalanced. Depth
//! misuse is a programming error, checked in debug builds only.

const INDENT: &str = "    ";

/// String-backed writer with brace-block discipline.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one indented line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.buffer.push('\n');
            return;
        }
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Write a blank separator line.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Open a brace block under `header`, run `body`, close the block.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
        self.line(header);
        self.line("{");
        self.depth += 1;
        let entry_depth = self.depth;
        body(self);
        debug_assert_eq!(self.depth, entry_depth, "unbalanced block nesting");
        self.depth -= 1;
        self.line("}");
    }

    /// Current nesting depth; zero at file scope.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Finish the file and hand back its text.
    pub fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "file finished inside an open block");
        self.buffer
    }
}
