//! Where finished files go.

use std::io;

/// Receiver for finished generated files.
///
/// `relative_path` is slash-separated relative to the output root;
/// vendor files live in a subdirectory named after the tag.
pub trait EmitSink {
    fn write_file(&mut self, relative_path: &str, contents: &str) -> io::Result<()>;
}

/// In-memory sink for tests; keeps files in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, relative_path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(path, _)| path == relative_path)
            .map(|(_, contents)| contents.as_str())
    }
}

impl EmitSink for MemorySink {
    fn write_file(&mut self, relative_path: &str, contents: &str) -> io::Result<()> {
        self.files
            .push((relative_path.to_string(), contents.to_string()));
        Ok(())
    }
}
