//! The on-disk sink behind the emitter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use vkgen_emit::EmitSink;

/// Writes generated files under the configured output root, creating
/// vendor subdirectories on demand, and records what was written so the
/// caller can report and digest it afterwards.
#[derive(Debug)]
pub struct DiskSink {
    root: PathBuf,
    written: Vec<(String, String)>,
}

impl DiskSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// Written files in write order, as `(relative path, contents)`.
    pub fn written(&self) -> &[(String, String)] {
        &self.written
    }
}

impl EmitSink for DiskSink {
    fn write_file(&mut self, relative_path: &str, contents: &str) -> io::Result<()> {
        let target = self.root.join(Path::new(relative_path));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
        self.written
            .push((relative_path.to_string(), contents.to_string()));
        Ok(())
    }
}
