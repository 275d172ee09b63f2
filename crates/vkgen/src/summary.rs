//! The generation report.

use serde::Serialize;
use sha2::{Digest, Sha256};
use vkgen_model::OutputModel;

/// Counts and provenance for one completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub bitmasks: usize,
    pub enums: usize,
    pub handles: usize,
    pub structs: usize,
    pub func_pointers: usize,
    pub constants: usize,
    pub commands: usize,
    pub vendors: Vec<VendorSummary>,
    pub files: usize,
    /// SHA-256 over all emitted file contents in path order; equal
    /// digests mean byte-identical output.
    pub digest: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorSummary {
    pub name: String,
    pub entities: usize,
}

impl GenerationSummary {
    pub(crate) fn new(model: &OutputModel, files: &[(String, String)]) -> Self {
        Self {
            bitmasks: model.bitmasks.len(),
            enums: model.enums.len(),
            handles: model.handles.len(),
            structs: model.structs.len(),
            func_pointers: model.func_pointers.len(),
            constants: model.constants.len(),
            commands: model.commands.len(),
            vendors: model
                .vendors
                .iter()
                .map(|vendor| VendorSummary {
                    name: vendor.name.clone(),
                    entities: vendor.entity_count(),
                })
                .collect(),
            files: files.len(),
            digest: output_digest(files),
        }
    }

    /// JSON rendering for the verbose channel.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Digest emitted files in sorted path order, so the result is stable
/// across write order.
fn output_digest(files: &[(String, String)]) -> String {
    let mut ordered: Vec<&(String, String)> = files.iter().collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut hasher = Sha256::new();
    for (path, contents) in ordered {
        hasher.update(path.as_bytes());
        hasher.update([0u8]);
        hasher.update(contents.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let mut rendered = String::with_capacity(digest.len() * 2);
    for byte in digest {
        rendered.push_str(&format!("{byte:02x}"));
    }
    rendered
}
