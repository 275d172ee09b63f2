//! vkgen: Vulkan registry to C# binding generator.
//!
//! ```text
//! registry XML → Registry Loader → Output Model Builder → Code Emitter → .gen.cs files
//! ```
//!
//! The pipeline is single-threaded and synchronous; it runs to completion
//! or stops at the first error. Verbose diagnostics flow through an
//! explicit reporter callback and never affect control flow.

mod disk;
mod error;
mod summary;

use std::path::PathBuf;

use vkgen_naming::NameTables;

pub use disk::DiskSink;
pub use error::{GenerateError, Result};
pub use summary::{GenerationSummary, VendorSummary};

/// Already-validated run configuration; argument parsing and directory
/// bootstrap happen before this crate is involved.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub verbose: bool,
}

/// Run the full pipeline: load the registry, build the Output Model,
/// emit generated source under the output directory.
///
/// `report` receives informational messages when `verbose` is set. Files
/// written before a failure stay on disk; re-running regenerates
/// everything idempotently.
pub fn generate(
    xml: &str,
    config: &GeneratorConfig,
    report: &mut dyn FnMut(&str),
) -> Result<GenerationSummary> {
    let registry = vkgen_registry::load(xml)?;
    if config.verbose {
        report(&format!(
            "registry loaded: {} bitmasks, {} enums, {} handles, {} structs, {} commands, {} extensions",
            registry.bitmasks.len(),
            registry.enums.len(),
            registry.handles.len(),
            registry.structs.len(),
            registry.commands.len(),
            registry.extensions.len(),
        ));
    }

    let tables = NameTables::new(
        registry.vendor_tags.iter().cloned(),
        registry.handles.iter().map(|handle| handle.name.clone()),
    );
    let model = vkgen_model::build(&registry, &tables)?;
    if config.verbose {
        for vendor in &model.vendors {
            report(&format!(
                "vendor {}: {} entities",
                vendor.name,
                vendor.entity_count()
            ));
        }
    }

    let mut sink = DiskSink::new(config.output_dir.clone());
    vkgen_emit::emit(&model, &mut sink)?;
    if config.verbose {
        for (path, _) in sink.written() {
            report(&format!("wrote {path}"));
        }
    }

    Ok(GenerationSummary::new(&model, sink.written()))
}
