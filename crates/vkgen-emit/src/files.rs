//! Per-file scaffolding: output paths, the fixed provenance header, the
//! `using` block, and the namespace wrapper every generated file shares.

use vkgen_model::CORE_VENDOR;

use crate::writer::CodeWriter;

/// Root namespace of the generated binding.
pub(crate) const NAMESPACE: &str = "Vulkan";

/// Slash-separated output path for a (category, vendor) file. Core files
/// sit flat at the output root; vendor files live in a tag subdirectory.
pub(crate) fn file_path(vendor: &str, category: &str) -> String {
    if vendor == CORE_VENDOR {
        format!("{category}.gen.cs")
    } else {
        format!("{vendor}/{category}.gen.cs")
    }
}

/// Namespace a vendor's entities land in.
pub(crate) fn namespace_of(vendor: &str) -> String {
    if vendor == CORE_VENDOR {
        NAMESPACE.to_string()
    } else {
        format!("{NAMESPACE}.{vendor}")
    }
}

/// Render one complete source file: header comment, usings, then `body`
/// inside the vendor's namespace block.
///
/// Every file imports every other vendor's namespace; entities freely
/// reference types across vendor boundaries (a core handle's extension
/// methods, an `EXT` struct holding a `KHR` surface).
pub(crate) fn source_file(
    vendor: &str,
    all_vendors: &[String],
    body: impl FnOnce(&mut CodeWriter),
) -> String {
    let mut writer = CodeWriter::new();
    writer.line("// <auto-generated>");
    writer.line("// Generated from the Vulkan API registry. Changes here are overwritten");
    writer.line("// on the next generator run.");
    writer.line("// </auto-generated>");
    writer.blank();
    writer.line("using System;");
    writer.line("using System.Runtime.InteropServices;");
    for other in all_vendors {
        if other != vendor {
            writer.line(format!("using {};", namespace_of(other)));
        }
    }
    writer.blank();
    writer.block(format!("namespace {}", namespace_of(vendor)), body);
    writer.finish()
}
