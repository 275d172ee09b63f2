//! Emission orchestration: one file per (category, vendor) pair plus the
//! shared constants and function-table files.
//!
//! Files are written through the sink as soon as they are rendered; a
//! failure aborts the run and leaves earlier files wherever the sink put
//! them.

use vkgen_model::{OutputModel, Vendor, CORE_VENDOR};

use crate::error::{EmitError, Result};
use crate::sink::EmitSink;
use crate::writer::CodeWriter;
use crate::{commands, constants, enums, files, handles, structs};

/// Project the Output Model into generated source through `sink`.
pub fn emit(model: &OutputModel, sink: &mut dyn EmitSink) -> Result<()> {
    let vendor_names: Vec<String> = model
        .vendors
        .iter()
        .map(|vendor| vendor.name.clone())
        .collect();

    for vendor in &model.vendors {
        if !vendor.bitmasks.is_empty() {
            let text = files::source_file(&vendor.name, &vendor_names, |writer| {
                enums::emit_bitmasks(writer, model, &vendor.bitmasks);
            });
            write(sink, &files::file_path(&vendor.name, "Bitmasks"), &text)?;
        }
        if !vendor.enums.is_empty() {
            let text = files::source_file(&vendor.name, &vendor_names, |writer| {
                enums::emit_enums(writer, model, &vendor.enums);
            });
            write(sink, &files::file_path(&vendor.name, "Enums"), &text)?;
        }
        if !vendor.structs.is_empty() || !vendor.func_pointers.is_empty() {
            let text = files::source_file(&vendor.name, &vendor_names, |writer| {
                structs_body(writer, model, vendor);
            });
            write(sink, &files::file_path(&vendor.name, "Structs"), &text)?;
        }
        if !vendor.handles.is_empty() {
            let text = files::source_file(&vendor.name, &vendor_names, |writer| {
                handles::emit_handles(writer, model, &vendor.handles);
            });
            write(sink, &files::file_path(&vendor.name, "Handles"), &text)?;
        }
    }

    // Cross-cutting files live at the output root with the core files.
    if !model.constants.is_empty() {
        let text = files::source_file(CORE_VENDOR, &vendor_names, |writer| {
            constants::emit_constants(writer, model);
        });
        write(sink, &files::file_path(CORE_VENDOR, "Constants"), &text)?;
    }
    let text = files::source_file(CORE_VENDOR, &vendor_names, |writer| {
        commands::emit_commands(writer, model);
    });
    write(sink, &files::file_path(CORE_VENDOR, "Commands"), &text)?;

    Ok(())
}

fn structs_body(writer: &mut CodeWriter, model: &OutputModel, vendor: &Vendor) {
    structs::emit_func_pointers(writer, model, &vendor.func_pointers);
    if !vendor.func_pointers.is_empty() && !vendor.structs.is_empty() {
        writer.blank();
    }
    structs::emit_structs(writer, model, &vendor.structs);
}

fn write(sink: &mut dyn EmitSink, path: &str, contents: &str) -> Result<()> {
    sink.write_file(path, contents)
        .map_err(|source| EmitError::Write {
            path: path.to_string(),
            source,
        })
}
