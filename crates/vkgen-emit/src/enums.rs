//! Enum and bitmask emission.
//!
//! One type block per entity, one line per value assignment in the value
//! list's insertion order. Aliased entities re-emit their target's value
//! list under their own name, so each vendor namespace is self-contained.

use vkgen_model::{EnumBody, OutputModel};

use crate::writer::CodeWriter;

pub(crate) fn emit_enums(writer: &mut CodeWriter, model: &OutputModel, ids: &[usize]) {
    for (position, &id) in ids.iter().enumerate() {
        if position > 0 {
            writer.blank();
        }
        let entry = model.enums.get(id);
        enum_type(writer, &entry.name, model.enums.resolve(id), false);
    }
}

pub(crate) fn emit_bitmasks(writer: &mut CodeWriter, model: &OutputModel, ids: &[usize]) {
    for (position, &id) in ids.iter().enumerate() {
        if position > 0 {
            writer.blank();
        }
        let entry = model.bitmasks.get(id);
        enum_type(writer, &entry.name, model.bitmasks.resolve(id), true);
    }
}

fn enum_type(writer: &mut CodeWriter, name: &str, body: &EnumBody, bitmask: bool) {
    if bitmask {
        writer.line("[Flags]");
    }
    // Bitmask bit 31 overflows a signed backing type.
    let backing = if bitmask { "uint" } else { "int" };
    writer.block(format!("public enum {name} : {backing}"), |writer| {
        for value in &body.values {
            if bitmask {
                writer.line(format!("{} = 0x{:X},", value.name, value.value));
            } else {
                writer.line(format!("{} = {},", value.name, value.value));
            }
        }
    });
}
