//! API-constant emission: one shared static class of `const` fields.

use vkgen_model::OutputModel;

use crate::writer::CodeWriter;

pub(crate) fn emit_constants(writer: &mut CodeWriter, model: &OutputModel) {
    writer.block("public static class Constants", |writer| {
        for constant in &model.constants {
            writer.line(format!(
                "public const {} {} = {};",
                constant.cs_type, constant.name, constant.value
            ));
        }
    });
}
