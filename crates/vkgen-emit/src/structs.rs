//! Struct, union, and function-pointer-delegate emission.
//!
//! Fixed-size scalar arrays become inline `fixed` buffers; everything
//! else flattens into discrete numbered fields. Tagged structs get a
//! `New()` convenience constructor pre-filling the type tag and nulling
//! the chain pointer. Equality and hashing walk every field, with
//! pointer-typed fields hashed by their integer representation.

use vkgen_model::{OutField, OutParam, OutputModel, StructBody};

use crate::writer::CodeWriter;

pub(crate) fn emit_structs(writer: &mut CodeWriter, model: &OutputModel, ids: &[usize]) {
    for (position, &id) in ids.iter().enumerate() {
        if position > 0 {
            writer.blank();
        }
        let entry = model.structs.get(id);
        struct_type(writer, &entry.name, model.structs.resolve(id));
    }
}

pub(crate) fn emit_func_pointers(writer: &mut CodeWriter, model: &OutputModel, ids: &[usize]) {
    for &id in ids {
        let entry = model.func_pointers.get(id);
        let body = model.func_pointers.resolve(id);
        writer.line(format!(
            "public unsafe delegate {} {}({});",
            body.return_type,
            entry.name,
            parameter_list(&body.args)
        ));
    }
}

fn parameter_list(params: &[OutParam]) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|p| format!("{} {}", p.cs_type, p.name))
        .collect();
    rendered.join(", ")
}

// ── Struct body ──────────────────────────────────────────────────────────

fn struct_type(writer: &mut CodeWriter, name: &str, body: &StructBody) {
    if body.is_union {
        writer.line("[StructLayout(LayoutKind.Explicit)]");
    } else {
        writer.line("[StructLayout(LayoutKind.Sequential)]");
    }
    let header = format!("public unsafe partial struct {name} : IEquatable<{name}>");
    writer.block(header, |writer| {
        for field in &body.fields {
            field_declaration(writer, field, body.is_union);
        }
        if body.is_tagged() {
            writer.blank();
            tag_constructor(writer, name, body);
        }
        writer.blank();
        equals_method(writer, name, body);
        writer.blank();
        writer.line(format!(
            "public override bool Equals(object obj) => obj is {name} other && Equals(other);"
        ));
        writer.blank();
        hash_method(writer, body);
        writer.blank();
        writer.line(format!(
            "public static bool operator ==({name} left, {name} right) => left.Equals(right);"
        ));
        writer.line(format!(
            "public static bool operator !=({name} left, {name} right) => !left.Equals(right);"
        ));
    });
}

fn field_declaration(writer: &mut CodeWriter, field: &OutField, is_union: bool) {
    match field.array {
        Some(array) if array.fixed_buffer => {
            if is_union {
                writer.line("[FieldOffset(0)]");
            }
            writer.line(format!(
                "public fixed {} {}[{}];",
                field.cs_type, field.name, array.length
            ));
        }
        Some(array) => {
            for index in 0..array.length {
                if is_union {
                    writer.line("[FieldOffset(0)]");
                }
                writer.line(format!("public {} {}{};", field.cs_type, field.name, index));
            }
        }
        None => {
            if is_union {
                writer.line("[FieldOffset(0)]");
            }
            writer.line(format!("public {} {};", field.cs_type, field.name));
        }
    }
}

/// `New()` for tagged structs: default everything, pin the type tag,
/// null the chain pointer.
fn tag_constructor(writer: &mut CodeWriter, name: &str, body: &StructBody) {
    writer.block(format!("public static {name} New()"), |writer| {
        writer.line(format!("{name} value = default;"));
        for field in &body.fields {
            if field.is_tag {
                if let Some(tag_value) = &field.tag_value {
                    writer.line(format!("value.{} = {};", field.name, tag_value));
                }
            } else if field.is_chain {
                writer.line(format!("value.{} = null;", field.name));
            }
        }
        writer.line("return value;");
    });
}

// ── Equality and hashing ─────────────────────────────────────────────────

fn equals_method(writer: &mut CodeWriter, name: &str, body: &StructBody) {
    writer.block(format!("public bool Equals({name} other)"), |writer| {
        if has_fixed_buffer(body) {
            writer.line("var self = this;");
        }
        for field in &body.fields {
            match field.array {
                Some(array) if array.fixed_buffer => {
                    writer.block(
                        format!("for (int i = 0; i < {}; i++)", array.length),
                        |writer| {
                            writer.line(format!(
                                "if (self.{0}[i] != other.{0}[i]) return false;",
                                field.name
                            ));
                        },
                    );
                }
                Some(array) => {
                    for index in 0..array.length {
                        writer.line(format!(
                            "if ({0}{1} != other.{0}{1}) return false;",
                            field.name, index
                        ));
                    }
                }
                None => {
                    writer.line(format!("if ({0} != other.{0}) return false;", field.name));
                }
            }
        }
        writer.line("return true;");
    });
}

fn hash_method(writer: &mut CodeWriter, body: &StructBody) {
    writer.block("public override int GetHashCode()", |writer| {
        writer.line("var hash = new HashCode();");
        if has_fixed_buffer(body) {
            writer.line("var self = this;");
        }
        for field in &body.fields {
            match field.array {
                Some(array) if array.fixed_buffer => {
                    writer.block(
                        format!("for (int i = 0; i < {}; i++)", array.length),
                        |writer| {
                            writer.line(format!("hash.Add(self.{}[i]);", field.name));
                        },
                    );
                }
                Some(array) => {
                    for index in 0..array.length {
                        writer.line(format!("hash.Add({}{});", hash_operand(field), index));
                    }
                }
                None => {
                    writer.line(format!("hash.Add({});", hash_operand(field)));
                }
            }
        }
        writer.line("return hash.ToHashCode();");
    });
}

/// Pointer fields hash by their integer representation; pointers are not
/// valid generic arguments for the hash accumulator.
fn hash_operand(field: &OutField) -> String {
    if field.cs_type.contains('*') {
        format!("(ulong){}", field.name)
    } else {
        field.name.clone()
    }
}

fn has_fixed_buffer(body: &StructBody) -> bool {
    body.fields
        .iter()
        .any(|f| f.array.is_some_and(|a| a.fixed_buffer))
}
