//! Handle emission: the opaque-handle wrapper boilerplate plus one
//! method per assigned command and parameter-set variant.
//!
//! Methods elide the leading handle-identifying parameter(s) and
//! re-insert them at the call site; a `(parent, handle, …)`-shaped
//! command reads the parent from a dedicated field filled when the
//! handle is created.

use vkgen_model::{
    AltParam, AltParamKind, CommandScope, HandleBody, OutCommand, OutParam, OutputModel,
};

use crate::writer::CodeWriter;

pub(crate) fn emit_handles(writer: &mut CodeWriter, model: &OutputModel, ids: &[usize]) {
    for (position, &id) in ids.iter().enumerate() {
        if position > 0 {
            writer.blank();
        }
        let entry = model.handles.get(id);
        handle_type(writer, model, &entry.name, model.handles.resolve(id));
    }
}

fn handle_type(writer: &mut CodeWriter, model: &OutputModel, name: &str, body: &HandleBody) {
    let header = format!("public unsafe partial struct {name} : IEquatable<{name}>");
    writer.block(header, |writer| {
        writer.line(format!("public OpaqueHandle<{name}> Handle;"));
        if let Some(parent) = parent_field_type(model, body) {
            writer.line(format!("public {parent} Parent;"));
        }
        writer.blank();
        writer.line("public bool IsValid => Handle.IsValid;");
        writer.blank();
        writer.line(format!(
            "public bool Equals({name} other) => Handle == other.Handle;"
        ));
        writer.line(format!(
            "public override bool Equals(object obj) => obj is {name} other && Equals(other);"
        ));
        writer.line("public override int GetHashCode() => Handle.GetHashCode();");
        writer.line(format!(
            "public static bool operator ==({name} left, {name} right) => left.Equals(right);"
        ));
        writer.line(format!(
            "public static bool operator !=({name} left, {name} right) => !left.Equals(right);"
        ));

        for &command_index in &body.commands {
            let command = &model.commands[command_index];
            writer.blank();
            raw_method(writer, command);
            if command.alternate.is_some() {
                writer.blank();
                alternate_method(writer, command);
            }
        }
    });
}

/// The parent field exists only when a `(parent, handle, …)` command
/// needs it at a call site.
fn parent_field_type(model: &OutputModel, body: &HandleBody) -> Option<String> {
    let needed = body
        .commands
        .iter()
        .any(|&index| model.commands[index].skip_params == 2);
    if !needed {
        return None;
    }
    let parent = body.parent?;
    Some(model.handles.get(parent).name.clone())
}

// ── Method shapes ────────────────────────────────────────────────────────

fn method_name(command: &OutCommand) -> &str {
    command
        .raw_name
        .strip_prefix("vk")
        .unwrap_or(&command.raw_name)
}

fn table_class(scope: CommandScope) -> &'static str {
    match scope {
        CommandScope::Global => "GlobalFunctions",
        CommandScope::Instance => "InstanceFunctions",
        CommandScope::Device => "DeviceFunctions",
    }
}

/// Leading call-site arguments re-inserting the elided handle
/// parameter(s).
fn leading_arguments(command: &OutCommand) -> Vec<String> {
    match command.skip_params {
        0 => Vec::new(),
        1 => vec!["this".to_string()],
        _ => vec!["Parent".to_string(), "this".to_string()],
    }
}

fn raw_method(writer: &mut CodeWriter, command: &OutCommand) {
    let name = method_name(command);
    let table = table_class(command.scope);
    let qualifier = if command.skip_params == 0 {
        "public static"
    } else {
        "public"
    };

    let mut signature: Vec<String> = vec![format!("{table} fn")];
    for param in &command.params[command.skip_params..] {
        signature.push(format!("{} {}", param.cs_type, param.name));
    }

    let mut arguments = leading_arguments(command);
    for param in &command.params[command.skip_params..] {
        arguments.push(param.name.clone());
    }

    writer.block(
        format!(
            "{qualifier} {} {name}({})",
            command.return_type,
            signature.join(", ")
        ),
        |writer| {
            writer.line(call_statement(command, &arguments));
        },
    );
}

fn call_statement(command: &OutCommand, arguments: &[String]) -> String {
    let call = format!("fn.{}({})", command.raw_name, arguments.join(", "));
    if command.return_type == "void" {
        format!("{call};")
    } else {
        format!("return {call};")
    }
}

// ── Alternate-set methods ────────────────────────────────────────────────

fn alternate_method(writer: &mut CodeWriter, command: &OutCommand) {
    let Some(alternate) = &command.alternate else {
        return;
    };
    let visible = &alternate[command.skip_params.min(alternate.len())..];

    let name = method_name(command);
    let table = table_class(command.scope);
    let qualifier = if command.skip_params == 0 {
        "public static"
    } else {
        "public"
    };

    let mut signature: Vec<String> = vec![format!("{table} fn")];
    for param in visible {
        signature.push(alternate_signature(param));
    }

    let mut arguments = leading_arguments(command);
    for param in &command.params[command.skip_params..] {
        arguments.push(alternate_argument(param, visible));
    }

    writer.block(
        format!(
            "{qualifier} {} {name}({})",
            command.return_type,
            signature.join(", ")
        ),
        |writer| {
            // Out parameters must be assigned before their address is
            // taken.
            for param in visible {
                if param.kind == AltParamKind::Out {
                    writer.line(format!("{} = default;", param.name));
                }
            }
            pinned_call(writer, command, visible, &arguments, 0);
        },
    );
}

fn alternate_signature(param: &AltParam) -> String {
    match param.kind {
        AltParamKind::In => format!("in {} {}", param.cs_type, param.name),
        AltParamKind::Out => format!("out {} {}", param.cs_type, param.name),
        _ => format!("{} {}", param.cs_type, param.name),
    }
}

/// Nest one `fixed` block per pinned parameter, then place the call at
/// the innermost depth.
fn pinned_call(
    writer: &mut CodeWriter,
    command: &OutCommand,
    visible: &[AltParam],
    arguments: &[String],
    from: usize,
) {
    for (offset, param) in visible[from..].iter().enumerate() {
        let header = match &param.kind {
            AltParamKind::Span { element_type, .. } => Some(format!(
                "fixed ({element_type}* {} = {})",
                param.raw_name, param.name
            )),
            AltParamKind::In | AltParamKind::Out => Some(format!(
                "fixed ({}* {} = &{})",
                param.cs_type, param.raw_name, param.name
            )),
            _ => None,
        };
        if let Some(header) = header {
            writer.block(header, |writer| {
                pinned_call(writer, command, visible, arguments, from + offset + 1);
            });
            return;
        }
    }
    writer.line(call_statement(command, arguments));
}

/// Call-site expression for one primary-set parameter, mapped through
/// the alternate set.
fn alternate_argument(param: &OutParam, visible: &[AltParam]) -> String {
    if let Some(alt) = visible.iter().find(|alt| alt.raw_name == param.raw_name) {
        return match &alt.kind {
            AltParamKind::Passthrough => alt.name.clone(),
            // Pinned pointers reuse the primary parameter's name.
            AltParamKind::Span { .. } | AltParamKind::In | AltParamKind::Out => {
                alt.raw_name.clone()
            }
            AltParamKind::NativeString | AltParamKind::NativeStringList => {
                format!("{}.Pointer", alt.name)
            }
        };
    }
    // Not in the alternate set: a count consumed by a span pairing.
    for alt in visible {
        if let AltParamKind::Span {
            count_name,
            count_type,
            ..
        } = &alt.kind
        {
            if count_name == &param.raw_name {
                return format!("({count_type}){}.Length", alt.name);
            }
        }
    }
    param.name.clone()
}
