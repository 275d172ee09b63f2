//! Function-table emission: one class per command scope tier, a loader
//! constructor with the four loading strategies, and one thin calling
//! wrapper per command.
//!
//! Loading strategy per command: alias targets forward from the target's
//! pointer falling back to a direct symbol load; baseline commands load
//! unconditionally; feature-level commands load gated on a minimum
//! version; extension commands load best-effort and may stay null.
//! Wrappers guard non-baseline commands with a not-loaded exception;
//! baseline pointers are assumed present once construction succeeds.

use vkgen_model::{CommandScope, OutCommand, OutputModel};
use vkgen_types::CommandProvenance;

use crate::writer::CodeWriter;

pub(crate) fn emit_commands(writer: &mut CodeWriter, model: &OutputModel) {
    not_loaded_exception(writer);

    for (position, scope) in [
        CommandScope::Global,
        CommandScope::Instance,
        CommandScope::Device,
    ]
    .into_iter()
    .enumerate()
    {
        let commands: Vec<&OutCommand> = model
            .commands
            .iter()
            .filter(|command| command.scope == scope)
            .collect();
        if position > 0 || !commands.is_empty() {
            writer.blank();
        }
        table_class(writer, scope, &commands);
    }
}

fn not_loaded_exception(writer: &mut CodeWriter) {
    writer.block(
        "public sealed class FunctionNotLoadedException : Exception",
        |writer| {
            writer.line("public FunctionNotLoadedException(string name)");
            writer.line("    : base(\"Vulkan function \" + name + \" is not loaded.\")");
            writer.line("{");
            writer.line("}");
        },
    );
}

// ── One class per scope tier ─────────────────────────────────────────────

pub(crate) fn class_name(scope: CommandScope) -> &'static str {
    match scope {
        CommandScope::Global => "GlobalFunctions",
        CommandScope::Instance => "InstanceFunctions",
        CommandScope::Device => "DeviceFunctions",
    }
}

fn table_class(writer: &mut CodeWriter, scope: CommandScope, commands: &[&OutCommand]) {
    let name = class_name(scope);
    writer.block(format!("public sealed unsafe class {name}"), |writer| {
        for command in commands {
            writer.line(format!(
                "internal {} {}_ptr;",
                pointer_type(command),
                command.raw_name
            ));
        }
        writer.blank();
        loader_constructor(writer, scope, commands);
        for command in commands {
            writer.blank();
            wrapper_method(writer, command);
        }
    });
}

/// The unmanaged function-pointer type backing one command.
fn pointer_type(command: &OutCommand) -> String {
    let mut types: Vec<&str> = command
        .params
        .iter()
        .map(|param| param.cs_type.as_str())
        .collect();
    types.push(&command.return_type);
    format!("delegate* unmanaged<{}>", types.join(", "))
}

// ── Loader constructor ───────────────────────────────────────────────────

fn loader_constructor(writer: &mut CodeWriter, scope: CommandScope, commands: &[&OutCommand]) {
    let name = class_name(scope);
    let header = match scope {
        CommandScope::Global => format!("public {name}(Func<string, IntPtr> load)"),
        CommandScope::Instance => format!(
            "public {name}(VkInstance instance, uint apiVersion, Func<VkInstance, string, IntPtr> load)"
        ),
        CommandScope::Device => format!(
            "public {name}(VkDevice device, uint apiVersion, Func<VkDevice, string, IntPtr> load)"
        ),
    };
    writer.block(header, |writer| {
        for command in commands {
            loader_statement(writer, scope, command);
        }
    });
}

fn loader_statement(writer: &mut CodeWriter, scope: CommandScope, command: &OutCommand) {
    let field = format!("{}_ptr", command.raw_name);
    let load = load_expression(scope, command);

    if let Some(target) = &command.alias_of {
        // Forward from the alias target, falling back to a direct load.
        writer.line(format!(
            "{field} = {target}_ptr != null ? {target}_ptr : {load};"
        ));
        return;
    }

    match &command.provenance {
        CommandProvenance::FeatureLevel { major, minor } if scope != CommandScope::Global => {
            let version = (*major << 22) | (*minor << 12);
            writer.block(format!("if (apiVersion >= {version})"), |writer| {
                writer.line(format!("{field} = {load};"));
            });
        }
        _ => {
            writer.line(format!("{field} = {load};"));
        }
    }
}

fn load_expression(scope: CommandScope, command: &OutCommand) -> String {
    let pointer = pointer_type(command);
    let symbol = &command.raw_name;
    match scope {
        CommandScope::Global => format!("({pointer})load(\"{symbol}\")"),
        CommandScope::Instance => format!("({pointer})load(instance, \"{symbol}\")"),
        CommandScope::Device => format!("({pointer})load(device, \"{symbol}\")"),
    }
}

// ── Calling wrappers ─────────────────────────────────────────────────────

fn wrapper_method(writer: &mut CodeWriter, command: &OutCommand) {
    let name = &command.raw_name;
    let parameters: Vec<String> = command
        .params
        .iter()
        .map(|param| format!("{} {}", param.cs_type, param.name))
        .collect();
    let arguments: Vec<&str> = command
        .params
        .iter()
        .map(|param| param.name.as_str())
        .collect();

    writer.block(
        format!(
            "public {} {name}({})",
            command.return_type,
            parameters.join(", ")
        ),
        |writer| {
            if guarded(command) {
                writer.line(format!(
                    "if ({name}_ptr == null) throw new FunctionNotLoadedException(\"{name}\");"
                ));
            }
            let call = format!("{name}_ptr({})", arguments.join(", "));
            if command.return_type == "void" {
                writer.line(format!("{call};"));
            } else {
                writer.line(format!("return {call};"));
            }
        },
    );
}

/// Baseline pointers are assumed present once construction succeeds;
/// everything else may legitimately be null at call time.
fn guarded(command: &OutCommand) -> bool {
    !matches!(command.provenance, CommandProvenance::Baseline) || command.alias_of.is_some()
}
