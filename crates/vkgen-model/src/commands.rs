//! Command resolution: output parameter lists, scope inference,
//! command-to-handle assignment, and alternate parameter-set synthesis.

use vkgen_naming::{self as naming, NameTables};
use vkgen_types::{CommandDef, CommandProvenance, RawDecl, RawParam, RawRegistry};

use crate::error::{BuildError, Result};
use crate::output::{
    AltParam, AltParamKind, CommandScope, ObjectScope, OutBody, OutCommand, OutParam, OutputModel,
};

/// The top-level instance-capable handle; global-scope commands attach
/// here.
const INSTANCE_HANDLE: &str = "VkInstance";
/// The logical-device handle anchoring device-scope loading.
const DEVICE_HANDLE: &str = "VkDevice";
/// Recorded commands carry this prefix and belong to the command buffer.
const RECORDED_COMMAND_PREFIX: &str = "vkCmd";
const COMMAND_BUFFER_HANDLE: &str = "VkCommandBuffer";

/// Registry entries whose second argument is handle-shaped but
/// semantically belongs to the first argument's type.
const FIRST_PARAM_OWNERS: &[&str] = &[
    "vkBindBufferMemory",
    "vkBindImageMemory",
    "vkGetDeviceGroupSurfacePresentModesKHR",
];

/// Build every output command and assign each to its owning handle.
pub(crate) fn build_commands(
    registry: &RawRegistry,
    tables: &NameTables,
    model: &mut OutputModel,
) -> Result<()> {
    let mut assignments: Vec<(usize, usize)> = Vec::new();

    for raw in registry.commands.iter() {
        let (def, alias_of) = match &raw.decl {
            RawDecl::Definition(def) => (def, None),
            RawDecl::AliasOf(_) => {
                let (target_name, def) =
                    registry
                        .commands
                        .resolve(&raw.name)
                        .ok_or_else(|| BuildError::UnknownAliasTarget {
                            category: "command",
                            name: raw.name.clone(),
                            target: raw.name.clone(),
                        })?;
                (def, Some(target_name.to_string()))
            }
        };

        let mut command = build_command(&raw.name, def, alias_of, tables, model)?;
        if let Some((owner, skip)) = assignment_target(&raw.name, def, tables, model) {
            command.skip_params = skip;
            command.object_scope = object_scope_of(model, owner);
            assignments.push((owner, model.commands.len()));
        }
        model.commands.push(command);
    }

    for (owner, command_index) in assignments {
        if let OutBody::Definition(body) = &mut model.handles.get_mut(owner).body {
            body.commands.push(command_index);
        }
    }
    Ok(())
}

// ── Per-command resolution ───────────────────────────────────────────────

fn build_command(
    name: &str,
    def: &CommandDef,
    alias_of: Option<String>,
    tables: &NameTables,
    model: &OutputModel,
) -> Result<OutCommand> {
    let return_type = naming::csharp_type(&def.return_type, def.return_pointer_depth).map_err(
        |source| BuildError::Type {
            entity: name.to_string(),
            source,
        },
    )?;

    let mut params = Vec::new();
    for raw_param in &def.params {
        let cs_type = naming::csharp_type(&raw_param.type_name, raw_param.pointer_depth).map_err(
            |source| BuildError::Type {
                entity: name.to_string(),
                source,
            },
        )?;
        params.push(OutParam {
            name: raw_param.name.clone(),
            raw_name: raw_param.name.clone(),
            cs_type,
            is_const: raw_param.is_const,
            len: raw_param.len.clone(),
            optional: raw_param.optional,
        });
    }

    let scope = command_scope(def, tables, model);
    let alternate = synthesize_alternate(&params, &def.params, tables);

    Ok(OutCommand {
        raw_name: name.to_string(),
        return_type,
        params,
        alternate,
        scope,
        object_scope: ObjectScope::Global,
        provenance: def
            .provenance
            .clone()
            .unwrap_or(CommandProvenance::Baseline),
        alias_of,
        skip_params: 0,
    })
}

// ── Scope inference ──────────────────────────────────────────────────────

/// Three-valued loading scope, inferred from the first parameter's
/// handle ancestry.
fn command_scope(def: &CommandDef, tables: &NameTables, model: &OutputModel) -> CommandScope {
    let Some(first) = def.params.first() else {
        return CommandScope::Global;
    };
    let Some(handle) = handle_id(model, tables, &first.type_name) else {
        return CommandScope::Global;
    };
    if descends_from(model, handle, DEVICE_HANDLE) {
        CommandScope::Device
    } else {
        CommandScope::Instance
    }
}

/// Resolve a parameter type to a defining handle index.
fn handle_id(model: &OutputModel, tables: &NameTables, type_name: &str) -> Option<usize> {
    if !tables.is_handle(type_name) {
        return None;
    }
    model
        .handles
        .id_of(type_name)
        .map(|id| model.handles.resolve_id(id))
}

/// Does `handle` equal or transitively descend from the named handle?
fn descends_from(model: &OutputModel, handle: usize, ancestor_name: &str) -> bool {
    let mut current = Some(handle);
    while let Some(id) = current {
        let entry = model.handles.get(id);
        if entry.name == ancestor_name {
            return true;
        }
        current = match &entry.body {
            OutBody::Definition(body) => body.parent,
            OutBody::AliasOf(target) => Some(*target),
        };
    }
    false
}

/// Nearest well-known tier on the handle's ancestry chain.
fn object_scope_of(model: &OutputModel, handle: usize) -> ObjectScope {
    let mut current = Some(handle);
    while let Some(id) = current {
        let entry = model.handles.get(id);
        match entry.name.as_str() {
            "VkInstance" => return ObjectScope::Instance,
            "VkPhysicalDevice" => return ObjectScope::PhysicalDevice,
            "VkDevice" => return ObjectScope::Device,
            "VkQueue" => return ObjectScope::Queue,
            "VkCommandBuffer" => return ObjectScope::CommandBuffer,
            _ => {}
        }
        current = match &entry.body {
            OutBody::Definition(body) => body.parent,
            OutBody::AliasOf(target) => Some(*target),
        };
    }
    ObjectScope::Global
}

// ── Command → handle assignment ──────────────────────────────────────────

/// Pick the handle that owns the command; returns the owning handle's
/// index and the number of leading handle parameters the handle's method
/// elides.
fn assignment_target(
    name: &str,
    def: &CommandDef,
    tables: &NameTables,
    model: &OutputModel,
) -> Option<(usize, usize)> {
    let first = def
        .params
        .first()
        .and_then(|p| handle_id(model, tables, &p.type_name));

    // Global commands all live on the top-level instance-capable handle.
    let Some(first) = first else {
        let instance = model.handles.id_of(INSTANCE_HANDLE)?;
        return Some((model.handles.resolve_id(instance), 0));
    };

    // Recorded commands belong to the command buffer.
    if name.starts_with(RECORDED_COMMAND_PREFIX) {
        if let Some(buffer) = model.handles.id_of(COMMAND_BUFFER_HANDLE) {
            return Some((model.handles.resolve_id(buffer), 1));
        }
    }

    // A `(parent, handle, …)` shape: the second parameter is a handle
    // whose declared parent is the first parameter's handle type; the
    // command is a member of the second parameter's type and both leading
    // parameters are elided from the method signature.
    if !FIRST_PARAM_OWNERS.contains(&name) {
        if let Some(second) = def
            .params
            .get(1)
            .and_then(|p| handle_id(model, tables, &p.type_name))
        {
            if parent_of(model, second) == Some(first) {
                return Some((second, 2));
            }
        }
    }

    Some((first, 1))
}

fn parent_of(model: &OutputModel, handle: usize) -> Option<usize> {
    match &model.handles.get(handle).body {
        OutBody::Definition(body) => body.parent,
        OutBody::AliasOf(target) => parent_of(model, model.handles.resolve_id(*target)),
    }
}

// ── Alternate parameter-set synthesis ────────────────────────────────────

/// Synthesize the safer span/output-parameter set.
///
/// Produced only when at least one raw parameter is a single-level
/// pointer to a non-opaque, non-string type; otherwise only the raw
/// pointer-based signature exists.
fn synthesize_alternate(
    params: &[OutParam],
    raw_params: &[RawParam],
    tables: &NameTables,
) -> Option<Vec<AltParam>> {
    let qualifies = raw_params
        .iter()
        .any(|raw| is_safe_pointer(raw, tables) && raw.type_name != "char");
    if !qualifies {
        return None;
    }

    // Count parameters consumed by a span pairing are dropped from the
    // alternate set.
    let consumed_counts: Vec<&str> = raw_params
        .iter()
        .filter(|p| is_safe_pointer(p, tables))
        .filter_map(|p| p.len.as_deref())
        .filter(|len| raw_params.iter().any(|other| other.name == *len))
        .collect();

    let mut alternate = Vec::new();
    for (param, raw) in params.iter().zip(raw_params) {
        if consumed_counts.contains(&raw.name.as_str()) {
            continue;
        }
        alternate.push(alternate_param(param, raw, params, tables));
    }
    Some(alternate)
}

fn alternate_param(
    param: &OutParam,
    raw: &RawParam,
    params: &[OutParam],
    tables: &NameTables,
) -> AltParam {
    let element = element_type_of(param).to_string();

    if raw.pointer_depth == 2 && raw.type_name == "char" {
        return AltParam {
            name: collection_name(&raw.name),
            raw_name: raw.name.clone(),
            cs_type: "NativeStringList".to_string(),
            kind: AltParamKind::NativeStringList,
        };
    }
    if raw.pointer_depth == 1 && raw.type_name == "char" {
        return AltParam {
            name: collection_name(&raw.name),
            raw_name: raw.name.clone(),
            cs_type: "NativeString".to_string(),
            kind: AltParamKind::NativeString,
        };
    }
    if is_safe_pointer(raw, tables) {
        let count = raw.len.as_deref().and_then(|len| {
            params
                .iter()
                .find(|other| other.raw_name == len)
                .map(|other| (len.to_string(), other.cs_type.clone()))
        });
        if let Some((count_name, count_type)) = count {
            let cs_type = if raw.is_const {
                format!("ReadOnlySpan<{element}>")
            } else {
                format!("Span<{element}>")
            };
            return AltParam {
                name: collection_name(&raw.name),
                raw_name: raw.name.clone(),
                cs_type,
                kind: AltParamKind::Span {
                    element_type: element,
                    count_name,
                    count_type,
                },
            };
        }
        let kind = if raw.is_const {
            AltParamKind::In
        } else {
            AltParamKind::Out
        };
        return AltParam {
            name: collection_name(&raw.name),
            raw_name: raw.name.clone(),
            cs_type: element,
            kind,
        };
    }

    AltParam {
        name: param.name.clone(),
        raw_name: raw.name.clone(),
        cs_type: param.cs_type.clone(),
        kind: AltParamKind::Passthrough,
    }
}

/// A single-level pointer to a non-opaque type (not a handle, not
/// `void`).
fn is_safe_pointer(raw: &RawParam, tables: &NameTables) -> bool {
    raw.pointer_depth == 1 && raw.type_name != "void" && !tables.is_handle(&raw.type_name)
}

/// The pointee's output type, for span/in/out rendering.
fn element_type_of(param: &OutParam) -> &str {
    param.cs_type.trim_end_matches('*')
}

/// Bare collection name for a converted pointer parameter:
/// `pCreateInfos` → `createInfos`.
fn collection_name(raw: &str) -> String {
    let pascal = naming::field_name(raw);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
