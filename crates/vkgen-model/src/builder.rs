//! The Output Model builder pass.

use std::collections::HashSet;

use vkgen_naming::{self as naming, NameTables};
use vkgen_types::{RawArraySize, RawDecl, RawRegistry};

use crate::commands::build_commands;
use crate::error::{BuildError, Result};
use crate::output::{
    EnumBody, FuncPointerBody, HandleBody, OutArray, OutBody, OutConstant, OutField, OutParam,
    OutputModel, StructBody,
};
use crate::values::{compute_values, constant_literal};
use crate::vendors::partition;

/// Build the Output Model from a loaded registry.
///
/// `tables` must have been constructed from the same registry (vendor
/// tags and handle names feed name compaction and command assignment).
pub fn build(registry: &RawRegistry, tables: &NameTables) -> Result<OutputModel> {
    let mut model = OutputModel {
        extensions: registry.extensions.clone(),
        ..OutputModel::default()
    };

    build_bitmasks(registry, tables, &mut model)?;
    build_handles(registry, &mut model)?;
    link_handle_parents(&mut model)?;
    build_enums(registry, tables, &mut model)?;
    build_constants(registry, &mut model)?;
    build_func_pointers(registry, &mut model)?;
    build_structs(registry, tables, &mut model)?;
    build_commands(registry, tables, &mut model)?;
    partition(tables, &registry.vendor_tags, &mut model);
    Ok(model)
}

// ── Bitmasks ─────────────────────────────────────────────────────────────

fn build_bitmasks(
    registry: &RawRegistry,
    tables: &NameTables,
    model: &mut OutputModel,
) -> Result<()> {
    for raw in registry.bitmasks.iter() {
        match &raw.decl {
            RawDecl::Definition(def) => {
                let values = compute_values(&raw.name, &def.values, |value_name| {
                    tables.enum_value_name(&raw.name, value_name)
                })?;
                model.bitmasks.insert_definition(
                    &raw.name,
                    EnumBody {
                        is_bitmask: true,
                        values,
                    },
                );
            }
            RawDecl::AliasOf(target) => {
                let target_id = model.bitmasks.id_of(target).ok_or_else(|| {
                    BuildError::UnknownAliasTarget {
                        category: "bitmask",
                        name: raw.name.clone(),
                        target: target.clone(),
                    }
                })?;
                model.bitmasks.insert_alias(&raw.name, target_id);
            }
        }
    }
    Ok(())
}

// ── Handles ──────────────────────────────────────────────────────────────

fn build_handles(registry: &RawRegistry, model: &mut OutputModel) -> Result<()> {
    for raw in registry.handles.iter() {
        match &raw.decl {
            RawDecl::Definition(def) => {
                model.handles.insert_definition(
                    &raw.name,
                    HandleBody {
                        dispatchable: def.dispatchable,
                        raw_parent: def.parent.clone(),
                        parent: None,
                        commands: Vec::new(),
                    },
                );
            }
            RawDecl::AliasOf(target) => {
                let target_id = model.handles.id_of(target).ok_or_else(|| {
                    BuildError::UnknownAliasTarget {
                        category: "handle",
                        name: raw.name.clone(),
                        target: target.clone(),
                    }
                })?;
                model.handles.insert_alias(&raw.name, target_id);
            }
        }
    }
    Ok(())
}

/// Parent handles may be declared after their children, so links are
/// resolved in a separate pass once every handle exists.
fn link_handle_parents(model: &mut OutputModel) -> Result<()> {
    let mut links: Vec<(usize, usize)> = Vec::new();
    for (id, entry) in model.handles.iter() {
        if let OutBody::Definition(body) = &entry.body {
            if let Some(parent_name) = &body.raw_parent {
                let parent_id = model
                    .handles
                    .id_of(parent_name)
                    .map(|p| model.handles.resolve_id(p))
                    .ok_or_else(|| BuildError::UnknownParent {
                        handle: entry.name.clone(),
                        parent: parent_name.clone(),
                    })?;
                links.push((id, parent_id));
            }
        }
    }
    for (id, parent_id) in links {
        if let OutBody::Definition(body) = &mut model.handles.get_mut(id).body {
            body.parent = Some(parent_id);
        }
    }
    Ok(())
}

// ── Enums ────────────────────────────────────────────────────────────────

fn build_enums(registry: &RawRegistry, tables: &NameTables, model: &mut OutputModel) -> Result<()> {
    // Value containers already absorbed by a bitmask are not standalone
    // enum types.
    let mut absorbed: HashSet<&str> = HashSet::new();
    for raw in registry.bitmasks.iter() {
        if let RawDecl::Definition(def) = &raw.decl {
            if let Some(values_name) = &def.values_name {
                absorbed.insert(values_name.as_str());
            }
        }
    }

    for raw in registry.enums.iter() {
        if absorbed.contains(raw.name.as_str()) {
            continue;
        }
        match &raw.decl {
            RawDecl::Definition(def) => {
                let values = compute_values(&raw.name, &def.values, |value_name| {
                    tables.enum_value_name(&raw.name, value_name)
                })?;
                model.enums.insert_definition(
                    &raw.name,
                    EnumBody {
                        is_bitmask: false,
                        values,
                    },
                );
            }
            RawDecl::AliasOf(target) => {
                if absorbed.contains(target.as_str()) {
                    continue;
                }
                let target_id = model.enums.id_of(target).ok_or_else(|| {
                    BuildError::UnknownAliasTarget {
                        category: "enum",
                        name: raw.name.clone(),
                        target: target.clone(),
                    }
                })?;
                model.enums.insert_alias(&raw.name, target_id);
            }
        }
    }
    Ok(())
}

// ── Constants ────────────────────────────────────────────────────────────

fn build_constants(registry: &RawRegistry, model: &mut OutputModel) -> Result<()> {
    for raw in registry.constants.iter() {
        let (_, def) = registry
            .constants
            .resolve(&raw.name)
            .ok_or_else(|| BuildError::UnknownAliasTarget {
                category: "constant",
                name: raw.name.clone(),
                target: raw.name.clone(),
            })?;
        let (cs_type, value, integer) = constant_literal(&raw.name, &def.value)?;
        let stem = raw.name.strip_prefix("VK_").unwrap_or(&raw.name);
        model.constants.push(OutConstant {
            name: naming::title_case_words(stem.split('_')),
            raw_name: raw.name.clone(),
            cs_type,
            value,
            integer,
        });
    }
    Ok(())
}

// ── Function pointers ────────────────────────────────────────────────────

fn build_func_pointers(registry: &RawRegistry, model: &mut OutputModel) -> Result<()> {
    for raw in registry.func_pointers.iter() {
        match &raw.decl {
            RawDecl::Definition(def) => {
                let return_type = naming::csharp_type(&def.return_type, def.return_pointer_depth)
                    .map_err(|source| BuildError::Type {
                    entity: raw.name.clone(),
                    source,
                })?;
                let mut args = Vec::new();
                for arg in &def.args {
                    let cs_type = naming::csharp_type(&arg.type_name, arg.pointer_depth).map_err(
                        |source| BuildError::Type {
                            entity: raw.name.clone(),
                            source,
                        },
                    )?;
                    args.push(OutParam {
                        name: arg.name.clone(),
                        raw_name: arg.name.clone(),
                        cs_type,
                        is_const: arg.is_const,
                        len: None,
                        optional: false,
                    });
                }
                model
                    .func_pointers
                    .insert_definition(&raw.name, FuncPointerBody { return_type, args });
            }
            RawDecl::AliasOf(target) => {
                let target_id = model.func_pointers.id_of(target).ok_or_else(|| {
                    BuildError::UnknownAliasTarget {
                        category: "funcpointer",
                        name: raw.name.clone(),
                        target: target.clone(),
                    }
                })?;
                model.func_pointers.insert_alias(&raw.name, target_id);
            }
        }
    }
    Ok(())
}

// ── Structs ──────────────────────────────────────────────────────────────

fn build_structs(
    registry: &RawRegistry,
    tables: &NameTables,
    model: &mut OutputModel,
) -> Result<()> {
    for raw in registry.structs.iter() {
        match &raw.decl {
            RawDecl::Definition(def) => {
                let mut fields = Vec::new();
                for member in &def.members {
                    let cs_type = naming::csharp_type(&member.type_name, member.pointer_depth)
                        .map_err(|source| BuildError::Type {
                            entity: raw.name.clone(),
                            source,
                        })?;
                    let array = match &member.array_size {
                        None => None,
                        Some(RawArraySize::Literal(length)) => Some(*length),
                        Some(RawArraySize::NamedConstant(constant)) => Some(
                            model
                                .constants
                                .iter()
                                .find(|c| c.raw_name == *constant)
                                .and_then(|c| c.integer)
                                .ok_or_else(|| BuildError::UnknownArrayLength {
                                    owner: raw.name.clone(),
                                    constant: constant.clone(),
                                })?,
                        ),
                    }
                    .map(|length| OutArray {
                        length,
                        fixed_buffer: naming::fixed_buffer_eligible(&cs_type),
                    });

                    let is_tag = member.name == "sType";
                    let tag_value = member.tag_value.as_ref().map(|tag| {
                        format!(
                            "{}.{}",
                            member.type_name,
                            tables.enum_value_name(&member.type_name, tag)
                        )
                    });
                    fields.push(OutField {
                        name: naming::field_name(&member.name),
                        raw_name: member.name.clone(),
                        cs_type,
                        array,
                        is_tag,
                        is_chain: member.name == "pNext",
                        tag_value,
                    });
                }
                model.structs.insert_definition(
                    &raw.name,
                    StructBody {
                        is_union: def.is_union,
                        fields,
                    },
                );
            }
            RawDecl::AliasOf(target) => {
                let target_id = model.structs.id_of(target).ok_or_else(|| {
                    BuildError::UnknownAliasTarget {
                        category: "struct",
                        name: raw.name.clone(),
                        target: target.clone(),
                    }
                })?;
                model.structs.insert_alias(&raw.name, target_id);
            }
        }
    }
    Ok(())
}
