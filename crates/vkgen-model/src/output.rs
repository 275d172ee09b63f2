//! The Output Model.
//!
//! Output entities live in per-category tables: an insertion-ordered
//! arena addressed by index, with a name side-index. An aliased entity
//! stores only its own name plus the index of its target; derived data
//! (values, fields, parameters) is read through [`OutTable::resolve`],
//! never duplicated. Targets are always inserted before the aliases that
//! reference them, so chains are acyclic.

use std::collections::HashMap;

use vkgen_types::{CommandProvenance, RawExtension};

/// Name of the synthetic vendor owning untagged entities.
pub const CORE_VENDOR: &str = "Core";

// ══════════════════════════════════════════════════════════════════════════════
// Tables
// ══════════════════════════════════════════════════════════════════════════════

/// Body of an output entity: a resolved definition or an alias index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutBody<T> {
    Definition(T),
    AliasOf(usize),
}

/// A named output entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutEntry<T> {
    pub name: String,
    pub body: OutBody<T>,
}

/// Insertion-ordered arena of output entities.
#[derive(Debug, Clone)]
pub struct OutTable<T> {
    entries: Vec<OutEntry<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for OutTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> OutTable<T> {
    pub fn insert_definition(&mut self, name: impl Into<String>, body: T) -> usize {
        self.insert(OutEntry {
            name: name.into(),
            body: OutBody::Definition(body),
        })
    }

    pub fn insert_alias(&mut self, name: impl Into<String>, target: usize) -> usize {
        self.insert(OutEntry {
            name: name.into(),
            body: OutBody::AliasOf(target),
        })
    }

    fn insert(&mut self, entry: OutEntry<T>) -> usize {
        let id = self.entries.len();
        self.index.insert(entry.name.clone(), id);
        self.entries.push(entry);
        id
    }

    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: usize) -> &OutEntry<T> {
        &self.entries[id]
    }

    pub fn get_mut(&mut self, id: usize) -> &mut OutEntry<T> {
        &mut self.entries[id]
    }

    /// Follow the alias chain from `id` to the defining entity's body.
    pub fn resolve(&self, id: usize) -> &T {
        let mut current = &self.entries[id];
        loop {
            match &current.body {
                OutBody::Definition(body) => return body,
                OutBody::AliasOf(target) => current = &self.entries[*target],
            }
        }
    }

    /// Index of the ultimate (non-alias) entity behind `id`.
    pub fn resolve_id(&self, id: usize) -> usize {
        let mut id = id;
        loop {
            match &self.entries[id].body {
                OutBody::Definition(_) => return id,
                OutBody::AliasOf(target) => id = *target,
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &OutEntry<T>)> {
        self.entries.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Category bodies
// ══════════════════════════════════════════════════════════════════════════════

/// A resolved enum/bitmask value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutEnumValue {
    pub name: String,
    pub value: i64,
}

/// A resolved enum or bitmask type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumBody {
    pub is_bitmask: bool,
    pub values: Vec<OutEnumValue>,
}

/// A resolved opaque handle type. Commands index into
/// [`OutputModel::commands`]; the parent link is filled by a dedicated
/// sub-pass after all handles exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandleBody {
    pub dispatchable: bool,
    pub raw_parent: Option<String>,
    pub parent: Option<usize>,
    pub commands: Vec<usize>,
}

/// A fixed-size array on a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutArray {
    pub length: u64,
    /// Eligible for an inline C# `fixed` buffer; otherwise the emitter
    /// flattens the array into discrete numbered fields.
    pub fixed_buffer: bool,
}

/// A resolved struct/union field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutField {
    pub name: String,
    pub raw_name: String,
    pub cs_type: String,
    pub array: Option<OutArray>,
    /// The structure type-tag field.
    pub is_tag: bool,
    /// The extension-chain pointer field.
    pub is_chain: bool,
    /// Output rendering of the tag field's pinned value.
    pub tag_value: Option<String>,
}

/// A resolved struct or union.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructBody {
    pub is_union: bool,
    pub fields: Vec<OutField>,
}

impl StructBody {
    /// A tagged struct carries the sentinel type-tag field with a pinned
    /// value; those get a convenience constructor pre-filling the tag.
    pub fn is_tagged(&self) -> bool {
        self.fields.iter().any(|f| f.is_tag && f.tag_value.is_some())
    }
}

/// A resolved function-pointer type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuncPointerBody {
    pub return_type: String,
    pub args: Vec<OutParam>,
}

/// A resolved API constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutConstant {
    pub name: String,
    pub raw_name: String,
    pub cs_type: String,
    pub value: String,
    /// Integer value when the constant is usable as an array length.
    pub integer: Option<u64>,
}

// ══════════════════════════════════════════════════════════════════════════════
// Commands
// ══════════════════════════════════════════════════════════════════════════════

/// Where a command's function pointer is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// No owning object handle; loaded once from the runtime library.
    Global,
    /// Loaded per instance-capable handle.
    Instance,
    /// Loaded per logical-device handle.
    Device,
}

/// Which well-known handle tier a command is a member function of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectScope {
    Global,
    Instance,
    PhysicalDevice,
    Device,
    Queue,
    CommandBuffer,
}

/// A resolved command parameter (primary, pointer-based set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutParam {
    pub name: String,
    pub raw_name: String,
    pub cs_type: String,
    pub is_const: bool,
    pub len: Option<String>,
    pub optional: bool,
}

/// How an alternate-set parameter was derived from the primary set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AltParamKind {
    /// Unchanged from the primary set.
    Passthrough,
    /// A pointer/count pair collapsed into a single span. The consumed
    /// count parameter's raw name and output type are kept so the call
    /// site can re-derive the count from the span's length.
    Span {
        element_type: String,
        count_name: String,
        count_type: String,
    },
    /// A lone const single-object pointer; `cs_type` is the pointee.
    In,
    /// A lone non-const single-object pointer; `cs_type` is the pointee.
    Out,
    /// A byte pointer surfaced as an owned native string.
    NativeString,
    /// A byte pointer-pointer surfaced as an owned native string list.
    NativeStringList,
}

/// A parameter in the synthesized safe set. `raw_name` ties it back to
/// the primary-set parameter it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltParam {
    pub name: String,
    pub raw_name: String,
    pub cs_type: String,
    pub kind: AltParamKind,
}

/// A fully resolved command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutCommand {
    /// Registry name; also the symbol name loaded at runtime.
    pub raw_name: String,
    pub return_type: String,
    pub params: Vec<OutParam>,
    /// The safer span/output-parameter set, when any parameter qualified.
    pub alternate: Option<Vec<AltParam>>,
    pub scope: CommandScope,
    pub object_scope: ObjectScope,
    pub provenance: CommandProvenance,
    /// Raw name of the alias target, for table forwarding.
    pub alias_of: Option<String>,
    /// Leading handle-identifying parameters elided from method
    /// signatures and re-inserted at the call site.
    pub skip_params: usize,
}

// ══════════════════════════════════════════════════════════════════════════════
// Vendors and the assembled model
// ══════════════════════════════════════════════════════════════════════════════

/// A vendor bucket: indices into the per-category tables.
#[derive(Debug, Clone, Default)]
pub struct Vendor {
    pub name: String,
    pub bitmasks: Vec<usize>,
    pub enums: Vec<usize>,
    pub handles: Vec<usize>,
    pub structs: Vec<usize>,
    pub func_pointers: Vec<usize>,
}

impl Vendor {
    pub fn entity_count(&self) -> usize {
        self.bitmasks.len()
            + self.enums.len()
            + self.handles.len()
            + self.structs.len()
            + self.func_pointers.len()
    }
}

/// The fully resolved Output Model.
#[derive(Debug, Clone, Default)]
pub struct OutputModel {
    pub bitmasks: OutTable<EnumBody>,
    pub enums: OutTable<EnumBody>,
    pub handles: OutTable<HandleBody>,
    pub structs: OutTable<StructBody>,
    pub func_pointers: OutTable<FuncPointerBody>,
    pub constants: Vec<OutConstant>,
    pub commands: Vec<OutCommand>,
    /// Vendor buckets, core first, empty vendors pruned.
    pub vendors: Vec<Vendor>,
    pub extensions: Vec<RawExtension>,
}
