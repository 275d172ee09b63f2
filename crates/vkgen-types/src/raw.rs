//! The Raw Spec Model.
//!
//! One record per registry category, populated by the loader in a fixed
//! multi-pass order. Every category supports two declaration shapes:
//!
//! - a *definition* carrying the full fields for the category, or
//! - an *alias* carrying only the target's name.
//!
//! Aliases are stored unresolved: a raw alias remembers the target name and
//! is dereferenced when derived data is requested, never at declaration
//! time. The loader guarantees the target already exists in the table when
//! the alias is declared, so chains are acyclic by construction.
//!
//! Raw entities are immutable after their owning pass completes, with one
//! exception: the feature/extension pass appends promoted values to enum
//! and bitmask containers declared earlier.

use std::collections::HashMap;

// ══════════════════════════════════════════════════════════════════════════════
// Declarations and tables
// ══════════════════════════════════════════════════════════════════════════════

/// A raw declaration body: either a full definition or an alias-by-name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDecl<T> {
    Definition(T),
    AliasOf(String),
}

/// A named raw entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw<T> {
    pub name: String,
    pub decl: RawDecl<T>,
}

impl<T> Raw<T> {
    /// Build a definition entry.
    pub fn definition(name: impl Into<String>, def: T) -> Self {
        Self {
            name: name.into(),
            decl: RawDecl::Definition(def),
        }
    }

    /// Build an alias entry.
    pub fn alias(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decl: RawDecl::AliasOf(target.into()),
        }
    }

    /// Returns `true` if this entry is an alias.
    pub fn is_alias(&self) -> bool {
        matches!(self.decl, RawDecl::AliasOf(_))
    }
}

/// An insertion-ordered arena of raw entities addressed by name.
///
/// Entities keep their registry declaration order (load-bearing for
/// alias resolution and for deterministic output), while the side index
/// provides O(1) lookup by name.
#[derive(Debug, Clone)]
pub struct RawTable<T> {
    entries: Vec<Raw<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for RawTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> RawTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, replacing nothing: a re-declared name keeps the
    /// first entry (registry declaration order wins ties).
    pub fn insert(&mut self, entry: Raw<T>) {
        if self.index.contains_key(&entry.name) {
            return;
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Look up an entity by name.
    pub fn get(&self, name: &str) -> Option<&Raw<T>> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Mutable lookup, used by the value-population and feature passes.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Raw<T>> {
        let i = *self.index.get(name)?;
        Some(&mut self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Follow the alias chain from `name` to the ultimate definition.
    ///
    /// Returns the defining entity's name together with its definition
    /// body, or `None` if `name` (or any link of the chain) is unknown.
    /// Chains are acyclic because the loader rejects forward references.
    pub fn resolve(&self, name: &str) -> Option<(&str, &T)> {
        let mut current = self.get(name)?;
        loop {
            match &current.decl {
                RawDecl::Definition(def) => return Some((current.name.as_str(), def)),
                RawDecl::AliasOf(target) => current = self.get(target)?,
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Raw<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Enum and bitmask values
// ══════════════════════════════════════════════════════════════════════════════

/// How a raw enum/bitmask value obtains its integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A direct literal, decimal or `0x`-hexadecimal, possibly negative.
    Literal(String),
    /// A bit index; the value is `1 << bitpos`.
    Bitpos(u32),
    /// An alias of another value in the same container.
    Alias(String),
    /// An extension- or feature-promoted value.
    ///
    /// The integer value is `1_000_000_000 + (N − 1) × 1000 + offset`,
    /// negated when `negative` is set. `extension_number` is `None` while
    /// the enclosing context is a core feature block, in which case the
    /// entry must have carried its own extension number attribute (the
    /// loader rejects it otherwise).
    Offset {
        extension_number: Option<i64>,
        offset: i64,
        negative: bool,
    },
}

/// A single value inside an enum or bitmask container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEnumValue {
    pub name: String,
    pub value: RawValue,
}

// ══════════════════════════════════════════════════════════════════════════════
// Category definition bodies
// ══════════════════════════════════════════════════════════════════════════════

/// A bitmask type: a flags typedef whose values arrive from a separately
/// named values container (the `values_name`), populated in pass 2 and
/// extended by the feature/extension pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitmaskDef {
    /// Name of the values container feeding this bitmask, when distinct
    /// from the bitmask's own name.
    pub values_name: Option<String>,
    pub values: Vec<RawEnumValue>,
}

/// An enum type. Values are attached in pass 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDef {
    pub values: Vec<RawEnumValue>,
}

/// An opaque handle type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleDef {
    /// Raw name of the parent handle type, if declared.
    pub parent: Option<String>,
    /// Dispatchable handles are pointer-sized; non-dispatchable ones are
    /// 64-bit regardless of platform.
    pub dispatchable: bool,
}

/// A struct or union member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMember {
    pub name: String,
    pub type_name: String,
    pub pointer_depth: u32,
    pub is_const: bool,
    pub array_size: Option<RawArraySize>,
    /// Pinned value for type-tag members (`values` attribute).
    pub tag_value: Option<String>,
}

/// A fixed array length on a struct member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawArraySize {
    Literal(u64),
    /// A named API constant, resolved against the constants table later.
    NamedConstant(String),
}

/// A struct or union type. Members are attached in pass 2; alias structs
/// inherit their target's members and are skipped by that pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructDef {
    pub is_union: bool,
    pub members: Vec<RawMember>,
}

/// A function-pointer typedef. Arguments are attached in pass 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncPointerDef {
    pub return_type: String,
    pub return_pointer_depth: u32,
    pub args: Vec<RawParam>,
}

/// A typed API constant from the flat constants container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDef {
    pub value: String,
}

// ══════════════════════════════════════════════════════════════════════════════
// Commands
// ══════════════════════════════════════════════════════════════════════════════

/// A command parameter as declared in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParam {
    pub name: String,
    pub type_name: String,
    pub pointer_depth: u32,
    pub is_const: bool,
    /// Back-reference to the parameter holding this parameter's length.
    pub len: Option<String>,
    pub optional: bool,
}

/// Which delivery tier provides a command, stamped by the feature and
/// extension passes. Drives the function-table loader emission: baseline
/// commands load unconditionally, versioned commands are gated on the
/// instance/device version, extension commands load best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandProvenance {
    Baseline,
    FeatureLevel { major: u32, minor: u32 },
    Extension(String),
}

/// A command definition: prototype plus parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDef {
    pub return_type: String,
    pub return_pointer_depth: u32,
    pub params: Vec<RawParam>,
    /// `None` until the feature/extension pass stamps the command. The
    /// baseline 1.0 feature block is skipped by that pass, so a command
    /// that stays unstamped is baseline.
    pub provenance: Option<CommandProvenance>,
}

// ══════════════════════════════════════════════════════════════════════════════
// Extensions
// ══════════════════════════════════════════════════════════════════════════════

/// An enabled extension, recorded after its require blocks are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExtension {
    pub name: String,
    pub number: i64,
    /// Value of the extension's single spec-version literal.
    pub spec_version: u32,
}

// ══════════════════════════════════════════════════════════════════════════════
// The assembled model
// ══════════════════════════════════════════════════════════════════════════════

/// The complete Raw Spec Model produced by the registry loader.
#[derive(Debug, Clone, Default)]
pub struct RawRegistry {
    /// Known vendor/author tags, in declaration order.
    pub vendor_tags: Vec<String>,
    pub bitmasks: RawTable<BitmaskDef>,
    pub handles: RawTable<HandleDef>,
    pub enums: RawTable<EnumDef>,
    pub structs: RawTable<StructDef>,
    pub func_pointers: RawTable<FuncPointerDef>,
    pub constants: RawTable<ConstantDef>,
    pub commands: RawTable<CommandDef>,
    pub extensions: Vec<RawExtension>,
}

impl RawRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}
