//! Shared types for the vkgen spec compiler.
//!
//! This crate defines the Raw Spec Model: one plain-data record per
//! registry category, each optionally an alias of a previously declared
//! entity. The load-time error type shared by the registry loader and
//! the output model builder lives here too.

mod error;
pub mod raw;

pub use error::{LoadError, Result};
pub use raw::{
    BitmaskDef, CommandDef, CommandProvenance, ConstantDef, EnumDef, FuncPointerDef, HandleDef,
    Raw, RawArraySize, RawDecl, RawEnumValue, RawExtension, RawMember, RawParam, RawRegistry,
    RawTable, RawValue, StructDef,
};
