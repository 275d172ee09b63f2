//! vkgen output model builder.
//!
//! Consumes the Raw Spec Model and produces a fully resolved Output
//! Model: alias chains collapse to references against the output tables,
//! numeric values are computed (bit positions, extension-number
//! arithmetic), commands are assigned to the handle type that owns them,
//! and every type is partitioned into a vendor (or core) bucket.
//!
//! Processing order is load-bearing: bitmasks → handles (plus a parent
//! link sub-pass) → enums → constants → function pointers → structs →
//! commands → command-to-handle assignment → vendor partitioning.

mod builder;
mod commands;
mod error;
mod output;
mod values;
mod vendors;

pub use builder::build;
pub use error::{BuildError, Result};
pub use output::{
    AltParam, AltParamKind, CommandScope, EnumBody, FuncPointerBody, HandleBody, ObjectScope,
    OutArray, OutBody, OutCommand, OutConstant, OutEntry, OutEnumValue, OutField, OutParam,
    OutTable, OutputModel, StructBody, Vendor, CORE_VENDOR,
};
