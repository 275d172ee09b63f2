//! vkgen name/type resolver.
//!
//! Pure, context-free conversions from raw registry identifiers to output
//! identifiers: enum-value compaction, field-name conversion, C# type
//! substitution, vendor-tag detection. The only state is [`NameTables`],
//! built once from the loaded registry and passed by reference, so every
//! routine here is reentrant and testable in isolation.

mod error;
mod names;
mod tables;
mod types;

pub use error::{ResolveError, Result};
pub use names::{field_name, title_case_words};
pub use tables::NameTables;
pub use types::{csharp_type, fixed_buffer_eligible, is_csharp_scalar};
