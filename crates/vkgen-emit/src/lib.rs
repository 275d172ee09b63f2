//! vkgen code emitter.
//!
//! Projects the Output Model into generated C# source: one file per
//! (category, vendor) pair plus the shared constants and function-table
//! files. Output flows through an [`EmitSink`], so the disk never has to
//! be involved in tests; a failure while formatting or writing any file
//! aborts the whole run and leaves earlier files wherever the sink put
//! them.

mod commands;
mod constants;
mod emit;
mod enums;
mod error;
mod files;
mod handles;
mod sink;
mod structs;
mod writer;

pub use emit::emit;
pub use error::{EmitError, Result};
pub use sink::{EmitSink, MemorySink};
pub use writer::CodeWriter;
