//! Emission error types.

use thiserror::Error;

/// Errors raised while emitting generated source.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The sink failed to take a finished file.
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Emission result type alias.
pub type Result<T> = std::result::Result<T, EmitError>;
