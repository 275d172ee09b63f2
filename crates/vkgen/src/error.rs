//! Pipeline error type.

use thiserror::Error;
use vkgen_emit::EmitError;
use vkgen_model::BuildError;
use vkgen_types::LoadError;

/// First failure anywhere in the pipeline; the rendering carries every
/// diagnostic detail, including the offending registry entity's name.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("registry load failed: {0}")]
    Load(#[from] LoadError),
    #[error("output model build failed: {0}")]
    Build(#[from] BuildError),
    #[error("source emission failed: {0}")]
    Emit(#[from] EmitError),
}

/// Pipeline result type alias.
pub type Result<T> = std::result::Result<T, GenerateError>;
