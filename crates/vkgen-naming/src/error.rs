//! Resolver error types.

use thiserror::Error;

/// Errors raised while resolving registry identifiers.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A registry type name has no known output equivalent.
    #[error("type `{0}` has no known output mapping")]
    UnknownType(String),
}

/// Resolver result type alias.
pub type Result<T> = std::result::Result<T, ResolveError>;
