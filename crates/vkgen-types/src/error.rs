//! Load-time error types.
//!
//! Every failure is fatal-and-immediate: the first error anywhere aborts
//! the load, and the diagnostic always names the offending registry entity.

use thiserror::Error;

/// Errors raised while loading the registry into the Raw Spec Model.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The registry document itself could not be parsed.
    #[error("malformed registry XML: {0}")]
    Xml(String),

    /// A required attribute is absent from a registry element.
    #[error("`{element}` element for `{entity}` is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        entity: String,
        attribute: &'static str,
    },

    /// A required child element is absent.
    #[error("`{element}` element for `{entity}` is missing required child `{child}`")]
    MissingChild {
        element: &'static str,
        entity: String,
        child: &'static str,
    },

    /// An alias declaration names a target that has not been declared yet.
    #[error("{category} alias `{name}` targets unknown {category} `{target}`")]
    UnknownAliasTarget {
        category: &'static str,
        name: String,
        target: String,
    },

    /// A value container names an enum or bitmask that was never declared.
    #[error("values container `{0}` does not match any declared enum or bitmask")]
    UnknownValueContainer(String),

    /// A numeric literal could not be parsed.
    #[error("entity `{entity}` carries malformed numeric literal `{literal}`")]
    MalformedLiteral { entity: String, literal: String },

    /// An enabled extension did not declare exactly one spec-version literal.
    #[error("extension `{0}` does not declare a spec version")]
    MissingSpecVersion(String),

    /// An enabled extension declared two differing spec-version literals.
    #[error("extension `{0}` declares conflicting spec versions")]
    ConflictingSpecVersion(String),

    /// A promoted value inside a core feature block carries no extension number.
    #[error("promoted value `{0}` in a feature block carries no extension number")]
    MissingExtensionNumber(String),

    /// A `require` block references an entity the loader never saw.
    #[error("`require` block references unknown {category} `{name}`")]
    UnknownRequireTarget { category: &'static str, name: String },
}

/// Result type used throughout the loader.
pub type Result<T> = std::result::Result<T, LoadError>;
