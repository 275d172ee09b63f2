//! Build-time error types.

use thiserror::Error;
use vkgen_naming::ResolveError;

/// Errors raised while building the Output Model. The first error aborts
/// the whole build; diagnostics name the offending registry entity.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An alias references a target missing from the output table.
    #[error("{category} alias `{name}` targets unknown {category} `{target}`")]
    UnknownAliasTarget {
        category: &'static str,
        name: String,
        target: String,
    },

    /// Two values in one container share a name but compute differently.
    #[error(
        "container `{container}` declares `{name}` twice with conflicting \
         values {existing} and {conflicting}"
    )]
    ConflictingValue {
        container: String,
        name: String,
        existing: i64,
        conflicting: i64,
    },

    /// A value alias names a value not yet present in its container.
    #[error("container `{container}` aliases unknown value `{target}`")]
    UnknownValueAlias { container: String, target: String },

    /// A handle's declared parent was never declared itself.
    #[error("handle `{handle}` declares unknown parent `{parent}`")]
    UnknownParent { handle: String, parent: String },

    /// A promoted value reached value computation without an extension
    /// number to key the formula.
    #[error("promoted value `{0}` carries no extension number")]
    MissingExtensionNumber(String),

    /// A numeric literal could not be parsed.
    #[error("entity `{entity}` carries malformed numeric literal `{literal}`")]
    MalformedLiteral { entity: String, literal: String },

    /// A bit-position value does not fit the 64-bit value space.
    #[error("value `{name}` declares out-of-range bit position {position}")]
    BitPositionOutOfRange { name: String, position: u32 },

    /// A fixed-array length names a constant that is unknown or not an
    /// integer.
    #[error("struct `{owner}` sizes an array with unusable constant `{constant}`")]
    UnknownArrayLength { owner: String, constant: String },

    /// An API constant's literal has no known output rendering.
    #[error("constant `{name}` carries unsupported literal `{value}`")]
    MalformedConstant { name: String, value: String },

    /// A registry type failed substitution.
    #[error("in `{entity}`: {source}")]
    Type {
        entity: String,
        #[source]
        source: ResolveError,
    },
}

/// Build result type alias.
pub type Result<T> = std::result::Result<T, BuildError>;
