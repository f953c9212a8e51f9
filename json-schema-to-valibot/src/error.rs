//! Error types for schema compilation.

use thiserror::Error;

/// Result type alias for compilation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while compiling a schema into Valibot source.
///
/// All failures are synchronous and abort the whole compilation; the core
/// never catches its own errors and produces no partial output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A type export was requested without the options it depends on.
    #[error("Option `type` requires `name` to be set and `module` to be `esm`")]
    TypeRequiresNamedEsm,

    /// A `type` tag outside the recognized set.
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// The offending tag value.
        type_name: String,
    },

    /// An `anyOf` keyword with no branches.
    #[error("anyOf must be a non-empty array")]
    EmptyAnyOf,
}
