//! Error types for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// No `--input` flag and nothing piped on stdin.
    #[error("Input is required when no JSON or file path is piped")]
    MissingInput,

    /// Input was neither inline JSON nor a readable file.
    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        /// Path the input string was interpreted as.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input contents are not a valid JSON Schema document.
    #[error("Invalid JSON Schema input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Error during schema compilation.
    #[error(transparent)]
    Compile(#[from] json_schema_to_valibot::Error),

    /// Failed to create an output directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
