//! # json-schema-to-valibot-cli
//!
//! CLI wrapper around the [`json_schema_to_valibot`] compiler: resolves a
//! JSON Schema from a flag value, a file or piped stdin, runs the compiler
//! once, and writes or prints the generated Valibot source.
//!
//! The library is organized into a few small modules:
//!
//! - [`input`] - input resolution (inline JSON, file path, stdin)
//! - [`writer`] - output file writing
//! - [`error`] - error types and handling
//!
//! [`json_schema_to_valibot`]: json_schema_to_valibot::json_schema_to_valibot

pub mod error;
pub mod input;
pub mod writer;

pub use error::{CliError, CliResult};
pub use input::{parse_or_read_json, read_piped_input};
pub use writer::write_output;
