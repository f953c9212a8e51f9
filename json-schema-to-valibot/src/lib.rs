//! # json-schema-to-valibot
//!
//! Compiles a JSON Schema document into TypeScript source text that, when
//! evaluated, builds an equivalent [Valibot](https://valibot.dev/) runtime
//! validator.
//!
//! The input is a draft-4-flavored schema tree with `$ref` references
//! already resolved; the output is a single string of Valibot builder
//! calls, optionally wrapped in an ESM or CommonJS module envelope. The
//! compiler never parses or runs the code it emits.
//!
//! ## Quick Start
//!
//! ```rust
//! use json_schema_to_valibot::{json_schema_to_valibot, Options, SchemaNode};
//!
//! let schema: SchemaNode = serde_json::from_str(
//!     r#"{"type": "object", "properties": {"hello": {"type": "string"}}}"#,
//! )
//! .unwrap();
//!
//! let code = json_schema_to_valibot(&schema, &Options::default()).unwrap();
//! assert_eq!(code, "v.object({hello: v.optional(v.string())})");
//! ```
//!
//! ## Architecture
//!
//! - [`schema`] - the deserialized schema-node input model
//! - [`options`] - the immutable compilation configuration
//! - [`error`] - error types and the `Result` alias
//!
//! Internally, generators build an expression tree that is rendered to
//! text in a single pass, and a module assembler wraps the rendered
//! expression in import/export boilerplate.

mod emitter;
mod expr;
mod module;

pub mod error;
pub mod options;
pub mod schema;

pub use error::{Error, Result};
pub use options::{ModuleFormat, Options, TypeExport};
pub use schema::{SchemaNode, TypeSet, TypeTag};

/// Compiles `schema` into Valibot source text under `options`.
///
/// Validates option compatibility first, dispatches once on the root node,
/// and passes the resulting expression through the module assembler.
///
/// # Errors
///
/// Fails when a type export is requested without a `name` or outside ESM,
/// when an unrecognized `type` tag is encountered, or when an `anyOf`
/// sequence is empty.
pub fn json_schema_to_valibot(schema: &SchemaNode, options: &Options) -> Result<String> {
    if options.type_export.is_requested()
        && (options.name.is_none() || options.module != ModuleFormat::Esm)
    {
        return Err(Error::TypeRequiresNamedEsm);
    }

    let expr = emitter::compile_node(schema, options)?;
    Ok(module::assemble(&expr.render(), options))
}
