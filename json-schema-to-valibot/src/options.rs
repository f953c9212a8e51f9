//! Generator configuration.
//!
//! [`Options`] is an immutable record passed by value through every
//! recursive call; it is never promoted to shared state.

/// Module envelope emitted around the compiled expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleFormat {
    /// ES module syntax (`import` / `export`).
    Esm,
    /// CommonJS syntax (`require` / `module.exports`).
    Cjs,
    /// No envelope; the raw expression is returned.
    #[default]
    None,
}

/// Type-alias export requested alongside an ESM schema export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeExport {
    /// No type alias.
    #[default]
    Off,
    /// Alias named after the schema export, first character upper-cased.
    Infer,
    /// Alias with an explicit name.
    Named(String),
}

impl TypeExport {
    /// Whether any type alias was requested.
    pub fn is_requested(&self) -> bool {
        !matches!(self, TypeExport::Off)
    }
}

/// Immutable configuration for one compilation.
///
/// The default is the bare expression: no module envelope, no export name,
/// defaults and descriptions enabled.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Module envelope to wrap the expression in.
    pub module: ModuleFormat,

    /// Export identifier for the schema constant.
    pub name: Option<String>,

    /// Type-alias export; requires `name` and [`ModuleFormat::Esm`].
    pub type_export: TypeExport,

    /// Suppress the import header.
    pub no_import: bool,

    /// Suppress the optional-with-default wrappers.
    pub without_defaults: bool,

    /// Suppress the description pipeline steps.
    pub without_descriptions: bool,

    /// Accepted for CLI compatibility; the generators do not consume it.
    pub with_jsdocs: bool,
}

impl Options {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }
}
