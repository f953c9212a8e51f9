//! Module envelope assembly.
//!
//! Wraps the compiled expression in import/export boilerplate according to
//! the requested module format. With [`ModuleFormat::None`] the raw
//! expression is returned untouched.

use crate::options::{ModuleFormat, Options, TypeExport};

/// Assembles the final output from the rendered expression.
pub(crate) fn assemble(schema_code: &str, options: &Options) -> String {
    if options.module == ModuleFormat::None {
        return schema_code.to_string();
    }

    let mut lines = imports(options);
    lines.extend(exports(schema_code, options));
    lines.join("\n")
}

fn imports(options: &Options) -> Vec<String> {
    if options.no_import {
        return Vec::new();
    }
    let import = match options.module {
        ModuleFormat::Esm => "import * as v from \"valibot\";",
        _ => "const v = require(\"valibot\");",
    };
    vec![import.to_string(), String::new()]
}

fn exports(schema_code: &str, options: &Options) -> Vec<String> {
    match options.module {
        ModuleFormat::Esm => esm_exports(schema_code, options),
        _ => cjs_exports(schema_code, options),
    }
}

fn esm_exports(schema_code: &str, options: &Options) -> Vec<String> {
    let Some(name) = &options.name else {
        return vec![format!("export default {schema_code};")];
    };

    let mut lines = vec![format!("export const {name} = {schema_code};")];
    if let Some(type_name) = type_name(options) {
        lines.push(format!("export type {type_name} = v.Input<typeof {name}>;"));
    }
    lines
}

fn cjs_exports(schema_code: &str, options: &Options) -> Vec<String> {
    match &options.name {
        Some(name) => vec![format!("module.exports = {{ {name}: {schema_code} }};")],
        None => vec![format!("module.exports = {schema_code};")],
    }
}

/// The exported type name: the explicit string if given, else the export
/// name with its first character upper-cased.
fn type_name(options: &Options) -> Option<String> {
    let name = options.name.as_deref()?;
    match &options.type_export {
        TypeExport::Off => None,
        TypeExport::Named(type_name) => Some(type_name.clone()),
        TypeExport::Infer => {
            let mut chars = name.chars();
            let first = chars.next()?;
            Some(first.to_uppercase().chain(chars).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "v.string()";

    #[test]
    fn test_none_returns_raw_expression() {
        assert_eq!(assemble(CODE, &Options::default()), "v.string()");
    }

    #[test]
    fn test_esm_default_export() {
        let options = Options {
            module: ModuleFormat::Esm,
            ..Options::default()
        };
        assert_eq!(
            assemble(CODE, &options),
            "import * as v from \"valibot\";\n\nexport default v.string();"
        );
    }

    #[test]
    fn test_esm_named_export() {
        let options = Options {
            module: ModuleFormat::Esm,
            name: Some("mySchema".to_string()),
            ..Options::default()
        };
        assert_eq!(
            assemble(CODE, &options),
            "import * as v from \"valibot\";\n\nexport const mySchema = v.string();"
        );
    }

    #[test]
    fn test_esm_named_export_with_inferred_type() {
        let options = Options {
            module: ModuleFormat::Esm,
            name: Some("mySchema".to_string()),
            type_export: TypeExport::Infer,
            ..Options::default()
        };
        assert_eq!(
            assemble(CODE, &options),
            "import * as v from \"valibot\";\n\nexport const mySchema = v.string();\nexport type MySchema = v.Input<typeof mySchema>;"
        );
    }

    #[test]
    fn test_esm_named_export_with_explicit_type_name() {
        let options = Options {
            module: ModuleFormat::Esm,
            name: Some("mySchema".to_string()),
            type_export: TypeExport::Named("Custom".to_string()),
            ..Options::default()
        };
        assert_eq!(
            assemble(CODE, &options),
            "import * as v from \"valibot\";\n\nexport const mySchema = v.string();\nexport type Custom = v.Input<typeof mySchema>;"
        );
    }

    #[test]
    fn test_cjs_named_export() {
        let options = Options {
            module: ModuleFormat::Cjs,
            name: Some("mySchema".to_string()),
            ..Options::default()
        };
        assert_eq!(
            assemble(CODE, &options),
            "const v = require(\"valibot\");\n\nmodule.exports = { mySchema: v.string() };"
        );
    }

    #[test]
    fn test_cjs_bare_export() {
        let options = Options {
            module: ModuleFormat::Cjs,
            ..Options::default()
        };
        assert_eq!(
            assemble(CODE, &options),
            "const v = require(\"valibot\");\n\nmodule.exports = v.string();"
        );
    }

    #[test]
    fn test_no_import_drops_the_header() {
        let options = Options {
            module: ModuleFormat::Esm,
            no_import: true,
            ..Options::default()
        };
        assert_eq!(assemble(CODE, &options), "export default v.string();");
    }
}
