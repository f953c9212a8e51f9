//! Object validator generation.

use std::collections::HashSet;

use crate::error::Result;
use crate::expr::Expr;
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::with_description;

/// Builds the keyed-field validator from the property map, dispatching
/// recursively per property and computing per-property optionality.
pub(super) fn compile(schema: &SchemaNode, options: &Options) -> Result<Expr> {
    let Some(properties) = &schema.properties else {
        let empty = Expr::call("v.object", vec![Expr::Object(Vec::new())]);
        return Ok(with_description(schema, empty, options));
    };

    let required: HashSet<&str> = schema
        .required
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    let mut fields = Vec::with_capacity(properties.len());
    for (key, value) in properties {
        let parsed = super::compile_node(value, options)?;
        // A property with a default is always populated after parsing, so
        // it stays required even when absent from `required`.
        let populated = required.contains(key.as_str())
            || (!options.without_defaults && value.default.is_some());
        let field = if populated {
            parsed
        } else {
            Expr::call("v.optional", vec![parsed])
        };
        fields.push((key.clone(), field));
    }

    let object = Expr::call("v.object", vec![Expr::Object(fields)]);
    Ok(with_description(schema, object, options))
}
