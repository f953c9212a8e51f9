//! Schema-to-expression compiler.
//!
//! [`compile_node`] is the entry point for every schema node. It decides
//! which generator to invoke and implements the cross-cutting rules for
//! type arrays (nullable collapsing, union fan-out) and for combining a
//! base type with a sibling `anyOf`. Sibling keywords impose independent
//! constraints in JSON Schema, so a node carrying both a base type and an
//! `anyOf` compiles to an intersection of the two.

mod any_of;
mod array;
mod boolean;
mod decorators;
mod enumeration;
mod number;
mod object;
mod string;

use crate::error::Result;
use crate::expr::Expr;
use crate::options::Options;
use crate::schema::{SchemaNode, TypeSet, TypeTag};

/// Compiles one schema node into a validator expression.
pub(crate) fn compile_node(schema: &SchemaNode, options: &Options) -> Result<Expr> {
    let base = match (&schema.enumeration, &schema.ty) {
        // `enum` wins over any `type` field.
        (Some(values), _) => Some(enumeration::compile(schema, values, options)),
        (None, Some(TypeSet::Many(tags))) => {
            let non_null: Vec<&String> =
                tags.iter().filter(|tag| tag.as_str() != "null").collect();
            if non_null.len() == 1 && non_null.len() != tags.len() {
                // ["T", "null"] collapses to nullable(T). This path returns
                // immediately; a sibling anyOf is not combined here.
                let derived = schema.with_single_type(non_null[0]);
                let inner = compile_node(&derived, options)?;
                return Ok(Expr::call("v.nullable", vec![inner]));
            }
            let branches = tags
                .iter()
                .map(|tag| compile_node(&schema.with_single_type(tag), options))
                .collect::<Result<Vec<_>>>()?;
            Some(Expr::call("v.union", vec![Expr::List(branches)]))
        }
        (None, Some(TypeSet::One(tag))) => Some(compile_single(schema, tag, options)?),
        (None, None) => None,
    };

    if let Some(branches) = &schema.any_of {
        let union = any_of::compile(schema, branches, options)?;
        return Ok(match base {
            Some(base) => Expr::call("v.intersect", vec![Expr::List(vec![base, union])]),
            None => union,
        });
    }

    Ok(base.unwrap_or_else(|| Expr::call("v.any", Vec::new())))
}

/// Delegates a single-tag node to its generator.
fn compile_single(schema: &SchemaNode, tag: &str, options: &Options) -> Result<Expr> {
    match TypeTag::parse(tag)? {
        TypeTag::String => Ok(string::compile(schema, options)),
        TypeTag::Number => Ok(number::compile(schema, false, options)),
        TypeTag::Integer => Ok(number::compile(schema, true, options)),
        TypeTag::Boolean => Ok(boolean::compile(schema, options)),
        TypeTag::Null => Ok(Expr::call("v.null", Vec::new())),
        TypeTag::Object => object::compile(schema, options),
        TypeTag::Array => array::compile(schema, options),
    }
}
