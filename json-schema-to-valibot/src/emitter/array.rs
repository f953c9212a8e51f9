//! Array validator generation.

use crate::error::Result;
use crate::expr::Expr;
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::with_description;

/// Builds the sequence validator around the recursively generated item
/// expression; items default to the anything validator.
pub(super) fn compile(schema: &SchemaNode, options: &Options) -> Result<Expr> {
    let items = match &schema.items {
        Some(items) => super::compile_node(items, options)?,
        None => Expr::call("v.any", Vec::new()),
    };
    let array = Expr::call("v.array", vec![items]);
    Ok(with_description(schema, array, options))
}
