//! Union generation for `anyOf` branches.

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::with_description;

/// Builds a union over the dispatched branches, in declared order. An
/// empty sequence is an error.
pub(super) fn compile(
    schema: &SchemaNode,
    branches: &[SchemaNode],
    options: &Options,
) -> Result<Expr> {
    if branches.is_empty() {
        return Err(Error::EmptyAnyOf);
    }

    let compiled = branches
        .iter()
        .map(|branch| super::compile_node(branch, options))
        .collect::<Result<Vec<_>>>()?;

    let union = Expr::call("v.union", vec![Expr::List(compiled)]);
    Ok(with_description(schema, union, options))
}
