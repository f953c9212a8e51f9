//! Boolean validator generation.

use crate::expr::Expr;
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::with_default;

/// Builds the boolean validator. Only the default decorator applies;
/// descriptions are absorbed by whichever caller wraps the result.
pub(super) fn compile(schema: &SchemaNode, options: &Options) -> Expr {
    with_default(schema, Expr::call("v.boolean", Vec::new()), options)
}
