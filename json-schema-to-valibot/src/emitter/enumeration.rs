//! Enum validator generation.

use serde_json::Value;

use crate::expr::Expr;
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::{with_default, with_description};

/// Builds the closed-set validator. Uniform value sets become a single
/// `v.picklist([...])` over the raw literal list; sets mixing `null` with
/// other values fan out into a union of per-value literals, with `null`
/// rendered as the null validator rather than a null-valued literal.
pub(super) fn compile(schema: &SchemaNode, values: &[Value], options: &Options) -> Expr {
    let has_null = values.iter().any(Value::is_null);
    let base = if has_null && values.len() > 1 {
        let branches = values
            .iter()
            .map(|value| match value {
                Value::Null => Expr::call("v.null", Vec::new()),
                other => Expr::call("v.literal", vec![Expr::json(other)]),
            })
            .collect();
        Expr::call("v.union", vec![Expr::List(branches)])
    } else {
        Expr::call(
            "v.picklist",
            vec![Expr::json(&Value::Array(values.to_vec()))],
        )
    };

    let base = with_default(schema, base, options);
    with_description(schema, base, options)
}
