//! Number and integer validator generation.

use serde_json::Number;

use crate::expr::{render_float, render_number, Expr};
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::with_default;

/// Builds the number validator. The `integer` tag adds an integer
/// refinement; range and divisibility constraints follow in a fixed order.
/// Descriptions are not handled at this level.
pub(super) fn compile(schema: &SchemaNode, integer: bool, options: &Options) -> Expr {
    let mut steps = vec![Expr::call("v.number", Vec::new())];

    if integer {
        steps.push(Expr::call("v.integer", Vec::new()));
    }
    if let Some(minimum) = &schema.minimum {
        let bound = if schema.exclusive_minimum {
            shift(minimum, 1)
        } else {
            render_number(minimum)
        };
        steps.push(Expr::call("v.minValue", vec![Expr::raw(bound)]));
    }
    if let Some(maximum) = &schema.maximum {
        let bound = if schema.exclusive_maximum {
            shift(maximum, -1)
        } else {
            render_number(maximum)
        };
        steps.push(Expr::call("v.maxValue", vec![Expr::raw(bound)]));
    }
    if let Some(step) = &schema.multiple_of {
        steps.push(Expr::call(
            "v.multipleOf",
            vec![Expr::raw(render_number(step))],
        ));
    }

    let base = if steps.len() > 1 {
        Expr::call("v.pipe", steps)
    } else {
        steps.remove(0)
    };
    with_default(schema, base, options)
}

/// Draft-4 exclusive bounds are folded into inclusive ones by shifting the
/// bound itself, not by emitting an exclusive operator.
fn shift(bound: &Number, delta: i64) -> String {
    if let Some(int) = bound.as_i64() {
        return (int + delta).to_string();
    }
    let float = bound.as_f64().unwrap_or(0.0) + delta as f64;
    render_float(float)
}
