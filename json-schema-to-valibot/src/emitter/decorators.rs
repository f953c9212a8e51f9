//! Default and description decorators.
//!
//! A decorator takes an already-built expression and conditionally wraps it
//! with behavior declared on the node. Canonical composition order: the
//! default wrapper goes around the (possibly piped) validation chain, and
//! the description is either a pipeline step inside it (string generator)
//! or an outermost wrapper (composite generators).

use serde_json::Value;

use crate::expr::{render_float, Expr};
use crate::options::Options;
use crate::schema::SchemaNode;

/// Wraps `base` in an optional-with-default form when the node declares a
/// default value and defaults are not suppressed.
pub(super) fn with_default(schema: &SchemaNode, base: Expr, options: &Options) -> Expr {
    if options.without_defaults {
        return base;
    }
    let Some(value) = &schema.default else {
        return base;
    };
    let rendered = match value {
        Value::String(text) => coerce_string_default(text),
        other => Expr::json(other),
    };
    Expr::call("v.optional", vec![base, rendered])
}

/// String defaults go through numeric and boolean coercion before falling
/// back to a quoted literal. The coercion fires regardless of the declared
/// `type`, so `"5"` on a string schema still becomes the numeric literal 5.
fn coerce_string_default(value: &str) -> Expr {
    if let Ok(int) = value.parse::<i64>() {
        return Expr::raw(int.to_string());
    }
    if let Ok(float) = value.parse::<f64>() {
        if float.is_finite() {
            return Expr::raw(render_float(float));
        }
    }
    if value == "true" || value == "false" {
        return Expr::raw(value);
    }
    Expr::single_quoted(value)
}

/// Wraps `base` in a described pipeline when the node carries a non-empty
/// description and descriptions are not suppressed.
pub(super) fn with_description(schema: &SchemaNode, base: Expr, options: &Options) -> Expr {
    match description_step(schema, options) {
        Some(step) => Expr::call("v.pipe", vec![base, step]),
        None => base,
    }
}

/// The bare `v.description(...)` step, for the string generator which
/// splices the description into its existing pipeline instead of wrapping.
pub(super) fn description_step(schema: &SchemaNode, options: &Options) -> Option<Expr> {
    if options.without_descriptions {
        return None;
    }
    let description = schema.description.as_deref()?;
    if description.is_empty() {
        return None;
    }
    Some(Expr::call(
        "v.description",
        vec![Expr::double_quoted(description)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SchemaNode {
        serde_json::from_value(value).unwrap()
    }

    fn number() -> Expr {
        Expr::call("v.number", Vec::new())
    }

    #[test]
    fn test_no_default_returns_base() {
        let schema = node(json!({"type": "number"}));
        let expr = with_default(&schema, number(), &Options::default());
        assert_eq!(expr.render(), "v.number()");
    }

    #[test]
    fn test_default_wraps_optional() {
        let schema = node(json!({"type": "number", "default": 42}));
        let expr = with_default(&schema, number(), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.number(), 42)");
    }

    #[test]
    fn test_zero_default_is_kept() {
        let schema = node(json!({"type": "number", "default": 0}));
        let expr = with_default(&schema, number(), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.number(), 0)");
    }

    #[test]
    fn test_null_default_is_kept() {
        let schema = node(json!({"type": "null", "default": null}));
        let expr = with_default(&schema, Expr::call("v.null", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.null(), null)");
    }

    #[test]
    fn test_without_defaults_suppresses() {
        let schema = node(json!({"type": "number", "default": 42}));
        let options = Options {
            without_defaults: true,
            ..Options::default()
        };
        let expr = with_default(&schema, number(), &options);
        assert_eq!(expr.render(), "v.number()");
    }

    #[test]
    fn test_string_default_coerces_to_integer() {
        let schema = node(json!({"type": "string", "default": "5"}));
        let expr = with_default(&schema, Expr::call("v.string", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.string(), 5)");
    }

    #[test]
    fn test_string_default_coerces_to_float() {
        let schema = node(json!({"type": "string", "default": "2.5"}));
        let expr = with_default(&schema, Expr::call("v.string", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.string(), 2.5)");
    }

    #[test]
    fn test_string_default_coerces_to_boolean() {
        let schema = node(json!({"type": "boolean", "default": "false"}));
        let expr = with_default(&schema, Expr::call("v.boolean", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.boolean(), false)");
    }

    #[test]
    fn test_plain_string_default_is_quoted() {
        let schema = node(json!({"type": "string", "default": "test"}));
        let expr = with_default(&schema, Expr::call("v.string", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.string(), 'test')");
    }

    #[test]
    fn test_empty_string_default_is_preserved() {
        let schema = node(json!({"type": "string", "default": ""}));
        let expr = with_default(&schema, Expr::call("v.string", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.string(), '')");
    }

    #[test]
    fn test_infinity_string_default_stays_a_string() {
        let schema = node(json!({"type": "string", "default": "Infinity"}));
        let expr = with_default(&schema, Expr::call("v.string", Vec::new()), &Options::default());
        assert_eq!(expr.render(), "v.optional(v.string(), 'Infinity')");
    }

    #[test]
    fn test_description_wraps_pipe() {
        let schema = node(json!({"type": "number", "description": "a count"}));
        let expr = with_description(&schema, number(), &Options::default());
        assert_eq!(
            expr.render(),
            "v.pipe(v.number(), v.description(\"a count\"))"
        );
    }

    #[test]
    fn test_description_escapes_quotes() {
        let schema = node(json!({"type": "number", "description": "say \"hi\""}));
        let expr = with_description(&schema, number(), &Options::default());
        assert_eq!(
            expr.render(),
            "v.pipe(v.number(), v.description(\"say \\\"hi\\\"\"))"
        );
    }

    #[test]
    fn test_empty_description_is_skipped() {
        let schema = node(json!({"type": "number", "description": ""}));
        let expr = with_description(&schema, number(), &Options::default());
        assert_eq!(expr.render(), "v.number()");
    }

    #[test]
    fn test_without_descriptions_suppresses() {
        let schema = node(json!({"type": "number", "description": "a count"}));
        let options = Options {
            without_descriptions: true,
            ..Options::default()
        };
        let expr = with_description(&schema, number(), &options);
        assert_eq!(expr.render(), "v.number()");
    }
}
