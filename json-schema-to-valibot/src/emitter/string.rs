//! String validator generation.

use crate::expr::Expr;
use crate::options::Options;
use crate::schema::SchemaNode;

use super::decorators::{description_step, with_default};

/// Builds the string validator, appending length, pattern and format
/// constraints in a fixed order. With more than one fragment the chain is
/// combined into a `v.pipe(...)`; the description rides inside that
/// pipeline, unlike the composite generators which wrap it outermost.
pub(super) fn compile(schema: &SchemaNode, options: &Options) -> Expr {
    let mut steps = vec![Expr::call("v.string", Vec::new())];

    if let Some(min) = schema.min_length {
        steps.push(Expr::call("v.minLength", vec![Expr::raw(min.to_string())]));
    }
    if let Some(max) = schema.max_length {
        steps.push(Expr::call("v.maxLength", vec![Expr::raw(max.to_string())]));
    }
    if let Some(pattern) = &schema.pattern {
        steps.push(Expr::call("v.regex", vec![Expr::regex(pattern)]));
    }
    if let Some(format) = &schema.format {
        if let Some(validation) = format_validation(format) {
            steps.push(Expr::raw(validation));
        }
    }
    if let Some(step) = description_step(schema, options) {
        steps.push(step);
    }

    let base = if steps.len() > 1 {
        Expr::call("v.pipe", steps)
    } else {
        steps.remove(0)
    };
    with_default(schema, base, options)
}

/// Known `format` values and their Valibot validations. Unrecognized
/// formats are silently dropped.
fn format_validation(format: &str) -> Option<&'static str> {
    let validation = match format {
        "date" => "v.isoDate()",
        "time" => r"v.regex(/^([0-1][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$/)",
        "date-time" => "v.isoDateTime()",
        "duration" => {
            r"v.regex(/^P(?!$)(\d+Y)?(\d+M)?(\d+W)?(\d+D)?(T(?=\d)(\d+H)?(\d+M)?(\d+S)?)?$/)"
        }
        "email" | "idn-email" => "v.email()",
        "hostname" | "idn-hostname" => {
            r"v.regex(/^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$/)"
        }
        "ipv4" => "v.ipv4()",
        "ipv6" => "v.ipv6()",
        "uri" | "uri-reference" | "iri" | "iri-reference" => "v.url()",
        "uuid" => "v.uuid()",
        "json-pointer" => r"v.regex(/^(?:\/(?:[^~\/]|~0|~1)*)*$/)",
        "relative-json-pointer" => {
            r"v.regex(/^(?:0|[1-9][0-9]*)(?:#|(?:\/(?:[^~\/]|~0|~1)*)*)$/)"
        }
        "regex" => r"v.regex(/^(\/)(.*)(\/)([gimuy]*)$/)",
        _ => return None,
    };
    Some(validation)
}
