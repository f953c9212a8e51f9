//! Expression tree for generated Valibot code.
//!
//! Generators build [`Expr`] values instead of concatenating strings; the
//! tree is rendered to TypeScript source in a single pass. All quoting and
//! escaping rules live in this module.

use std::fmt;

use serde_json::Value;

/// A fragment of generated Valibot source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    /// A builder call such as `v.string()` or `v.pipe(a, b)`.
    Call {
        /// Callee path, e.g. `"v.object"`.
        func: &'static str,
        /// Argument expressions, rendered comma-separated.
        args: Vec<Expr>,
    },
    /// A bracketed list such as `[v.string(), v.number()]`.
    List(Vec<Expr>),
    /// An object literal such as `{hello: v.string()}`. Keys containing a
    /// hyphen are quoted at render time.
    Object(Vec<(String, Expr)>),
    /// A pre-rendered fragment: a JSON value, a quoted string or a regex
    /// literal. Escaping happens when the fragment is constructed.
    Raw(String),
}

impl Expr {
    /// A builder call expression.
    pub(crate) fn call(func: &'static str, args: Vec<Expr>) -> Self {
        Expr::Call { func, args }
    }

    /// A pre-rendered fragment.
    pub(crate) fn raw(fragment: impl Into<String>) -> Self {
        Expr::Raw(fragment.into())
    }

    /// A JSON value in its compact encoding. Numbers render the way
    /// JavaScript prints them, without a trailing `.0`.
    pub(crate) fn json(value: &Value) -> Self {
        match value {
            Value::Number(number) => Expr::Raw(render_number(number)),
            other => Expr::Raw(
                serde_json::to_string(other).unwrap_or_else(|_| String::from("null")),
            ),
        }
    }

    /// A single-quoted string literal with backslashes and double quotes
    /// escaped.
    pub(crate) fn single_quoted(value: &str) -> Self {
        Expr::Raw(format!("'{}'", escape_string(value)))
    }

    /// A double-quoted string literal with backslashes and double quotes
    /// escaped.
    pub(crate) fn double_quoted(value: &str) -> Self {
        Expr::Raw(format!("\"{}\"", escape_string(value)))
    }

    /// A `/.../` regex literal with forward slashes escaped.
    pub(crate) fn regex(pattern: &str) -> Self {
        Expr::Raw(format!("/{}/", escape_pattern(pattern)))
    }

    /// Renders the tree into TypeScript source text.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Expr::Call { func, args } => {
                out.push_str(func);
                out.push('(');
                write_separated(args, out);
                out.push(')');
            }
            Expr::List(items) => {
                out.push('[');
                write_separated(items, out);
                out.push(']');
            }
            Expr::Object(fields) => {
                out.push('{');
                for (index, (key, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    write_key(key, out);
                    out.push_str(": ");
                    value.write(out);
                }
                out.push('}');
            }
            Expr::Raw(fragment) => out.push_str(fragment),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn write_separated(exprs: &[Expr], out: &mut String) {
    for (index, expr) in exprs.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        expr.write(out);
    }
}

/// Keys that are not valid bare identifiers (they contain a hyphen) are
/// quoted in the emitted object literal.
fn write_key(key: &str, out: &mut String) {
    if key.contains('-') {
        out.push('"');
        out.push_str(key);
        out.push('"');
    } else {
        out.push_str(key);
    }
}

/// Escapes backslashes and double quotes for embedding in a quoted literal.
pub(crate) fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escapes forward slashes for embedding in a `/.../` regex literal.
pub(crate) fn escape_pattern(pattern: &str) -> String {
    pattern.replace('/', "\\/")
}

/// Renders a JSON number the way JavaScript would: integral values print
/// without a fractional part.
pub(crate) fn render_number(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) => render_float(float),
        None => number.to_string(),
    }
}

/// Renders a float, dropping the trailing `.0` on integral values inside
/// the safe-integer range.
pub(crate) fn render_float(float: f64) -> String {
    if float.is_finite() && float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 {
        format!("{}", float as i64)
    } else {
        float.to_string()
    }
}
