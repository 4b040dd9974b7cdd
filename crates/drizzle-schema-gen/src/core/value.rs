//! Rendering of default values into TypeScript literals.

use serde_json::Value;

/// Render a literal value as TypeScript source.
///
/// Scalars use JSON syntax (`"active"`, `0`, `true`, `null`), which is also
/// valid TypeScript. Arrays are rendered item by item and joined with `", "`.
pub fn format_literal(value: &Value) -> String {
    match value {
        Value::Array(items) => format!(
            "[{}]",
            items
                .iter()
                .map(format_literal)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        other => other.to_string(),
    }
}

/// Render a generator argument as it appears inside a SQL call.
///
/// Strings are emitted raw, everything else in JSON form.
pub fn format_argument(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a generator call such as `gen_random_uuid()` or `nextval(seq)`.
///
/// A name that already ends with `)` and has no arguments is kept as is.
pub fn format_call(name: &str, args: &[Value]) -> String {
    if !args.is_empty() {
        let rendered = args.iter().map(format_argument).collect::<Vec<_>>();
        format!("{}({})", name, rendered.join(", "))
    } else if name.ends_with(')') {
        name.to_string()
    } else {
        format!("{}()", name)
    }
}

/// Whether a JS-style truthiness check would accept the value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
