//! Context maps and their human-readable rendering.
//!
//! A context is an insertion-ordered map of string keys to arbitrary JSON-shaped
//! values. It is rendered beneath the message line as one `key: literal` entry per
//! key, nested containers indented four spaces per level:
//!
//! ```text
//! user: {
//!     'id' => 5,
//!     'roles' => [
//!         'admin',
//!     ],
//! }
//! ```

use serde_json::{Map, Value};

/// Structured data attached to a log call. Iteration follows insertion order.
pub type Context = Map<String, Value>;

const INDENT: &str = "    ";

/// Render every entry of `context` as `key: literal`, one entry per line.
pub fn context_to_string(context: &Context) -> String {
    let mut out = String::new();
    for (key, value) in context {
        out.push_str(key);
        out.push_str(": ");
        write_literal(&mut out, value, 0);
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

/// Compact single-line encoding used by the `{context}` template placeholder.
pub fn context_to_compact(context: &Context) -> String {
    serde_json::to_string(context).unwrap_or_default()
}

/// Prefix every line of `block` with `indent`.
pub fn indent(block: &str, indent: &str) -> String {
    block
        .split('\n')
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent a context block by the standard four spaces.
pub(crate) fn indent_block(block: &str) -> String {
    indent(block, INDENT)
}

fn write_literal(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            out.push('\'');
            out.push_str(s);
            out.push('\'');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push('[');
            for item in items {
                newline(out, depth + 1);
                write_literal(out, item, depth + 1);
                out.push(',');
            }
            newline(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push('{');
            for (key, item) in map {
                newline(out, depth + 1);
                out.push('\'');
                out.push_str(key);
                out.push_str("' => ");
                write_literal(out, item, depth + 1);
                out.push(',');
            }
            newline(out, depth);
            out.push('}');
        }
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(value: Value) -> Context {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn renders_scalars() {
        let rendered = context_to_string(&ctx(json!({
            "x": 5,
            "ratio": 0.5,
            "ok": true,
            "missing": null,
            "name": "bob"
        })));
        assert_eq!(
            rendered,
            "x: 5\nratio: 0.5\nok: true\nmissing: null\nname: 'bob'"
        );
    }

    #[test]
    fn keeps_insertion_order() {
        let mut context = Context::new();
        context.insert("zeta".into(), json!(1));
        context.insert("alpha".into(), json!(2));
        assert_eq!(context_to_string(&context), "zeta: 1\nalpha: 2");
    }

    #[test]
    fn renders_nested_containers() {
        let rendered = context_to_string(&ctx(json!({
            "user": { "id": 5, "roles": ["admin"], "meta": {} },
            "empty": []
        })));
        let expected = "\
user: {
    'id' => 5,
    'roles' => [
        'admin',
    ],
    'meta' => {},
}
empty: []";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn quotes_and_backslashes_appear_once() {
        let rendered = context_to_string(&ctx(json!({ "path": "C:\\temp\\it's" })));
        assert_eq!(rendered, "path: 'C:\\temp\\it's'");
    }

    #[test]
    fn rendering_is_deterministic() {
        let context = ctx(json!({ "a": [1, 2, { "b": "c" }] }));
        assert_eq!(context_to_string(&context), context_to_string(&context));
    }

    #[test]
    fn compact_encoding_is_single_line_json() {
        let context = ctx(json!({ "x": 5, "y": ["a"] }));
        assert_eq!(context_to_compact(&context), r#"{"x":5,"y":["a"]}"#);
    }

    #[test]
    fn indents_every_line() {
        assert_eq!(indent("a\nb", "    "), "    a\n    b");
        assert_eq!(indent_block("x: 5"), "    x: 5");
    }
}
