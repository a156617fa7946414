//! Rendering values back to JSON text.
//!
//! Two forms: [`pretty`] (2-space indentation, one entry per line) and
//! [`compact`] (single line, no padding). `Display` for [`Value`] is the
//! compact form.
//!
//! Number formatting: integral values print without a fractional part
//! (`5`, not `5.0`), negative zero normalizes to `0`, and non-finite
//! numbers print as `null` since JSON cannot represent them.

use crate::value::Value;
use std::fmt;

/// Render a value as indented, human-readable JSON.
pub fn pretty(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, 0, true, &mut out);
    out
}

/// Render a value as single-line JSON.
pub fn compact(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, 0, false, &mut out);
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compact(self))
    }
}

fn write_value(value: &Value, depth: usize, pretty: bool, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, depth, pretty, out),
        Value::Object(entries) => write_object(entries, depth, pretty, out),
    }
}

fn write_array(items: &[Value], depth: usize, pretty: bool, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            push_indent(depth + 1, out);
        }
        write_value(item, depth + 1, pretty, out);
    }
    if pretty {
        out.push('\n');
        push_indent(depth, out);
    }
    out.push(']');
}

fn write_object(entries: &[(String, Value)], depth: usize, pretty: bool, out: &mut String) {
    if entries.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            push_indent(depth + 1, out);
        }
        write_string(key, out);
        out.push(':');
        if pretty {
            out.push(' ');
        }
        write_value(value, depth + 1, pretty, out);
    }
    if pretty {
        out.push('\n');
        push_indent(depth, out);
    }
    out.push('}');
}

/// Quote and escape a string for JSON output. Control characters outside
/// the short-escape set are emitted as `\u00XX`.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    // f64 Display already prints integral values without a fractional part
    // and round-trips shortest-form decimals.
    format!("{n}")
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
