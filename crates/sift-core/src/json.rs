//! Boundary between JSON text and the core value model.
//!
//! Parsing raw JSON is delegated to `serde_json` rather than a second
//! hand-written parser; this module converts between `serde_json::Value`
//! and the core [`Value`]. The `preserve_order` feature is required so the
//! boundary keeps the entry order the core's ordered objects depend on.

use crate::error::Result;
use crate::value::Value;

/// Parse JSON text into a core value.
///
/// Invalid JSON surfaces as [`SiftError::JsonParse`]. Numbers collapse to
/// `f64`; object entry order follows the source text, with duplicate keys
/// resolved last-wins by serde_json before conversion.
///
/// [`SiftError::JsonParse`]: crate::SiftError::JsonParse
pub fn from_str(text: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(&parsed))
}

/// Convert a `serde_json::Value` tree into a core value.
pub fn from_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        // as_f64 is total for serde_json numbers unless the
        // `arbitrary_precision` feature is enabled, which this crate does
        // not use.
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (key.clone(), from_json(val)))
                .collect(),
        ),
    }
}

/// Convert a core value back into a `serde_json::Value` tree.
///
/// Non-finite numbers have no JSON representation and become `Null`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, val)| (key.clone(), to_json(val)))
                .collect(),
        ),
    }
}
