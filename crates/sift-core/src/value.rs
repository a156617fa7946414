//! The JSON value model filters operate on.
//!
//! `Value` is an owned recursive enum. Two representation choices matter for
//! filter semantics:
//!
//! - **All numbers are `f64`.** The integer/float distinction of the input
//!   text is not preserved; `1` and `1.0` are the same value.
//! - **Objects are insertion-ordered association lists**, not hash maps:
//!   `Vec<(String, Value)>` with linear-scan lookup. Inserting an existing
//!   key overwrites its value in place and keeps its original position, so
//!   key order survives every transformation.
//!
//! Every sub-value handed out of a container is a deep copy (`Clone` on a
//! recursive enum clones the whole subtree), so results are independently
//! owned and can never alias the tree they were extracted from.

use crate::error::{Result, SiftError};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Insertion-ordered object representation: key/value pairs in the order
/// they were first inserted.
pub type Entries = Vec<(String, Value)>;

/// A JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Use [`object_insert`] to add
    /// entries so duplicate keys overwrite instead of accumulating.
    Object(Entries),
}

impl Value {
    /// The variant name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload, or `TypeMismatch`.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }

    /// The numeric payload, or `TypeMismatch`.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(mismatch("number", other)),
        }
    }

    /// The string payload, or `TypeMismatch`.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", other)),
        }
    }

    /// The array elements, or `TypeMismatch`.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(mismatch("array", other)),
        }
    }

    /// The object entries in insertion order, or `TypeMismatch`.
    pub fn as_object(&self) -> Result<&Entries> {
        match self {
            Value::Object(entries) => Ok(entries),
            other => Err(mismatch("object", other)),
        }
    }

    /// Look up `key` in an object by linear scan. `TypeMismatch` on
    /// non-objects, `KeyNotFound` on a miss.
    pub fn get(&self, key: &str) -> Result<&Value> {
        let entries = self.as_object()?;
        entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| SiftError::KeyNotFound {
                key: key.to_string(),
            })
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> SiftError {
    SiftError::TypeMismatch {
        expected,
        actual: actual.type_name(),
    }
}

/// Insert `(key, value)` into an ordered object: an existing entry with the
/// same key is overwritten in place (its position is unchanged), otherwise
/// the pair is appended.
pub fn object_insert(entries: &mut Entries, key: String, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => *slot = value,
        None => entries.push((key, value)),
    }
}

/// `a + b`: numeric sum for two numbers, concatenation for two strings.
/// Any other pairing is an `InvalidOperand` error.
pub fn add(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x + y)),
        (Value::String(x), Value::String(y)) => {
            let mut joined = String::with_capacity(x.len() + y.len());
            joined.push_str(x);
            joined.push_str(y);
            Ok(Value::String(joined))
        }
        _ => Err(operand('+', a, b)),
    }
}

/// `a - b`: numeric difference for two numbers. For two strings, removes
/// the first occurrence of `b` from `a`; if `b` does not occur, `a` is
/// returned unchanged. Any other pairing is an `InvalidOperand` error.
pub fn subtract(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x - y)),
        (Value::String(x), Value::String(y)) => Ok(Value::String(x.replacen(y.as_str(), "", 1))),
        _ => Err(operand('-', a, b)),
    }
}

fn operand(op: char, left: &Value, right: &Value) -> SiftError {
    SiftError::InvalidOperand {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

/// Element count for arrays, character count for strings, entry count for
/// objects. `UnsupportedType` for every other variant.
pub fn length(v: &Value) -> Result<usize> {
    match v {
        Value::Array(items) => Ok(items.len()),
        Value::String(s) => Ok(s.chars().count()),
        Value::Object(entries) => Ok(entries.len()),
        other => Err(SiftError::UnsupportedType {
            builtin: "length",
            actual: other.type_name(),
        }),
    }
}

/// Object keys as an array of strings, in insertion order.
///
/// Only objects have keys: arrays are an `UnsupportedType` error here, the
/// same as scalars. (jq's `keys` produces numeric indices for arrays; that
/// behavior is intentionally not offered.)
pub fn keys(v: &Value) -> Result<Value> {
    let entries = match v {
        Value::Object(entries) => entries,
        other => {
            return Err(SiftError::UnsupportedType {
                builtin: "keys",
                actual: other.type_name(),
            })
        }
    };
    let names = entries
        .iter()
        .map(|(k, _)| Value::String(k.clone()))
        .collect();
    Ok(Value::Array(names))
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

// Serializes into the natural JSON shape (not an externally-tagged enum),
// so a Value drops straight into serde pipelines: objects as maps, arrays
// as sequences, numbers as f64.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
