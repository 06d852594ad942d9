//! Scalar value model and normalization rules.
//!
//! Responsibilities:
//! - Define the `Value` sum type held by the configuration store.
//! - Canonicalize keys (uppercase) and values (integer, boolean, trimmed string).
//! - Convert decoder output (`serde_json::Value`) into `Value` explicitly.
//!
//! Does NOT handle:
//! - Storage or merge order (see `store.rs`).
//! - Decoding file formats (see `loader/file.rs`).
//!
//! Invariants:
//! - `normalize_value` never fails; unparseable strings degrade to trimmed strings.
//! - `normalize_value(normalize_value(x)) == normalize_value(x)`.
//! - Whole-valued floats that fit in an `i64` are narrowed to `Value::Int`.

use serde::Serialize;
use std::fmt;

/// A normalized configuration value.
///
/// Serializes untagged, so exports contain plain JSON/YAML scalars. There is
/// no `Deserialize` impl: decoded input goes through [`Value::from_raw`] and
/// [`normalize_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Bool(bool),
    /// Floating value with a non-zero fractional part.
    Float(f64),
    String(String),
    /// Nested maps, sequences and nulls. Carried through untouched.
    Opaque(serde_json::Value),
}

impl Value {
    /// Converts a generic decoded value into a `Value` without normalizing it.
    pub fn from_raw(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Opaque(serde_json::Value::Number(n))
                }
            }
            other => Value::Opaque(other),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => f.write_str(s),
            Value::Opaque(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from_raw(value)
    }
}

/// Canonicalizes a key for storage and lookup.
pub fn normalize_key(key: &str) -> String {
    key.to_uppercase()
}

/// Canonicalizes a value.
///
/// Strings are trimmed, then tried as a base-10 integer, then as a boolean
/// literal; otherwise the trimmed string is kept. Whole-valued floats are
/// narrowed to integers. Every other value passes through unchanged.
pub fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(s) => normalize_str(&s),
        Value::Float(f) => narrow_float(f),
        other => other,
    }
}

fn normalize_str(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }
    if let Some(b) = parse_bool(trimmed) {
        return Value::Bool(b);
    }
    Value::String(trimmed.to_string())
}

// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
fn narrow_float(f: f64) -> Value {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Value::Int(f as i64)
    } else {
        Value::Float(f)
    }
}

/// Parses the boolean literals `1 t T TRUE true True` and `0 f F FALSE false False`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
