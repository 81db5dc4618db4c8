//! Contains the `Value` enum, a native Rust representation of any decoded
//! JSON value.

use num_bigint::BigInt;
use std::collections::BTreeMap;

/// A native Rust representation of any decoded JSON value.
///
/// A `Value` is immutable once constructed: decoding never produces a
/// partially filled string, number, or container.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// An integer literal with no fraction or exponent.
    ///
    /// Stored at arbitrary precision so that magnitudes beyond 64-bit
    /// range round-trip exactly.
    Int(BigInt),
    /// A literal with a fractional part or exponent, even if its value is
    /// integral (`1.0`, `1e2`).
    Float(f64),
    /// A string literal, fully unescaped.
    String(String),
    /// An array. Element order is significant and preserved.
    List(Vec<Value>),
    /// An object. Keys are unique; a duplicate key overwrites the earlier
    /// entry (last write wins).
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrows the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a key, if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}
