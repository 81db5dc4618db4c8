//! # sift-json
//!
//! `sift-json` is a strict, minimal JSON decoder, built from scratch in
//! pure Rust.
//!
//! It consumes a text input and produces a [`Value`] tree, or reports a
//! precise [`SyntaxError`]. It is a decoder only: there is no serializer,
//! no streaming mode, and no schema layer.
//!
//! ## Key Features
//!
//! * **Exact integers:** literals without a fraction or exponent decode
//!   to an arbitrary-precision integer, so `18446744073709551616`
//!   round-trips exactly instead of collapsing to a float.
//! * **Strict grammar:** missing terminators, unquoted keys, trailing
//!   commas, empty slots, and trailing garbage are all hard failures.
//! * **Mixed-encoding strings:** string literals may combine `\uXXXX`
//!   escapes with bare multi-byte UTF-8 characters.
//! * **One error kind:** every grammar violation is the same
//!   [`SyntaxError`], carrying a message and a line/column position.
//!
//! ## Quick Start
//!
//! ```
//! use sift_json::{from_json, Value};
//!
//! let value = from_json(r#"{"name": "Babbage", "id": 1815}"#)
//!     .expect("valid JSON")
//!     .expect("non-empty input");
//!
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Babbage"));
//! ```
//!
//! Empty input is a documented boundary case: it decodes to no value at
//! all, distinct from both `Value::Null` and an error.
//!
//! ```
//! use sift_json::from_json;
//!
//! assert_eq!(from_json("").unwrap(), None);
//! ```

/// Contains the primary `SyntaxError` type for the library.
pub mod error;
/// Contains the `Value` enum and its accessors.
pub mod value;

/// The position-tracking cursor over the input. Private to the crate.
mod cursor;
/// The recursive-descent parser. Private to the crate.
mod parser;

pub use error::SyntaxError;
pub use value::Value;

use parser::Parser;

/// The default maximum nesting depth (e.g. `[[[...]]]`), to keep
/// adversarial inputs from exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decodes a JSON document into a [`Value`].
///
/// Leading and trailing whitespace (space, tab, carriage-return, newline)
/// is ignored; any other content after the first complete value is a
/// syntax error.
///
/// Returns `Ok(None)` for empty input (`""`). This mirrors the decoder's
/// original no-value contract and is deliberately distinct from
/// `Value::Null`; input that is all whitespace fails instead, since a
/// value was expected and none was found.
///
/// # Errors
/// Returns a [`SyntaxError`] for any grammar violation: an unterminated
/// string, an unbalanced container, an unquoted object key, an empty slot
/// between separators, a malformed keyword or number, trailing garbage,
/// or premature end of input.
///
/// # Examples
/// ```
/// use sift_json::{from_json, Value};
///
/// assert_eq!(from_json("true").unwrap(), Some(Value::Bool(true)));
/// assert!(from_json("[1, 2").is_err());
/// ```
pub fn from_json(input: &str) -> Result<Option<Value>, SyntaxError> {
    from_json_with_depth(input, DEFAULT_MAX_DEPTH)
}

/// Decodes a JSON document with a custom nesting-depth cap.
///
/// Behaves exactly like [`from_json`]; exceeding `max_depth` while
/// entering a nested container is reported as an ordinary syntax error.
pub fn from_json_with_depth(
    input: &str,
    max_depth: usize,
) -> Result<Option<Value>, SyntaxError> {
    if input.is_empty() {
        return Ok(None);
    }
    Parser::new(input, max_depth).parse_document().map(Some)
}
