//! Contains the primary `SyntaxError` type for the library.
use std::error;
use std::fmt;

/// The single error kind for all decoding operations.
///
/// Every grammar violation (an unterminated string, a missing container
/// terminator, an unquoted object key, trailing garbage, and so on) is
/// reported as this one type. Callers should branch on error-vs-success
/// only; the `message` exists for diagnostics, not for dispatch.
#[derive(Debug, PartialEq)]
pub struct SyntaxError {
    /// A description of what went wrong.
    pub message: String,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed, in code points) where the error was detected.
    pub column: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error: {} at line {}, column {}.",
            self.message, self.line, self.column
        )
    }
}

impl error::Error for SyntaxError {}
