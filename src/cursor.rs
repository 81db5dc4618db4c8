//! The position-tracking view over the input code-point sequence.
//!
//! The `Cursor` wraps the input `&str` and exposes the peek/advance
//! primitives the parser is built on. It decodes UTF-8 on the fly, so a
//! bare multi-byte character inside a string literal is one code point to
//! the caller, and it keeps 1-indexed line/column counters for error
//! reporting. This module is not part of the public API.

use crate::error::SyntaxError;

/// Tracks the current position in the input.
///
/// Position advances are purely local; a `Cursor` owns nothing but its
/// borrow of the input and its counters.
pub(crate) struct Cursor<'a> {
    /// The input JSON text.
    input: &'a str,
    /// Current byte offset into `input`. Always on a char boundary.
    pos: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed, counted in code points).
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Creates a `SyntaxError` at the current line and column.
    pub(crate) fn fail(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the current code point without consuming it, or `None` at
    /// end of input.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes and returns the current code point.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes zero or more of space, tab, carriage-return, newline.
    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes the current character if it matches; otherwise fails with
    /// a syntax error.
    pub(crate) fn expect(&mut self, expected: char) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(self.fail(format!("Expected '{expected}', found '{ch}'"))),
            None => Err(self.fail(format!("Expected '{expected}'"))),
        }
    }

    /// The unconsumed remainder of the input.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The current byte offset, for later use with `slice_from`.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// The input between a previously recorded offset and the current
    /// position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Consumes `len` bytes, updating line/column across the skipped text.
    /// `len` must land on a char boundary.
    pub(crate) fn advance_over(&mut self, len: usize) {
        let end = self.pos + len;
        for ch in self.input[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
    }

    #[test]
    fn test_advance_decodes_code_points() {
        let mut cursor = Cursor::new("a\u{0191}b");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('\u{0191}'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_skip_whitespace_stops_at_token() {
        let mut cursor = Cursor::new(" \t\r\n x");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_expect_mismatch_reports_position() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        let err = cursor.expect('c').unwrap_err();
        assert_eq!(err.message, "Expected 'c', found 'b'");
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 2);
    }

    #[test]
    fn test_line_column_tracking_across_newlines() {
        let mut cursor = Cursor::new("[\n1]");
        cursor.advance();
        cursor.advance();
        let err = cursor.fail("boom");
        assert_eq!((err.line, err.column), (2, 1));
    }

    #[test]
    fn test_advance_over_counts_lines() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance_over(4);
        let err = cursor.fail("boom");
        assert_eq!((err.line, err.column), (2, 2));
        assert_eq!(cursor.peek(), Some('d'));
    }
}
