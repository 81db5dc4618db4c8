//! The recursive-descent value parser.
//!
//! `Parser` owns a `Cursor` over the input and dispatches on the next
//! significant character: `{` and `[` recurse into container loops, `"`
//! goes to the string decoder, `t`/`f`/`n` must match an exact keyword,
//! and a digit, `-`, or `.` goes to the number decoder. Any other
//! character, and any truncation, is a syntax error; there are no partial
//! results.

use crate::cursor::Cursor;
use crate::error::SyntaxError;
use crate::value::Value;
use memchr::memchr2;
use num_bigint::BigInt;
use std::collections::BTreeMap;

/// The recursive-descent parser. Holds no state beyond the cursor and the
/// current nesting depth.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Nesting depth at which the parse is aborted, to keep adversarial
    /// inputs from exhausting the call stack.
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, max_depth: usize) -> Self {
        Parser {
            cursor: Cursor::new(input),
            max_depth,
            depth: 0,
        }
    }

    /// Parses the whole input as a single document: one value surrounded
    /// by optional whitespace, with nothing significant after it.
    pub(crate) fn parse_document(&mut self) -> Result<Value, SyntaxError> {
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Ok(value),
            Some(ch) => Err(self
                .cursor
                .fail(format!("Unexpected trailing character '{ch}'"))),
        }
    }

    /// The recursive entry point: parses exactly one value, leading
    /// whitespace included.
    fn parse_value(&mut self) -> Result<Value, SyntaxError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_list(),
            Some('"') => self.parse_string().map(Value::String),
            Some('t') => self.parse_keyword("true", Value::Bool(true)),
            Some('f') => self.parse_keyword("false", Value::Bool(false)),
            Some('n') => self.parse_keyword("null", Value::Null),
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '.' => self.parse_number(),
            Some(ch) => Err(self.cursor.fail(format!("Unexpected character '{ch}'"))),
            None => Err(self
                .cursor
                .fail("Unexpected end of input, expected a value")),
        }
    }

    /// Matches a fixed keyword token (`true`, `false`, `null`) against the
    /// raw input. Any deviation, e.g. `trux`, is a syntax error; keywords
    /// are not identifiers.
    fn parse_keyword(&mut self, word: &'static str, value: Value) -> Result<Value, SyntaxError> {
        if self.cursor.rest().starts_with(word) {
            self.cursor.advance_over(word.len());
            Ok(value)
        } else {
            Err(self.cursor.fail(format!("Expected '{word}'")))
        }
    }

    fn enter_container(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(self.cursor.fail("Maximum nesting depth exceeded"));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value, SyntaxError> {
        self.enter_container()?;
        self.cursor.expect('{')?;
        let mut map = BTreeMap::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some('}') {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            // Keys must be quoted strings. A bare identifier or number
            // here is a hard failure, not a permissive parse.
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some('"') => {}
                Some(ch) => {
                    return Err(self
                        .cursor
                        .fail(format!("Expected a string key, found '{ch}'")))
                }
                None => return Err(self.cursor.fail("Unclosed object")),
            }
            let key = self.parse_string()?;
            self.cursor.skip_whitespace();
            self.cursor.expect(':')?;
            let value = self.parse_value()?;
            // Duplicate keys: last write wins.
            map.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(',') => {
                    self.cursor.advance();
                }
                Some('}') => {
                    self.cursor.advance();
                    break;
                }
                Some(ch) => {
                    return Err(self
                        .cursor
                        .fail(format!("Expected ',' or '}}', found '{ch}'")))
                }
                None => return Err(self.cursor.fail("Unclosed object")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_list(&mut self) -> Result<Value, SyntaxError> {
        self.enter_container()?;
        self.cursor.expect('[')?;
        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(']') {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(Value::List(items));
        }

        loop {
            // An empty slot (`[1, , 2]` or `[1, ]`) fails inside
            // parse_value on the ',' or ']' it finds instead of a value.
            items.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(',') => {
                    self.cursor.advance();
                }
                Some(']') => {
                    self.cursor.advance();
                    break;
                }
                Some(ch) => {
                    return Err(self
                        .cursor
                        .fail(format!("Expected ',' or ']', found '{ch}'")))
                }
                None => return Err(self.cursor.fail("Unclosed list")),
            }
        }

        self.depth -= 1;
        Ok(Value::List(items))
    }

    /// Decodes a quoted string literal.
    ///
    /// Verbatim runs are located with `memchr2` and copied in one chunk;
    /// only escapes take the per-character path. Raw multi-byte UTF-8
    /// inside the literal passes through untouched, so a string may mix
    /// `\uXXXX` escapes with bare non-ASCII characters.
    fn parse_string(&mut self) -> Result<String, SyntaxError> {
        self.cursor.expect('"')?;
        let mut out = String::new();

        loop {
            let (idx, is_quote) = {
                let rest = self.cursor.rest().as_bytes();
                match memchr2(b'"', b'\\', rest) {
                    Some(i) => (i, rest[i] == b'"'),
                    None => return Err(self.cursor.fail("Unterminated string")),
                }
            };

            if idx > 0 {
                out.push_str(&self.cursor.rest()[..idx]);
                self.cursor.advance_over(idx);
            }

            if is_quote {
                self.cursor.advance();
                return Ok(out);
            }

            self.cursor.advance(); // the backslash
            match self.cursor.advance() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('/') => out.push('/'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('u') => out.push(self.parse_unicode_escape()?),
                // Any other escaped character keeps its literal value: the
                // backslash is dropped, so `\x` decodes to `x`. Deliberate
                // leniency, exercised by the reference inputs.
                Some(other) => out.push(other),
                None => return Err(self.cursor.fail("Unterminated string")),
            }
        }
    }

    /// Decodes the four hex digits after `\u` as one UTF-16 code unit. A
    /// high surrogate must be followed by an escaped low surrogate; the
    /// pair combines into the supplementary code point.
    fn parse_unicode_escape(&mut self) -> Result<char, SyntaxError> {
        let unit = self.hex4()?;
        let code = match unit {
            0xD800..=0xDBFF => {
                if !self.cursor.rest().starts_with("\\u") {
                    return Err(self.cursor.fail("Unpaired surrogate in Unicode escape"));
                }
                self.cursor.advance_over(2);
                let low = self.hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.cursor.fail("Unpaired surrogate in Unicode escape"));
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.cursor.fail("Unpaired surrogate in Unicode escape"))
            }
            _ => unit,
        };
        char::from_u32(code).ok_or_else(|| self.cursor.fail("Invalid Unicode code point"))
    }

    fn hex4(&mut self) -> Result<u32, SyntaxError> {
        let hex = match self.cursor.rest().get(..4) {
            Some(hex) => hex,
            None => return Err(self.cursor.fail("Incomplete Unicode escape")),
        };
        let unit = u32::from_str_radix(hex, 16)
            .map_err(|_| self.cursor.fail("Non-hex digit in Unicode escape"))?;
        self.cursor.advance_over(4);
        Ok(unit)
    }

    /// Decodes an integer or floating literal.
    ///
    /// The literal's characters are consumed greedily and validated by the
    /// chosen representation's own parser. A literal with no fraction and
    /// no exponent becomes an arbitrary-precision `Int`; anything with a
    /// `.` or `e`/`E` becomes a `Float`, including leading-dot forms like
    /// `.1` and `-.1`.
    fn parse_number(&mut self) -> Result<Value, SyntaxError> {
        let start = self.cursor.offset();
        while let Some(ch) = self.cursor.peek() {
            match ch {
                '0'..='9' | '.' | '-' | '+' | 'e' | 'E' => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }

        let text = self.cursor.slice_from(start);
        if text.contains(|ch| matches!(ch, '.' | 'e' | 'E')) {
            match text.parse::<f64>() {
                Ok(float) => Ok(Value::Float(float)),
                Err(_) => Err(self.cursor.fail(format!("Invalid number '{text}'"))),
            }
        } else {
            match text.parse::<BigInt>() {
                Ok(int) => Ok(Value::Int(int)),
                Err(_) => Err(self.cursor.fail(format!("Invalid number '{text}'"))),
            }
        }
    }
}
