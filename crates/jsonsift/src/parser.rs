//! The value dispatcher and tokenizers.
//!
//! A hand-written recursive-descent parser over the chunked source buffer.
//! [`parse_value`](Parser::parse_value) inspects one lookahead byte and
//! dispatches to one of six value parsers; containers recurse back into the
//! dispatcher, extending and retracting the dotted path around each
//! descent. Every completed value is reported to the [`ValueSink`] with the
//! path active at that instant.
//!
//! # Examples
//!
//! ```rust
//! use jsonsift::{ParsedValue, Parser, ValueSink};
//!
//! struct Print;
//! impl ValueSink for Print {
//!     fn on_value(&mut self, path: &str, value: ParsedValue<'_>) -> Result<(), jsonsift::Error> {
//!         println!("{path} = {value:?}");
//!         Ok(())
//!     }
//! }
//!
//! let mut parser = Parser::new(r#"{"key": [null, true, 3.14]}"#.as_bytes());
//! parser.parse(&mut Print)?;
//! # Ok::<(), jsonsift::Error>(())
//! ```

use std::io::Read;

use bstr::ByteSlice;

use crate::{
    buffer::SourceBuffer,
    error::{Error, SyntaxError},
    path::DottedPath,
    sink::ValueSink,
    value::ParsedValue,
};

/// The streaming JSON parser.
///
/// Owns the source buffer and the current path exclusively for the
/// duration of one parse pass. Single-threaded, synchronous, pull-based:
/// forward progress happens strictly one token at a time, with the parser
/// calling into the buffer — and the buffer into the blocking source —
/// whenever it needs bytes.
#[derive(Debug)]
pub struct Parser<R> {
    source: SourceBuffer<R>,
    path: DottedPath,
}

impl<R: Read> Parser<R> {
    /// Creates a parser pulling 1 KiB chunks from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            source: SourceBuffer::new(reader),
            path: DottedPath::new(),
        }
    }

    /// Creates a parser with a custom pull granularity.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            source: SourceBuffer::with_chunk_size(reader, chunk_size),
            path: DottedPath::new(),
        }
    }

    /// Parses one complete JSON value from the source, reporting every
    /// completed value to `sink`.
    ///
    /// Errors — source I/O, malformed JSON, numeric conversion, or a sink
    /// failure — abort immediately and unwind to the caller.
    pub fn parse<S: ValueSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        self.parse_value(sink)
    }

    /// The re-entrant dispatcher: skips whitespace, trims the consumed
    /// prefix, then selects a value parser by lookahead byte.
    fn parse_value<S: ValueSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        self.source.consume()?;
        let Some(byte) = self.source.peek() else {
            return Err(self.syntax(SyntaxError::UnexpectedEndOfInput));
        };
        match byte {
            b'{' => {
                // One path segment per object nesting level.
                self.path.descend(".");
                let parsed = self.parse_object(sink);
                self.path.ascend();
                parsed
            }
            b'[' => self.parse_array(sink),
            b'"' => self.parse_string(sink),
            b't' => self.parse_literal(b"true", ParsedValue::Bool(true), sink),
            b'f' => self.parse_literal(b"false", ParsedValue::Bool(false), sink),
            b'n' => self.parse_literal(b"null", ParsedValue::Null, sink),
            // Anything else must be a number; the number parser verifies.
            _ => self.parse_number(sink),
        }
    }

    /// Consumes one object. The completion report carries the path that
    /// was active inside the object, before the dispatcher's ascent.
    fn parse_object<S: ValueSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        self.source.advance()?; // past '{'
        self.source.consume()?;

        if self.source.peek() == Some(b'}') {
            self.source.advance()?;
            self.source.consume()?;
            return sink.on_value(self.path.as_str(), ParsedValue::Object);
        }

        loop {
            let key = self.parse_key()?;
            self.path.descend(&key);
            let parsed = self.parse_value(sink);
            self.path.ascend();
            parsed?;

            match self.source.peek() {
                Some(b',') => {
                    self.source.advance()?;
                    self.source.consume()?;
                }
                Some(b'}') => {
                    self.source.advance()?;
                    self.source.consume()?;
                    break;
                }
                Some(found) => {
                    return Err(self.syntax(SyntaxError::ExpectedObjectSeparator(found as char)));
                }
                None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
            }
        }

        sink.on_value(self.path.as_str(), ParsedValue::Object)
    }

    /// Consumes one array. Elements inherit the parent path exactly — no
    /// segment is pushed per array index.
    fn parse_array<S: ValueSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        self.source.advance()?; // past '['
        self.source.consume()?;

        if self.source.peek() == Some(b']') {
            self.source.advance()?;
            self.source.consume()?;
            return sink.on_value(self.path.as_str(), ParsedValue::Array);
        }

        loop {
            self.parse_value(sink)?;

            match self.source.peek() {
                Some(b',') => {
                    self.source.advance()?;
                    self.source.consume()?;
                }
                Some(b']') => {
                    self.source.advance()?;
                    self.source.consume()?;
                    break;
                }
                Some(found) => {
                    return Err(self.syntax(SyntaxError::ExpectedArraySeparator(found as char)));
                }
                None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
            }
        }

        sink.on_value(self.path.as_str(), ParsedValue::Array)
    }

    /// Parses a quoted object key plus its trailing `:`, both
    /// whitespace-tolerant, and returns the raw key text.
    fn parse_key(&mut self) -> Result<String, Error> {
        match self.source.peek() {
            Some(b'"') => {}
            Some(found) => return Err(self.syntax(SyntaxError::ExpectedKey(found as char))),
            None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
        }
        self.source.advance()?; // past opening quote

        let start = self.source.pos();
        self.scan_string_body()?;
        let key = match self.source.span_from(start).to_str() {
            Ok(text) => text.to_owned(),
            Err(_) => return Err(self.syntax(SyntaxError::InvalidUtf8)),
        };

        self.source.advance()?; // past closing quote
        self.source.consume()?;

        match self.source.peek() {
            Some(b':') => {}
            Some(found) => return Err(self.syntax(SyntaxError::ExpectedColon(found as char))),
            None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
        }
        self.source.advance()?;
        self.source.consume()?;

        Ok(key)
    }

    /// Parses a string value and reports its raw content, escapes
    /// preserved verbatim.
    fn parse_string<S: ValueSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        self.source.advance()?; // past opening quote

        let start = self.source.pos();
        self.scan_string_body()?;
        match self.source.span_from(start).to_str() {
            Ok(text) => sink.on_value(self.path.as_str(), ParsedValue::String(text))?,
            Err(_) => return Err(self.syntax(SyntaxError::InvalidUtf8)),
        }

        self.source.advance()?; // past closing quote
        self.source.consume()?;
        Ok(())
    }

    /// Scans string content up to (not including) the closing quote. A
    /// backslash causes the following byte to be treated as content
    /// regardless of its value — the escape is skipped, not interpreted.
    fn scan_string_body(&mut self) -> Result<(), Error> {
        loop {
            match self.source.peek() {
                Some(b'"') => return Ok(()),
                Some(b'\\') => {
                    self.source.advance()?;
                    if self.source.peek().is_none() {
                        return Err(self.syntax(SyntaxError::UnexpectedEndOfInput));
                    }
                    self.source.advance()?;
                }
                Some(_) => self.source.advance()?,
                None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
            }
        }
    }

    /// Greedily captures a run of number bytes — a deliberate superset of
    /// the JSON grammar, validated by the `f64` conversion afterwards.
    fn parse_number<S: ValueSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        match self.source.peek() {
            Some(byte) if byte.is_ascii_digit() || byte == b'-' => {}
            Some(byte) => return Err(self.syntax(SyntaxError::UnexpectedCharacter(byte as char))),
            None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
        }

        let start = self.source.pos();
        while let Some(byte) = self.source.peek() {
            if byte.is_ascii_digit() || matches!(byte, b'-' | b'+' | b'.' | b'e' | b'E') {
                self.source.advance()?;
            } else {
                break;
            }
        }

        let Ok(literal) = self.source.span_from(start).to_str() else {
            return Err(self.syntax(SyntaxError::InvalidUtf8));
        };
        match literal.parse::<f64>() {
            Ok(number) => sink.on_value(self.path.as_str(), ParsedValue::Number(number))?,
            Err(_) => {
                return Err(Error::Number {
                    literal: literal.to_owned(),
                    path: self.path.as_str().to_owned(),
                });
            }
        }

        self.source.consume()?;
        Ok(())
    }

    /// Verifies a `true`/`false`/`null` literal byte-for-byte. Any
    /// mismatch, including running out of input mid-literal, is a syntax
    /// error.
    fn parse_literal<S: ValueSink>(
        &mut self,
        literal: &'static [u8],
        value: ParsedValue<'static>,
        sink: &mut S,
    ) -> Result<(), Error> {
        for &expected in literal {
            match self.source.peek() {
                Some(byte) if byte == expected => self.source.advance()?,
                Some(byte) => {
                    return Err(self.syntax(SyntaxError::UnexpectedCharacter(byte as char)));
                }
                None => return Err(self.syntax(SyntaxError::UnexpectedEndOfInput)),
            }
        }
        self.source.consume()?;
        sink.on_value(self.path.as_str(), value)
    }

    fn syntax(&self, kind: SyntaxError) -> Error {
        Error::Syntax {
            kind,
            path: self.path.as_str().to_owned(),
        }
    }

    #[cfg(test)]
    pub(crate) fn current_path(&self) -> &DottedPath {
        &self.path
    }
}
