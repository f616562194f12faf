//! In-crate test suite: shared recording sink plus the parser and
//! extractor scenarios.

mod parse_bad;
mod property;

use crate::{Error, ParsedValue, Parser, ValueSink};

/// Owned snapshot of one sink invocation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Recorded {
    Object,
    Array,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl From<ParsedValue<'_>> for Recorded {
    fn from(value: ParsedValue<'_>) -> Self {
        match value {
            ParsedValue::Object => Recorded::Object,
            ParsedValue::Array => Recorded::Array,
            ParsedValue::Null => Recorded::Null,
            ParsedValue::Bool(b) => Recorded::Bool(b),
            ParsedValue::Number(n) => Recorded::Number(n),
            ParsedValue::String(s) => Recorded::Str(s.to_owned()),
        }
    }
}

/// Records every sink invocation as `(path, value)`.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) events: Vec<(String, Recorded)>,
}

impl ValueSink for RecordingSink {
    fn on_value(&mut self, path: &str, value: ParsedValue<'_>) -> Result<(), Error> {
        self.events.push((path.to_owned(), value.into()));
        Ok(())
    }
}

pub(crate) fn parse_str(input: &str) -> Result<Vec<(String, Recorded)>, Error> {
    parse_chunked(input, 1024)
}

pub(crate) fn parse_chunked(input: &str, chunk: usize) -> Result<Vec<(String, Recorded)>, Error> {
    let mut sink = RecordingSink::default();
    let mut parser = Parser::with_chunk_size(input.as_bytes(), chunk);
    parser.parse(&mut sink)?;
    assert!(
        parser.current_path().is_empty(),
        "path must be balanced after a full parse, got {:?}",
        parser.current_path()
    );
    Ok(sink.events)
}

pub(crate) fn ev(path: &str, value: Recorded) -> (String, Recorded) {
    (path.to_owned(), value)
}
