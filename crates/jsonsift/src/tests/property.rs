//! Property tests over generated documents: the parser accepts any
//! well-formed JSON, reports exactly one completion per value, and leaves
//! the path balanced.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use serde_json::{Map, Value};

use super::{Recorded, RecordingSink};
use crate::Parser;

#[derive(Debug, Clone)]
struct Doc(Value);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(arbitrary_value(g, 3))
    }
}

fn ascii_word(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len)
        .map(|_| {
            let alphabet = b"abcdefghijklmnopqrstuvwxyz0123456789._ ";
            *g.choose(alphabet).unwrap() as char
        })
        .collect()
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let kinds = if depth == 0 { 4 } else { 6 };
    match u8::arbitrary(g) % kinds {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::from(i32::arbitrary(g)),
        3 => Value::String(ascii_word(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| arbitrary_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::new();
            for i in 0..len {
                // Suffix keeps generated keys unique within one object.
                let key = format!("{}{i}", ascii_word(g));
                map.insert(key, arbitrary_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

/// `(scalars, containers)` in one document tree.
fn counts(value: &Value) -> (usize, usize) {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => (1, 0),
        Value::Array(items) => items.iter().fold((0, 1), |(s, c), item| {
            let (is, ic) = counts(item);
            (s + is, c + ic)
        }),
        Value::Object(map) => map.values().fold((0, 1), |(s, c), item| {
            let (is, ic) = counts(item);
            (s + is, c + ic)
        }),
    }
}

#[quickcheck]
fn any_rendered_document_parses_with_one_report_per_value(doc: Doc) -> bool {
    let rendered = doc.0.to_string();
    let mut sink = RecordingSink::default();
    let mut parser = Parser::with_chunk_size(rendered.as_bytes(), 5);
    parser.parse(&mut sink).unwrap();

    let (scalars, containers) = counts(&doc.0);
    let seen_scalars = sink
        .events
        .iter()
        .filter(|(_, v)| !matches!(v, Recorded::Object | Recorded::Array))
        .count();
    let seen_containers = sink.events.len() - seen_scalars;

    parser.current_path().is_empty()
        && seen_scalars == scalars
        && seen_containers == containers
}

#[quickcheck]
fn pretty_printing_does_not_change_the_event_stream(doc: Doc) -> bool {
    let compact = doc.0.to_string();
    let pretty = serde_json::to_string_pretty(&doc.0).unwrap();

    let mut compact_sink = RecordingSink::default();
    Parser::new(compact.as_bytes())
        .parse(&mut compact_sink)
        .unwrap();
    let mut pretty_sink = RecordingSink::default();
    Parser::new(pretty.as_bytes())
        .parse(&mut pretty_sink)
        .unwrap();

    compact_sink.events == pretty_sink.events
}
