//! Malformed documents: every truncation or bad separator is a reported
//! error, never a panic or a silent stop.

use rstest::rstest;

use super::parse_str;
use crate::{Error, SyntaxError};

fn syntax_kind(input: &str) -> SyntaxError {
    match parse_str(input).unwrap_err() {
        Error::Syntax { kind, .. } => kind,
        other => panic!("expected syntax error for {input:?}, got {other}"),
    }
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("{")]
#[case(r#"{"a""#)]
#[case(r#"{"a":"#)]
#[case(r#"{"a":1"#)]
#[case("[")]
#[case("[1")]
#[case("[1,")]
#[case(r#""unterminated"#)]
#[case(r#""trailing escape\"#)]
#[case("tru")]
#[case("nul")]
#[case("fals")]
fn truncated_input_reports_unexpected_end(#[case] input: &str) {
    assert_eq!(syntax_kind(input), SyntaxError::UnexpectedEndOfInput);
}

#[rstest]
#[case("ture", 'u')]
#[case("fals0", '0')]
#[case("nill", 'i')]
fn literal_mismatch_reports_the_offending_byte(#[case] input: &str, #[case] found: char) {
    assert_eq!(syntax_kind(input), SyntaxError::UnexpectedCharacter(found));
}

#[test]
fn bad_object_separator() {
    assert_eq!(
        syntax_kind(r#"{"a":1; "b":2}"#),
        SyntaxError::ExpectedObjectSeparator(';')
    );
}

#[test]
fn bad_array_separator() {
    assert_eq!(syntax_kind("[1 2]"), SyntaxError::ExpectedArraySeparator('2'));
}

#[test]
fn trailing_commas_are_rejected() {
    assert_eq!(syntax_kind(r#"{"a":1,}"#), SyntaxError::ExpectedKey('}'));
    assert_eq!(
        syntax_kind("[1,]"),
        SyntaxError::UnexpectedCharacter(']')
    );
}

#[test]
fn unquoted_keys_are_rejected() {
    assert_eq!(syntax_kind("{a:1}"), SyntaxError::ExpectedKey('a'));
}

#[test]
fn missing_colon_is_rejected() {
    assert_eq!(syntax_kind(r#"{"a" 1}"#), SyntaxError::ExpectedColon('1'));
}

#[test]
fn garbage_value_start_is_rejected() {
    assert_eq!(syntax_kind(r#"{"a": @}"#), SyntaxError::UnexpectedCharacter('@'));
}

#[test]
fn numeric_conversion_failure_carries_the_span_and_path() {
    match parse_str(r#"{"n": 1.2.3}"#).unwrap_err() {
        Error::Number { literal, path } => {
            assert_eq!(literal, "1.2.3");
            assert_eq!(path, ".n");
        }
        other => panic!("expected number error, got {other}"),
    }
}

#[test]
fn syntax_errors_carry_the_current_path() {
    match parse_str(r#"{"a": {"b": [1,}"#).unwrap_err() {
        Error::Syntax { kind, path } => {
            assert_eq!(kind, SyntaxError::UnexpectedCharacter('}'));
            assert_eq!(path, ".a.b");
        }
        other => panic!("expected syntax error, got {other}"),
    }
}

#[test]
fn sink_errors_unwind_the_whole_parse() {
    use crate::{ParsedValue, Parser, ValueSink};

    struct Cancel;
    impl ValueSink for Cancel {
        fn on_value(&mut self, _path: &str, _value: ParsedValue<'_>) -> Result<(), Error> {
            Err(Error::Config("stop"))
        }
    }

    let err = Parser::new(&b"[1,2,3]"[..]).parse(&mut Cancel).unwrap_err();
    assert!(matches!(err, Error::Config("stop")));
}
