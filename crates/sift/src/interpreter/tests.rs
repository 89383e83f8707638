#![allow(clippy::unwrap_used, reason = "tests unwrap freely")]

use super::*;
use crate::args::{FloatKind, IntKind};
use crate::ErrorKind;
use pretty_assertions::assert_eq;

const I32: ArgKind = ArgKind::Int(IntKind::I32);

fn run<'a>(input: &'a str, format: &str, kinds: &[ArgKind]) -> VScanOutcome<'a, u8> {
    vscan(&ScanOptions::default(), View::from(input), format, kinds)
}

fn error_kind(outcome: &VScanOutcome<'_, u8>) -> Option<ErrorKind> {
    outcome.error.as_ref().map(ScanError::kind)
}

// === Success ===

#[test]
fn values_in_slot_order() {
    let outcome = run("7 x 2.5", "{} {} {}", &[I32, ArgKind::Char, ArgKind::Float(FloatKind::F64)]);
    assert!(outcome.is_ok());
    assert_eq!(
        outcome.values,
        vec![Value::Signed(7), Value::Char('x'), Value::Float(2.5)]
    );
    assert_eq!(outcome.consumed, 7);
}

#[test]
fn manual_indexing_fills_named_slots() {
    let outcome = run("1 2", "{1} {0}", &[I32, I32]);
    assert_eq!(outcome.values, vec![Value::Signed(2), Value::Signed(1)]);
}

#[test]
fn literals_between_fields() {
    let outcome = run("(3,4)", "({},{})", &[I32, I32]);
    assert_eq!(outcome.values, vec![Value::Signed(3), Value::Signed(4)]);
    assert_eq!(outcome.consumed, 5);
}

#[test]
fn escaped_braces_match_single_braces() {
    let outcome = run("{5}", "{{{}}}", &[I32]);
    assert_eq!(outcome.values, vec![Value::Signed(5)]);
}

#[test]
fn leftover_input_is_left_unread() {
    let outcome = run("12 rest", "{}", &[I32]);
    assert!(outcome.is_ok());
    assert_eq!(outcome.consumed, 2);
}

#[test]
fn format_without_fields() {
    let outcome = run("hello", "hello", &[]);
    assert!(outcome.is_ok());
    assert!(outcome.values.is_empty());
    assert_eq!(outcome.consumed, 5);
}

// === Whitespace ===

#[test]
fn collapsed_whitespace_matches_any_amount() {
    for input in ["1 2", "1\t\n 2", "1  2"] {
        let outcome = run(input, "{} {}", &[I32, I32]);
        assert!(outcome.is_ok(), "{input:?}");
    }
    let outcome = run("a  b", "a b", &[]);
    assert_eq!(outcome.consumed, 4);
}

#[test]
fn exact_whitespace_matches_one_for_one() {
    let options = ScanOptions::default().with_whitespace(WhitespaceMode::Exact);
    let outcome = vscan(&options, View::from("a b"), "a b", &[]);
    assert!(outcome.is_ok());
    let outcome = vscan(&options, View::from("a  b"), "a b", &[]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidScannedValue));
    assert_eq!(outcome.consumed, 2);
}

// === Failure ===

#[test]
fn first_failure_discards_all_values() {
    let outcome = run("42 oops", "{} {}", &[I32, I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidScannedValue));
    assert!(outcome.values.is_empty());
    assert_eq!(outcome.consumed, 3);
}

#[test]
fn literal_mismatch_rewinds_to_literal_start() {
    let outcome = run("1-abd", "{}-abc", &[I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidScannedValue));
    assert_eq!(outcome.consumed, 1);
}

#[test]
fn literal_at_end_of_input() {
    let outcome = run("1-ab", "{}-abc", &[I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::EndOfInput));
    assert_eq!(outcome.consumed, 1);
}

#[test]
fn reader_exhaustion_surfaces_as_end_of_input() {
    let outcome = run("1 ", "{} {}", &[I32, I32]);
    let err = outcome.error.unwrap();
    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    assert!(!err.is_end_of_range());
}

#[test]
fn invalid_format_consumes_nothing() {
    let outcome = run("1 2", "{} {:q}", &[I32, I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidFormatString));
    assert_eq!(outcome.consumed, 0);

    let outcome = run("1 2", "{} {}", &[I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidFormatString));
    assert_eq!(outcome.consumed, 0);
}

#[test]
fn invalid_encoding_in_literal() {
    let input = [b'a', 0xC0, 0x80];
    let outcome = vscan(&ScanOptions::default(), View::new(&input), "a{}", &[ArgKind::Char]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidEncoding));
    assert_eq!(outcome.consumed, 1);
}

#[test]
fn malformed_input_under_a_literal_is_an_encoding_error() {
    let input = [0xC3, 0x28, b'1'];
    let outcome = vscan(&ScanOptions::default(), View::new(&input), "é{}", &[I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidEncoding));
    assert_eq!(outcome.consumed, 0);
}

#[test]
fn multi_unit_literals() {
    let outcome = run("€5 · ok", "€{} · ok", &[I32]);
    assert!(outcome.is_ok());
    assert_eq!(outcome.values, vec![Value::Signed(5)]);

    let outcome = run("€5 · no", "€{} · ok", &[I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidScannedValue));
    assert_eq!(outcome.consumed, 8);

    let wide: Vec<u16> = "😀=7".encode_utf16().collect();
    let outcome = vscan(&ScanOptions::default(), View::new(&wide), "😀={}", &[I32]);
    assert_eq!(outcome.values, vec![Value::Signed(7)]);
}

// === consume_all ===

#[test]
fn consume_all_rejects_leftovers() {
    let options = ScanOptions::default().with_consume_all(true);
    let outcome = vscan(&options, View::from("12 rest"), "{}", &[I32]);
    assert_eq!(error_kind(&outcome), Some(ErrorKind::InvalidScannedValue));
    assert!(outcome.values.is_empty());

    let outcome = vscan(&options, View::from("12  \n"), "{}", &[I32]);
    assert!(outcome.is_ok());
    assert_eq!(outcome.consumed, 5);
}

// === Encodings ===

#[test]
fn utf16_input() {
    let input: Vec<u16> = "x=\u{1F600} 9".encode_utf16().collect();
    let outcome = vscan(
        &ScanOptions::default(),
        View::new(&input),
        "x={} {}",
        &[ArgKind::CodePoint, I32],
    );
    assert!(outcome.is_ok());
    assert_eq!(outcome.values[1], Value::Signed(9));
    assert_eq!(outcome.consumed, input.len());
}

#[test]
fn utf32_input() {
    let input: Vec<u32> = "é 3".chars().map(u32::from).collect();
    let outcome = vscan(
        &ScanOptions::default(),
        View::new(&input),
        "{} {}",
        &[ArgKind::String, I32],
    );
    assert_eq!(
        outcome.values,
        vec![Value::String("é".to_owned()), Value::Signed(3)]
    );
}
