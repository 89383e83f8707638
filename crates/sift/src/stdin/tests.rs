#![allow(clippy::unwrap_used, reason = "tests unwrap freely")]

use super::*;
use crate::ErrorKind;
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[test]
fn reads_one_line_at_a_time() {
    let mut reader = Cursor::new("1 2\n3 4\n");
    let mut line = String::new();

    let first = read_and_scan::<_, (i32, i32)>(&mut reader, &mut line, "{} {}");
    assert_eq!(first.into_values(), Some((1, 2)));
    let second = read_and_scan::<_, (i32, i32)>(&mut reader, &mut line, "{} {}");
    assert_eq!(second.into_values(), Some((3, 4)));
}

#[test]
fn line_terminator_is_stripped() {
    let mut reader = Cursor::new("hello world\r\n");
    let mut line = String::new();
    let result = read_and_scan::<_, (String,)>(&mut reader, &mut line, "{:[^\\n]}");
    assert_eq!(result.into_values(), Some(("hello world".to_owned(),)));
}

#[test]
fn remainder_is_unusable() {
    let mut reader = Cursor::new("7 rest\n");
    let mut line = String::new();
    let result = read_and_scan::<_, (u8,)>(&mut reader, &mut line, "{}");
    assert!(result.is_ok());
    assert_eq!(result.consumed(), 1);
    assert_eq!(result.remainder(), Remainder::Unusable);
}

#[test]
fn closed_stream_is_end_of_input() {
    let mut reader = Cursor::new("");
    let mut line = String::new();
    let result = read_and_scan::<_, (i32,)>(&mut reader, &mut line, "{}");
    assert_eq!(result.error().map(ScanError::kind), Some(ErrorKind::EndOfInput));
}

#[test]
fn invalid_utf8_line_is_invalid_encoding() {
    let mut reader = Cursor::new(vec![b'1', 0xFF, b'\n']);
    let mut line = String::new();
    let result = read_and_scan::<_, (i32,)>(&mut reader, &mut line, "{}");
    assert_eq!(result.error().map(ScanError::kind), Some(ErrorKind::InvalidEncoding));
}
