#![allow(clippy::unwrap_used, reason = "tests unwrap freely")]

use super::*;
use crate::format::parse_format;
use crate::{Locale, ScanOptions};
use pretty_assertions::assert_eq;
use sift_core::View;

fn read_bool(options: &ScanOptions, input: &str, spec: &str) -> (Option<bool>, usize) {
    let src = format!("{{:{spec}}}");
    let format = parse_format(&src).unwrap();
    let directive = format.directives().next().unwrap();
    let ctx = ReadContext::new(options, directive);
    let mut cursor = Cursor::new(View::from(input));
    let value = match read(&mut cursor, &ctx, &directive.presentation) {
        Ok(Value::Bool(b)) => Some(b),
        Ok(other) => panic!("expected a bool, got {other:?}"),
        Err(_) => None,
    };
    (value, cursor.pos())
}

fn classic(input: &str, spec: &str) -> (Option<bool>, usize) {
    read_bool(&ScanOptions::default(), input, spec)
}

#[test]
fn default_accepts_both_forms() {
    assert_eq!(classic("true", ""), (Some(true), 4));
    assert_eq!(classic("false!", ""), (Some(false), 5));
    assert_eq!(classic("1", ""), (Some(true), 1));
    assert_eq!(classic("0 ", ""), (Some(false), 1));
}

#[test]
fn textual_only() {
    assert_eq!(classic("true", "s"), (Some(true), 4));
    assert_eq!(classic("1", "s").0, None);
}

#[test]
fn numeric_only() {
    assert_eq!(classic("1", "d"), (Some(true), 1));
    assert_eq!(classic("true", "d").0, None);
}

#[test]
fn numeric_rejects_longer_numbers() {
    assert_eq!(classic("10", "").0, None);
    assert_eq!(classic("2", "").0, None);
}

#[test]
fn textual_is_case_sensitive_and_whole() {
    assert_eq!(classic("TRUE", "s").0, None);
    assert_eq!(classic("tru", "s").0, None);
}

#[test]
fn localized_names() {
    let options =
        ScanOptions::default().with_locale(Locale::classic().with_bool_names("ja", "nein"));
    assert_eq!(read_bool(&options, "nein", "Ls"), (Some(false), 4));
    assert_eq!(read_bool(&options, "ja", "L"), (Some(true), 2));
    // Unlocalized directives keep the classic names.
    assert_eq!(read_bool(&options, "ja", "s").0, None);
    assert_eq!(read_bool(&options, "true", "s"), (Some(true), 4));
}
