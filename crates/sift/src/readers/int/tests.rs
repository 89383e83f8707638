#![allow(clippy::unwrap_used, reason = "tests unwrap freely")]

use super::*;
use crate::format::parse_format;
use crate::{ErrorKind, Locale, ScanOptions};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sift_core::View;

fn read_with(
    options: &ScanOptions,
    input: &str,
    spec: &str,
    kind: IntKind,
) -> (Result<Value<'static, u8>, ScanError>, usize) {
    let src = format!("{{:{spec}}}");
    let format = parse_format(&src).unwrap();
    let directive = format.directives().next().unwrap();
    let ctx = ReadContext::new(options, directive);
    // Leak so the value can outlive this helper.
    let input: &'static str = Box::leak(input.to_owned().into_boxed_str());
    let mut cursor = Cursor::new(View::from(input));
    let result = read(&mut cursor, &ctx, kind, &directive.presentation);
    (result, cursor.pos())
}

fn read_int(
    input: &str,
    spec: &str,
    kind: IntKind,
) -> (Result<Value<'static, u8>, ScanError>, usize) {
    read_with(&ScanOptions::default(), input, spec, kind)
}

fn signed(input: &str, spec: &str) -> i128 {
    match read_int(input, spec, IntKind::I128).0.unwrap() {
        Value::Signed(n) => n,
        other => panic!("expected a signed value, got {other:?}"),
    }
}

fn error_kind(input: &str, spec: &str, kind: IntKind) -> ErrorKind {
    read_int(input, spec, kind).0.unwrap_err().kind()
}

// === Decimal ===

#[test]
fn decimal_with_signs() {
    assert_eq!(signed("42", "d"), 42);
    assert_eq!(signed("+42", "d"), 42);
    assert_eq!(signed("-42", "d"), -42);
    assert_eq!(signed("-0", "d"), 0);
}

#[test]
fn stops_at_first_non_digit() {
    let (value, pos) = read_int("123abc", "d", IntKind::I32);
    assert_eq!(value.unwrap(), Value::Signed(123));
    assert_eq!(pos, 3);
}

#[test]
fn no_digits_is_invalid() {
    assert_eq!(error_kind("abc", "d", IntKind::I32), ErrorKind::InvalidScannedValue);
    assert_eq!(error_kind("-", "d", IntKind::I32), ErrorKind::InvalidScannedValue);
}

// === Range ===

#[test]
fn i8_boundaries() {
    assert_eq!(read_int("127", "", IntKind::I8).0.unwrap(), Value::Signed(127));
    assert_eq!(read_int("-128", "", IntKind::I8).0.unwrap(), Value::Signed(-128));
    assert_eq!(error_kind("128", "", IntKind::I8), ErrorKind::ValueOutOfRange);
    assert_eq!(error_kind("-129", "", IntKind::I8), ErrorKind::ValueOutOfRange);
}

#[test]
fn extreme_128_bit_values() {
    assert_eq!(
        signed("-170141183460469231731687303715884105728", ""),
        i128::MIN
    );
    assert_eq!(
        read_int("340282366920938463463374607431768211455", "", IntKind::U128)
            .0
            .unwrap(),
        Value::Unsigned(u128::MAX)
    );
    assert_eq!(
        error_kind("340282366920938463463374607431768211456", "", IntKind::U128),
        ErrorKind::ValueOutOfRange
    );
}

#[test]
fn unsigned_rejects_minus() {
    assert_eq!(error_kind("-1", "", IntKind::U32), ErrorKind::InvalidScannedValue);
    assert_eq!(error_kind("-1", "u", IntKind::I32), ErrorKind::InvalidScannedValue);
    assert_eq!(read_int("+1", "", IntKind::U32).0.unwrap(), Value::Unsigned(1));
}

// === Radix ===

#[test]
fn explicit_radixes() {
    assert_eq!(signed("ff", "x"), 255);
    assert_eq!(signed("0xFF", "X"), 255);
    assert_eq!(signed("0b101", "b"), 5);
    assert_eq!(signed("101", "b"), 5);
    assert_eq!(signed("0o17", "o"), 15);
    assert_eq!(signed("017", "o"), 15);
    assert_eq!(signed("-0x10", "x"), -16);
}

#[test]
fn detected_radixes() {
    assert_eq!(signed("0x1F", "i"), 31);
    assert_eq!(signed("0b11", "i"), 3);
    assert_eq!(signed("0o7", "i"), 7);
    assert_eq!(signed("017", "i"), 15);
    assert_eq!(signed("17", ""), 17);
    assert_eq!(signed("0", ""), 0);
}

#[test]
fn dangling_prefix_consumes_only_the_zero() {
    let (value, pos) = read_int("0xg", "x", IntKind::I32);
    assert_eq!(value.unwrap(), Value::Signed(0));
    assert_eq!(pos, 1);

    let (value, pos) = read_int("0x", "i", IntKind::I32);
    assert_eq!(value.unwrap(), Value::Signed(0));
    assert_eq!(pos, 1);
}

#[test]
fn octal_detection_stops_at_eight() {
    let (value, pos) = read_int("08", "i", IntKind::I32);
    assert_eq!(value.unwrap(), Value::Signed(0));
    assert_eq!(pos, 1);
}

// === Grouping ===

#[test]
fn grouping_requires_flag() {
    let (value, pos) = read_int("1,234", "d", IntKind::I32);
    assert_eq!(value.unwrap(), Value::Signed(1));
    assert_eq!(pos, 1);
    assert_eq!(signed("1,234,567", "'d"), 1_234_567);
}

#[test]
fn separator_must_sit_between_digits() {
    let (value, pos) = read_int("12,", "'d", IntKind::I32);
    assert_eq!(value.unwrap(), Value::Signed(12));
    assert_eq!(pos, 2);
    assert_eq!(error_kind(",12", "'d", IntKind::I32), ErrorKind::InvalidScannedValue);
}

#[test]
fn localized_separator() {
    let options = ScanOptions::default().with_locale(Locale::classic().with_thousands_sep('.'));
    let (value, _) = read_with(&options, "1.234.567", "L'd", IntKind::I64);
    assert_eq!(value.unwrap(), Value::Signed(1_234_567));
    // Without `L` the classic separator applies.
    let (value, pos) = read_with(&options, "1.234", "'d", IntKind::I64);
    assert_eq!(value.unwrap(), Value::Signed(1));
    assert_eq!(pos, 1);
}

#[test]
fn locale_without_grouping_accepts_no_separator() {
    let options = ScanOptions::default().with_locale(Locale::classic().without_thousands_sep());
    let (value, pos) = read_with(&options, "1,234", "L'd", IntKind::I64);
    assert_eq!(value.unwrap(), Value::Signed(1));
    assert_eq!(pos, 1);
}

// === Properties ===

proptest! {
    #[test]
    fn reconstructs_non_negative_values(n in any::<u64>(), radix_index in 0usize..4) {
        let (spec, text) = match radix_index {
            0 => ("b", format!("{n:b}")),
            1 => ("o", format!("{n:o}")),
            2 => ("d", n.to_string()),
            _ => ("x", format!("{n:x}")),
        };
        let (value, pos) = read_int(&text, spec, IntKind::U64);
        prop_assert_eq!(value.unwrap(), Value::Unsigned(u128::from(n)));
        prop_assert_eq!(pos, text.len());
    }

    #[test]
    fn consumes_exactly_the_digit_prefix(n in any::<i32>(), tail in "[a-z ;]{0,8}") {
        let text = format!("{n}{tail}");
        let (value, pos) = read_int(&text, "d", IntKind::I32);
        prop_assert_eq!(value.unwrap(), Value::Signed(i128::from(n)));
        prop_assert_eq!(&text[pos..], tail.as_str());
    }
}
