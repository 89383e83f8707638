//! Floating-point reader.
//!
//! Grammar, after an optional sign:
//!
//! ```text
//! special := "inf" | "infinity" | "nan" ["(" [A-Za-z0-9_]* ")"]   (any case)
//! decimal := digits [point digits*] | point digits, then [("e"|"E") [+-] digits]
//! hex     := ["0x"] hexdigits [. hexdigits*] | ..., then [("p"|"P") [+-] digits]
//! ```
//!
//! Decimal text is normalized into an ASCII buffer and handed to the
//! standard library parser, which is correctly rounded for both `f32` and
//! `f64`. Hex text is converted exactly here: the mantissa is kept to 64
//! significant bits plus a sticky bit, then rounded once, half to even, to
//! the destination format.

use sift_core::{CodeUnit, Cursor};

use super::{peek_digit, read_sign, ReadContext};
use crate::args::{FloatKind, Value};
use crate::format::Presentation;
use crate::options::FloatOverflow;
use crate::ScanError;

/// Exponent magnitudes beyond this already overflow or underflow every
/// supported format.
const EXPONENT_CAP: i64 = 1 << 20;

pub(super) fn read<'a, U: CodeUnit>(
    cursor: &mut Cursor<'a, U>,
    ctx: &ReadContext<'_>,
    kind: FloatKind,
    presentation: &Presentation,
) -> Result<Value<'a, U>, ScanError> {
    let negative = read_sign(cursor)?;
    let apply_sign = |x: f64| if negative { -x } else { x };

    if let Some(special) = read_special(cursor)? {
        return Ok(Value::Float(apply_sign(special)));
    }

    let hex = match presentation {
        Presentation::HexFloat => {
            eat_hex_prefix(cursor)?;
            true
        }
        Presentation::Scientific | Presentation::Fixed => false,
        _ => eat_hex_prefix(cursor)?,
    };
    let parsed = if hex {
        read_hex(cursor, kind)?
    } else {
        read_decimal(cursor, ctx, kind)?
    };

    if ctx.float_overflow() == FloatOverflow::Strict {
        if parsed.value.is_infinite() {
            return Err(ScanError::out_of_range(format!(
                "value overflows {}",
                kind_name(kind)
            )));
        }
        if parsed.value == 0.0 && parsed.nonzero_mantissa {
            return Err(ScanError::out_of_range(format!(
                "value underflows {}",
                kind_name(kind)
            )));
        }
    }
    Ok(Value::Float(apply_sign(parsed.value)))
}

fn kind_name(kind: FloatKind) -> &'static str {
    match kind {
        FloatKind::F32 => "f32",
        FloatKind::F64 => "f64",
    }
}

/// Unsigned magnitude plus whether any mantissa digit was nonzero.
struct Parsed {
    value: f64,
    nonzero_mantissa: bool,
}

fn read_special<U: CodeUnit>(cursor: &mut Cursor<'_, U>) -> Result<Option<f64>, ScanError> {
    let caseless = |a: char, b: char| a.eq_ignore_ascii_case(&b);
    if cursor.eat_word("infinity", caseless)? || cursor.eat_word("inf", caseless)? {
        return Ok(Some(f64::INFINITY));
    }
    if !cursor.eat_word("nan", caseless)? {
        return Ok(None);
    }
    let snapshot = *cursor;
    if cursor.eat_char('(')? {
        cursor.eat_while(|ch| ch.is_ascii_alphanumeric() || ch == '_')?;
        if !cursor.eat_char(')')? {
            *cursor = snapshot;
        }
    }
    Ok(Some(f64::NAN))
}

/// Consume `0x` (either case) when a hex digit, or `.` and a hex digit,
/// follows it. Otherwise nothing is consumed and the `0` is left for the
/// decimal path.
fn eat_hex_prefix<U: CodeUnit>(cursor: &mut Cursor<'_, U>) -> Result<bool, ScanError> {
    let snapshot = *cursor;
    if cursor.eat_char('0')? && cursor.eat_if(|ch| ch == 'x' || ch == 'X')?.is_some() {
        let mut lookahead = *cursor;
        lookahead.eat_char('.')?;
        if peek_digit(&lookahead, 16)?.is_some() {
            return Ok(true);
        }
    }
    *cursor = snapshot;
    Ok(false)
}

/// Push ASCII digits onto `out`, skipping separators between digits.
///
/// Returns the number of digits pushed.
fn push_digits<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    out: &mut String,
    separator: Option<char>,
) -> Result<usize, ScanError> {
    let mut digits = 0;
    loop {
        if let Some(ch) = cursor.eat_if(|ch| ch.is_ascii_digit())? {
            out.push(ch);
            digits += 1;
            continue;
        }
        if let Some(sep) = separator {
            let mut probe = *cursor;
            if digits > 0 && probe.eat_char(sep)? && peek_digit(&probe, 10)?.is_some() {
                *cursor = probe;
                continue;
            }
        }
        return Ok(digits);
    }
}

/// Consume an exponent: `marker [+-] digits`. Nothing is consumed when no
/// digit follows the marker.
fn read_exponent<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    markers: [char; 2],
) -> Result<Option<i64>, ScanError> {
    let snapshot = *cursor;
    if cursor.eat_if(|ch| markers.contains(&ch))?.is_none() {
        return Ok(None);
    }
    let negative = read_sign(cursor)?;
    let mut exponent: i64 = 0;
    let mut digits = 0;
    while let Some(digit) = peek_digit(cursor, 10)? {
        cursor.next_char()?;
        digits += 1;
        exponent = (exponent * 10 + i64::from(digit)).min(EXPONENT_CAP);
    }
    if digits == 0 {
        *cursor = snapshot;
        return Ok(None);
    }
    Ok(Some(if negative { -exponent } else { exponent }))
}

fn read_decimal<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    ctx: &ReadContext<'_>,
    kind: FloatKind,
) -> Result<Parsed, ScanError> {
    let start = *cursor;
    let mut text = String::new();
    let mut digits = push_digits(cursor, &mut text, ctx.thousands_sep())?;
    if cursor.eat_char(ctx.decimal_point())? {
        text.push('.');
        digits += push_digits(cursor, &mut text, None)?;
    }
    if digits == 0 {
        *cursor = start;
        return Err(ScanError::invalid_value("expected a floating-point number"));
    }
    let nonzero_mantissa = text.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if let Some(exponent) = read_exponent(cursor, ['e', 'E'])? {
        text.push('e');
        text.push_str(&exponent.to_string());
    }

    let value = match kind {
        FloatKind::F32 => text.parse::<f32>().map(f64::from),
        FloatKind::F64 => text.parse::<f64>(),
    }
    .map_err(|err| ScanError::invalid_value(format!("malformed number '{text}': {err}")))?;
    Ok(Parsed {
        value,
        nonzero_mantissa,
    })
}

/// Hex mantissa as `mantissa * 2^exponent`, truncated to 64 bits.
#[derive(Default)]
struct HexMantissa {
    mantissa: u64,
    /// A nonzero digit was dropped below the kept bits.
    sticky: bool,
    exponent: i64,
}

impl HexMantissa {
    fn push(&mut self, digit: u32, fractional: bool) {
        if self.mantissa >> 60 == 0 {
            self.mantissa = (self.mantissa << 4) | u64::from(digit);
            if fractional {
                self.exponent -= 4;
            }
        } else {
            self.sticky |= digit != 0;
            if !fractional {
                self.exponent += 4;
            }
        }
    }
}

fn read_hex<U: CodeUnit>(cursor: &mut Cursor<'_, U>, kind: FloatKind) -> Result<Parsed, ScanError> {
    let start = *cursor;
    let mut hex = HexMantissa::default();
    let mut digits = 0;
    while let Some(digit) = peek_digit(cursor, 16)? {
        cursor.next_char()?;
        hex.push(digit, false);
        digits += 1;
    }
    if cursor.eat_char('.')? {
        while let Some(digit) = peek_digit(cursor, 16)? {
            cursor.next_char()?;
            hex.push(digit, true);
            digits += 1;
        }
    }
    if digits == 0 {
        *cursor = start;
        return Err(ScanError::invalid_value("expected hexadecimal digits"));
    }
    if let Some(exponent) = read_exponent(cursor, ['p', 'P'])? {
        hex.exponent = hex.exponent.saturating_add(exponent);
    }

    let nonzero_mantissa = hex.mantissa != 0;
    let format = BinaryFormat::of(kind);
    let value = match round_to_format(&hex, format) {
        Rounded::Zero => 0.0,
        Rounded::Overflow => f64::INFINITY,
        Rounded::Finite { mantissa, exponent } => format.compose(mantissa, exponent),
    };
    Ok(Parsed {
        value,
        nonzero_mantissa,
    })
}

/// IEEE 754 binary interchange format parameters.
#[derive(Copy, Clone, Debug)]
struct BinaryFormat {
    kind: FloatKind,
    /// Significand bits, hidden bit included.
    precision: i64,
    /// Exponent of the smallest subnormal's unit.
    min_exponent: i64,
    /// Values at or above `2^max_exponent` overflow.
    max_exponent: i64,
}

impl BinaryFormat {
    fn of(kind: FloatKind) -> Self {
        match kind {
            FloatKind::F32 => Self {
                kind,
                precision: 24,
                min_exponent: -149,
                max_exponent: 128,
            },
            FloatKind::F64 => Self {
                kind,
                precision: 53,
                min_exponent: -1074,
                max_exponent: 1024,
            },
        }
    }

    /// Assemble `mantissa * 2^exponent`, which must be representable.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "round_to_format bounds both fields to the format's ranges"
    )]
    fn compose(self, mantissa: u64, exponent: i64) -> f64 {
        let fraction_bits = self.precision - 1;
        match self.kind {
            FloatKind::F64 => {
                let bits = if mantissa >> fraction_bits == 0 {
                    mantissa
                } else {
                    let biased = (exponent + fraction_bits + 1023) as u64;
                    (biased << fraction_bits) | (mantissa & ((1u64 << fraction_bits) - 1))
                };
                f64::from_bits(bits)
            }
            FloatKind::F32 => {
                let mantissa = mantissa as u32;
                let bits = if mantissa >> fraction_bits == 0 {
                    mantissa
                } else {
                    let biased = (exponent + fraction_bits + 127) as u32;
                    (biased << fraction_bits) | (mantissa & ((1u32 << fraction_bits) - 1))
                };
                f64::from(f32::from_bits(bits))
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Rounded {
    Zero,
    Overflow,
    Finite { mantissa: u64, exponent: i64 },
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "shift amounts are bounded by the checks before each cast"
)]
fn round_to_format(hex: &HexMantissa, format: BinaryFormat) -> Rounded {
    if hex.mantissa == 0 {
        return Rounded::Zero;
    }
    let bit_len = i64::from(64 - hex.mantissa.leading_zeros());
    let top = hex.exponent + bit_len - 1;
    let mut exponent = (top - (format.precision - 1)).max(format.min_exponent);
    let shift = exponent - hex.exponent;

    let mut mantissa = if shift <= 0 {
        hex.mantissa << (-shift) as u32
    } else if shift > 64 {
        0
    } else {
        let shift = shift as u32;
        let kept = hex.mantissa.checked_shr(shift).unwrap_or(0);
        let half = (hex.mantissa >> (shift - 1)) & 1 == 1;
        let rest_mask = (1u64 << (shift - 1)) - 1;
        let rest = hex.mantissa & rest_mask != 0 || hex.sticky;
        if half && (rest || kept & 1 == 1) {
            kept + 1
        } else {
            kept
        }
    };

    if mantissa >> format.precision != 0 {
        mantissa >>= 1;
        exponent += 1;
    }
    if mantissa == 0 {
        return Rounded::Zero;
    }
    let top = exponent + i64::from(64 - mantissa.leading_zeros()) - 1;
    if top >= format.max_exponent {
        return Rounded::Overflow;
    }
    Rounded::Finite { mantissa, exponent }
}
