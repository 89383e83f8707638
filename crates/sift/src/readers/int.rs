//! Integer reader.
//!
//! `[+-] [prefix] digit ([sep] digit)*`. The magnitude is accumulated in a
//! `u128` and checked against the destination type after every digit, so
//! overflow is reported as soon as it happens.

use sift_core::{CodeUnit, Cursor};

use super::{peek_digit, read_sign, ReadContext};
use crate::args::{IntKind, Value};
use crate::format::Presentation;
use crate::ScanError;

pub(super) fn read<'a, U: CodeUnit>(
    cursor: &mut Cursor<'a, U>,
    ctx: &ReadContext<'_>,
    kind: IntKind,
    presentation: &Presentation,
) -> Result<Value<'a, U>, ScanError> {
    let negative = read_sign(cursor)?;
    if negative && (!kind.is_signed() || *presentation == Presentation::Unsigned) {
        return Err(ScanError::invalid_value(format!(
            "minus sign is not allowed for an unsigned {} field",
            kind.name()
        )));
    }

    let radix = read_radix(cursor, presentation)?;
    let limit = kind.max_magnitude(negative);
    let magnitude = read_magnitude(cursor, radix, ctx.thousands_sep(), limit, kind)?;

    if !kind.is_signed() {
        return Ok(Value::Unsigned(magnitude));
    }
    let signed = if negative {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };
    signed
        .map(Value::Signed)
        .ok_or_else(|| out_of_range(kind))
}

fn out_of_range(kind: IntKind) -> ScanError {
    ScanError::out_of_range(format!("value out of range for {}", kind.name()))
}

/// Pick the radix for `presentation`, consuming a base prefix if present.
fn read_radix<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    presentation: &Presentation,
) -> Result<u32, ScanError> {
    Ok(match presentation {
        Presentation::Binary => {
            eat_prefix(cursor, 'b', 2)?;
            2
        }
        Presentation::Octal => {
            eat_prefix(cursor, 'o', 8)?;
            8
        }
        Presentation::Hex => {
            eat_prefix(cursor, 'x', 16)?;
            16
        }
        Presentation::Default | Presentation::Detect => detect_radix(cursor)?,
        _ => 10,
    })
}

/// Consume `0<letter>` (either case) when a digit in `radix` follows it.
fn eat_prefix<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    letter: char,
    radix: u32,
) -> Result<bool, ScanError> {
    let snapshot = *cursor;
    if cursor.eat_char('0')?
        && cursor.eat_if(|ch| ch.eq_ignore_ascii_case(&letter))?.is_some()
        && peek_digit(cursor, radix)?.is_some()
    {
        return Ok(true);
    }
    *cursor = snapshot;
    Ok(false)
}

/// `0x` is hex, `0b` binary, `0o` or a leading `0` before a digit octal,
/// anything else decimal.
fn detect_radix<U: CodeUnit>(cursor: &mut Cursor<'_, U>) -> Result<u32, ScanError> {
    for (letter, radix) in [('x', 16), ('b', 2), ('o', 8)] {
        if eat_prefix(cursor, letter, radix)? {
            return Ok(radix);
        }
    }
    let mut probe = *cursor;
    if probe.eat_char('0')? && peek_digit(&probe, 10)?.is_some() {
        return Ok(8);
    }
    Ok(10)
}

fn read_magnitude<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    radix: u32,
    separator: Option<char>,
    limit: u128,
    kind: IntKind,
) -> Result<u128, ScanError> {
    let mut magnitude: u128 = 0;
    let mut digits = 0usize;
    loop {
        if let Some(digit) = peek_digit(cursor, radix)? {
            cursor.next_char()?;
            digits += 1;
            magnitude = magnitude
                .checked_mul(u128::from(radix))
                .and_then(|m| m.checked_add(u128::from(digit)))
                .filter(|&m| m <= limit)
                .ok_or_else(|| out_of_range(kind))?;
            continue;
        }
        // A separator counts only between two digits.
        if let Some(sep) = separator {
            if digits > 0 {
                let mut probe = *cursor;
                if probe.eat_char(sep)? && peek_digit(&probe, radix)?.is_some() {
                    *cursor = probe;
                    continue;
                }
            }
        }
        break;
    }
    if digits == 0 {
        return Err(ScanError::invalid_value(format!(
            "expected base-{radix} digits"
        )));
    }
    Ok(magnitude)
}

#[cfg(test)]
mod tests;
