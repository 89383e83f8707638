//! UTF-8 validation and decoding.
//!
//! Accepts exactly the well-formed sequences of Unicode Table 3-7: no
//! overlong forms, no encoded surrogates, nothing above U+10FFFF.

use super::{DecodeError, Encoding};

/// Number of bytes in the sequence led by `lead`, or `0` if `lead` can never
/// start a sequence (continuation bytes, `0xC0`, `0xC1`, `0xF5..=0xFF`).
#[inline]
pub fn sequence_length(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode one code point starting at `units[*pos]`.
///
/// On success `*pos` is advanced past the whole sequence. On failure `*pos`
/// is unchanged.
///
/// # Panics
///
/// Panics if `*pos >= units.len()`; callers check for the end first.
pub fn decode_next(units: &[u8], pos: &mut usize) -> Result<char, DecodeError> {
    let start = *pos;
    assert!(start < units.len(), "decode_next called at end of input");

    let lead = units[start];
    let len = sequence_length(lead);
    if len == 0 {
        return Err(DecodeError::InvalidLeadUnit {
            encoding: Encoding::Utf8,
            unit: u32::from(lead),
        });
    }
    if len == 1 {
        *pos = start + 1;
        return Ok(char::from(lead));
    }

    let available = units.len() - start;
    // Validate whatever continuation bytes are present before reporting
    // truncation, so `E2 41` is an invalid continuation, not a short read.
    let present = &units[start + 1..start + len.min(available)];
    if let Some(&bad) = present.iter().find(|&&b| !is_continuation(b)) {
        return Err(DecodeError::InvalidContinuation {
            unit: u32::from(bad),
        });
    }
    if available < len {
        return Err(DecodeError::Truncated {
            encoding: Encoding::Utf8,
            expected: len,
            found: available,
        });
    }

    let mut code_point = u32::from(lead) & (0x7F >> len);
    for &byte in present {
        code_point = (code_point << 6) | u32::from(byte & 0x3F);
    }

    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if code_point < min {
        return Err(DecodeError::Overlong { code_point });
    }
    if (0xD800..=0xDFFF).contains(&code_point) {
        return Err(DecodeError::SurrogateCodePoint {
            encoding: Encoding::Utf8,
            code_point,
        });
    }
    let Some(ch) = char::from_u32(code_point) else {
        return Err(DecodeError::OutOfRange {
            encoding: Encoding::Utf8,
            code_point,
        });
    };

    *pos = start + len;
    Ok(ch)
}

/// Number of code points in `units`.
pub fn code_point_distance(units: &[u8]) -> Result<usize, DecodeError> {
    super::code_point_distance(units)
}
