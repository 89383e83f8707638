//! UTF-32 validation and decoding.
//!
//! Every unit is its own sequence; the only failures are surrogate values
//! and values above U+10FFFF.

use super::{DecodeError, Encoding, MAX_CODE_POINT};

/// `1` for a valid scalar value, `0` otherwise.
#[inline]
pub fn sequence_length(lead: u32) -> usize {
    usize::from(char::from_u32(lead).is_some())
}

/// Decode the code point at `units[*pos]`. On failure `*pos` is unchanged.
///
/// # Panics
///
/// Panics if `*pos >= units.len()`.
pub fn decode_next(units: &[u32], pos: &mut usize) -> Result<char, DecodeError> {
    let start = *pos;
    assert!(start < units.len(), "decode_next called at end of input");

    let unit = units[start];
    match char::from_u32(unit) {
        Some(ch) => {
            *pos = start + 1;
            Ok(ch)
        }
        None if unit > MAX_CODE_POINT => Err(DecodeError::OutOfRange {
            encoding: Encoding::Utf32,
            code_point: unit,
        }),
        None => Err(DecodeError::SurrogateCodePoint {
            encoding: Encoding::Utf32,
            code_point: unit,
        }),
    }
}

/// Number of code points in `units`.
pub fn code_point_distance(units: &[u32]) -> Result<usize, DecodeError> {
    super::code_point_distance(units)
}
