//! UTF-16 validation and decoding.

use super::DecodeError;

const LEAD_SURROGATE_MIN: u16 = 0xD800;
const LEAD_SURROGATE_MAX: u16 = 0xDBFF;
const TRAIL_SURROGATE_MIN: u16 = 0xDC00;
const TRAIL_SURROGATE_MAX: u16 = 0xDFFF;

/// Added to `(lead << 10) + trail` to land on the supplementary code point.
const SURROGATE_OFFSET: u32 = 0x1_0000u32
    .wrapping_sub((LEAD_SURROGATE_MIN as u32) << 10)
    .wrapping_sub(TRAIL_SURROGATE_MIN as u32);

#[inline]
pub fn is_lead_surrogate(unit: u16) -> bool {
    (LEAD_SURROGATE_MIN..=LEAD_SURROGATE_MAX).contains(&unit)
}

#[inline]
pub fn is_trail_surrogate(unit: u16) -> bool {
    (TRAIL_SURROGATE_MIN..=TRAIL_SURROGATE_MAX).contains(&unit)
}

/// `2` for a lead surrogate, `0` for a trail surrogate, `1` otherwise.
#[inline]
pub fn sequence_length(lead: u16) -> usize {
    if is_lead_surrogate(lead) {
        2
    } else if is_trail_surrogate(lead) {
        0
    } else {
        1
    }
}

/// Combine a surrogate pair into its code point.
#[inline]
fn combine(lead: u16, trail: u16) -> u32 {
    (u32::from(lead) << 10)
        .wrapping_add(u32::from(trail))
        .wrapping_add(SURROGATE_OFFSET)
}

/// Decode one code point starting at `units[*pos]`.
///
/// A lead surrogate must be immediately followed by a trail surrogate; a
/// trail surrogate on its own is rejected. On failure `*pos` is unchanged.
///
/// # Panics
///
/// Panics if `*pos >= units.len()`.
pub fn decode_next(units: &[u16], pos: &mut usize) -> Result<char, DecodeError> {
    let start = *pos;
    assert!(start < units.len(), "decode_next called at end of input");

    let lead = units[start];
    if is_lead_surrogate(lead) {
        let Some(&trail) = units.get(start + 1) else {
            return Err(DecodeError::LoneLeadSurrogate);
        };
        if !is_trail_surrogate(trail) {
            return Err(DecodeError::LoneLeadSurrogate);
        }
        let code_point = combine(lead, trail);
        // A valid pair always lands in U+10000..=U+10FFFF.
        let Some(ch) = char::from_u32(code_point) else {
            return Err(DecodeError::LoneLeadSurrogate);
        };
        *pos = start + 2;
        return Ok(ch);
    }
    if is_trail_surrogate(lead) {
        return Err(DecodeError::LoneTrailSurrogate);
    }

    let Some(ch) = char::from_u32(u32::from(lead)) else {
        return Err(DecodeError::LoneTrailSurrogate);
    };
    *pos = start + 1;
    Ok(ch)
}

/// Number of code points in `units`.
pub fn code_point_distance(units: &[u16]) -> Result<usize, DecodeError> {
    super::code_point_distance(units)
}

#[cfg(test)]
mod tests;
