use super::*;
use pretty_assertions::assert_eq;

#[test]
fn sequence_length_by_unit_class() {
    assert_eq!(sequence_length(0x0041), 1);
    assert_eq!(sequence_length(0xFFFF), 1);
    assert_eq!(sequence_length(0xD800), 2);
    assert_eq!(sequence_length(0xDBFF), 2);
    assert_eq!(sequence_length(0xDC00), 0);
    assert_eq!(sequence_length(0xDFFF), 0);
}

#[test]
fn surrogate_offset_maps_first_pair_to_first_supplementary() {
    assert_eq!(combine(0xD800, 0xDC00), 0x1_0000);
    assert_eq!(combine(0xDBFF, 0xDFFF), 0x10_FFFF);
}

#[test]
fn decodes_bmp_unit() {
    let units = [0x20AC];
    let mut pos = 0;
    assert_eq!(decode_next(&units, &mut pos), Ok('€'));
    assert_eq!(pos, 1);
}

#[test]
fn decodes_surrogate_pair() {
    let units: Vec<u16> = "😀".encode_utf16().collect();
    let mut pos = 0;
    assert_eq!(decode_next(&units, &mut pos), Ok('😀'));
    assert_eq!(pos, 2);
}

#[test]
fn lone_lead_at_end_keeps_cursor() {
    let units = [0x0061, 0xD800];
    let mut pos = 1;
    assert_eq!(
        decode_next(&units, &mut pos),
        Err(DecodeError::LoneLeadSurrogate)
    );
    assert_eq!(pos, 1);
}

#[test]
fn lead_followed_by_non_trail_is_lone() {
    let units = [0xD800, 0x0041];
    let mut pos = 0;
    assert_eq!(
        decode_next(&units, &mut pos),
        Err(DecodeError::LoneLeadSurrogate)
    );
    assert_eq!(pos, 0);
}

#[test]
fn lone_trail_fails_immediately() {
    let units = [0xDC00, 0x0041];
    let mut pos = 0;
    assert_eq!(
        decode_next(&units, &mut pos),
        Err(DecodeError::LoneTrailSurrogate)
    );
    assert_eq!(pos, 0);
}

#[test]
fn distance_counts_pairs_once() {
    let units: Vec<u16> = "a😀b".encode_utf16().collect();
    assert_eq!(units.len(), 4);
    assert_eq!(code_point_distance(&units), Ok(3));
}

#[test]
fn distance_discards_partial_count() {
    let units = [0x0061, 0x0062, 0xDC00];
    assert_eq!(
        code_point_distance(&units),
        Err(DecodeError::LoneTrailSurrogate)
    );
}
