//! Unicode validation and decoding across encoding forms.
//!
//! Each encoding form lives in its own module and exposes the same three
//! stateless operations:
//!
//! - `sequence_length(lead)`: how many code units the sequence starting with
//!   `lead` occupies, or `0` when `lead` cannot start a sequence.
//! - `decode_next(units, pos)`: decode one code point starting at `*pos` and
//!   advance `*pos` past it. On failure `*pos` is left untouched.
//! - `code_point_distance(units)`: the number of code points in `units`, or
//!   the first decoding error (the partial count is discarded).
//!
//! Malformed input is always an error. Nothing is replaced with U+FFFD.
//!
//! The [`CodeUnit`] trait maps a code unit type (`u8`, `u16`, `u32`) to its
//! encoding form so generic code can decode without knowing which one it has.

pub mod utf16;
pub mod utf32;
pub mod utf8;

use std::fmt;

use crate::View;

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Encoding form of a code unit type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
}

impl Encoding {
    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
            Self::Utf32 => "utf32",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Malformed code unit sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DecodeError {
    /// The sequence needs more units than remain before the end.
    #[error("truncated {encoding} sequence: expected {expected} code units, found {found}")]
    Truncated {
        encoding: Encoding,
        expected: usize,
        found: usize,
    },
    /// A unit that cannot start a sequence (UTF-8 continuation byte or
    /// invalid byte).
    #[error("invalid {encoding} lead code unit {unit:#x}")]
    InvalidLeadUnit { encoding: Encoding, unit: u32 },
    /// A UTF-8 byte inside a sequence that is not `0b10xx_xxxx`.
    #[error("invalid utf8 continuation byte {unit:#x}")]
    InvalidContinuation { unit: u32 },
    /// A UTF-8 sequence longer than needed for its code point.
    #[error("overlong utf8 sequence for U+{code_point:04X}")]
    Overlong { code_point: u32 },
    /// A surrogate value encoded directly (UTF-8 or UTF-32).
    #[error("{encoding} sequence encodes surrogate U+{code_point:04X}")]
    SurrogateCodePoint { encoding: Encoding, code_point: u32 },
    /// A value above U+10FFFF.
    #[error("{encoding} sequence encodes {code_point:#x}, above U+10FFFF")]
    OutOfRange { encoding: Encoding, code_point: u32 },
    /// A UTF-16 lead surrogate not followed by a trail surrogate.
    #[error("lone utf16 lead surrogate")]
    LoneLeadSurrogate,
    /// A UTF-16 trail surrogate without a preceding lead surrogate.
    #[error("lone utf16 trail surrogate")]
    LoneTrailSurrogate,
}

/// A validated Unicode scalar value.
///
/// Distinct from a code unit: a `CodePoint` may occupy up to four UTF-8
/// units or two UTF-16 units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePoint(char);

impl CodePoint {
    /// `None` for surrogates and values above U+10FFFF.
    pub fn new(value: u32) -> Option<Self> {
        char::from_u32(value).map(Self)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn to_char(self) -> char {
        self.0
    }

    /// Number of code units `self` occupies in encoding `U`.
    pub fn len_units<U: CodeUnit>(self) -> usize {
        U::len_of(self.0)
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl From<CodePoint> for char {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.value())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width storage element of one of the supported encoding forms.
///
/// Implemented for `u8` (UTF-8), `u16` (UTF-16) and `u32` (UTF-32). Sealed:
/// the engine's readers rely on exactly these three forms.
pub trait CodeUnit:
    sealed::Sealed + Copy + Default + Eq + fmt::Debug + Send + Sync + 'static
{
    /// Encoding form of this unit type.
    const ENCODING: Encoding;

    /// See [`utf8::sequence_length`] and siblings.
    fn sequence_length(self) -> usize;

    /// See [`utf8::decode_next`] and siblings.
    fn decode_next(units: &[Self], pos: &mut usize) -> Result<char, DecodeError>;

    /// Encode `ch` into `buf`, returning the used prefix.
    fn encode(ch: char, buf: &mut [Self; 4]) -> &[Self];

    /// Number of units `ch` occupies in this encoding.
    fn len_of(ch: char) -> usize;

    /// Widen to `u32` for diagnostics.
    fn to_u32(self) -> u32;

    /// Position of the first `\n` unit in `units`.
    fn find_newline(units: &[Self]) -> Option<usize> {
        let newline = u32::from(b'\n');
        units.iter().position(|&unit| unit.to_u32() == newline)
    }
}

impl CodeUnit for u8 {
    const ENCODING: Encoding = Encoding::Utf8;

    #[inline]
    fn sequence_length(self) -> usize {
        utf8::sequence_length(self)
    }

    #[inline]
    fn decode_next(units: &[Self], pos: &mut usize) -> Result<char, DecodeError> {
        utf8::decode_next(units, pos)
    }

    fn encode(ch: char, buf: &mut [Self; 4]) -> &[Self] {
        ch.encode_utf8(buf).as_bytes()
    }

    #[inline]
    fn len_of(ch: char) -> usize {
        ch.len_utf8()
    }

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    fn find_newline(units: &[Self]) -> Option<usize> {
        memchr::memchr(b'\n', units)
    }
}

impl CodeUnit for u16 {
    const ENCODING: Encoding = Encoding::Utf16;

    #[inline]
    fn sequence_length(self) -> usize {
        utf16::sequence_length(self)
    }

    #[inline]
    fn decode_next(units: &[Self], pos: &mut usize) -> Result<char, DecodeError> {
        utf16::decode_next(units, pos)
    }

    fn encode(ch: char, buf: &mut [Self; 4]) -> &[Self] {
        ch.encode_utf16(&mut buf[..2])
    }

    #[inline]
    fn len_of(ch: char) -> usize {
        ch.len_utf16()
    }

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u32 {
    const ENCODING: Encoding = Encoding::Utf32;

    #[inline]
    fn sequence_length(self) -> usize {
        utf32::sequence_length(self)
    }

    #[inline]
    fn decode_next(units: &[Self], pos: &mut usize) -> Result<char, DecodeError> {
        utf32::decode_next(units, pos)
    }

    fn encode(ch: char, buf: &mut [Self; 4]) -> &[Self] {
        buf[0] = u32::from(ch);
        &buf[..1]
    }

    #[inline]
    fn len_of(_ch: char) -> usize {
        1
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }
}

/// Number of code points in `units`, for any encoding form.
pub fn code_point_distance<U: CodeUnit>(units: &[U]) -> Result<usize, DecodeError> {
    let mut pos = 0;
    let mut count = 0;
    while pos < units.len() {
        U::decode_next(units, &mut pos)?;
        count += 1;
    }
    Ok(count)
}

impl<U: CodeUnit> View<'_, U> {
    /// Number of code points in the view.
    ///
    /// Fails on the first malformed sequence.
    pub fn code_points(&self) -> Result<usize, DecodeError> {
        code_point_distance(self.as_slice())
    }

    /// Decode the whole view into an owned `String`.
    pub fn decode_to_string(&self) -> Result<String, DecodeError> {
        let units = self.as_slice();
        let mut out = String::with_capacity(units.len());
        let mut pos = 0;
        while pos < units.len() {
            out.push(U::decode_next(units, &mut pos)?);
        }
        Ok(out)
    }
}
