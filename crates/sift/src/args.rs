//! Argument slots and scanned values.
//!
//! An argument slot is described at runtime by an [`ArgKind`], a closed tag
//! the interpreter matches to pick a reader. Readers produce a [`Value`],
//! and the [`Scannable`] trait converts it back into the caller's Rust
//! type. [`ScanArgs`] lifts that to tuples so a whole scan can be typed.

use smallvec::SmallVec;

use sift_core::{CodePoint, CodeUnit, View};

/// Destination integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl IntKind {
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128 | Self::Isize
        )
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
            Self::I128 | Self::U128 => 128,
            Self::Isize | Self::Usize => usize::BITS,
        }
    }

    /// Largest magnitude a value of this type can have with the given sign.
    ///
    /// For signed types the negative side is one larger than the positive.
    pub fn max_magnitude(self, negative: bool) -> u128 {
        let bits = self.bits();
        if !self.is_signed() {
            return if negative { 0 } else { u128::MAX >> (128 - bits) };
        }
        let positive = u128::MAX >> (129 - bits);
        if negative {
            positive + 1
        } else {
            positive
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
        }
    }
}

/// Destination float type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

/// Category of one argument slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Int(IntKind),
    Float(FloatKind),
    Bool,
    Char,
    CodePoint,
    /// Owned, decoded text.
    String,
    /// Borrowed run of input code units.
    Span,
}

impl ArgKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Int(kind) => kind.name(),
            Self::Float(FloatKind::F32) => "f32",
            Self::Float(FloatKind::F64) => "f64",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::CodePoint => "code point",
            Self::String => "string",
            Self::Span => "span",
        }
    }

    /// Readers of these kinds skip leading whitespace under
    /// [`WhitespaceMode::Collapse`](crate::WhitespaceMode::Collapse).
    pub fn skips_whitespace(self) -> bool {
        matches!(
            self,
            Self::Int(_) | Self::Float(_) | Self::Bool | Self::String | Self::Span
        )
    }
}

/// One scanned value, before conversion to the caller's type.
///
/// `f32` slots hold an `f64` that is exactly representable as `f32`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a, U> {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Bool(bool),
    Char(char),
    CodePoint(CodePoint),
    String(String),
    Span(View<'a, U>),
}

/// A Rust type that can be the destination of one directive.
pub trait Scannable<'a, U: CodeUnit>: Sized {
    const KIND: ArgKind;

    /// `None` when `value` is not of this type's category.
    fn from_value(value: Value<'a, U>) -> Option<Self>;
}

macro_rules! impl_scannable_int {
    ($($ty:ty => $kind:ident, $variant:ident;)*) => {$(
        impl<'a, U: CodeUnit> Scannable<'a, U> for $ty {
            const KIND: ArgKind = ArgKind::Int(IntKind::$kind);

            fn from_value(value: Value<'a, U>) -> Option<Self> {
                match value {
                    Value::$variant(n) => <$ty>::try_from(n).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_scannable_int! {
    i8 => I8, Signed;
    i16 => I16, Signed;
    i32 => I32, Signed;
    i64 => I64, Signed;
    i128 => I128, Signed;
    isize => Isize, Signed;
    u8 => U8, Unsigned;
    u16 => U16, Unsigned;
    u32 => U32, Unsigned;
    u64 => U64, Unsigned;
    u128 => U128, Unsigned;
    usize => Usize, Unsigned;
}

impl<'a, U: CodeUnit> Scannable<'a, U> for f64 {
    const KIND: ArgKind = ArgKind::Float(FloatKind::F64);

    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::Float(x) => Some(x),
            _ => None,
        }
    }
}

impl<'a, U: CodeUnit> Scannable<'a, U> for f32 {
    const KIND: ArgKind = ArgKind::Float(FloatKind::F32);

    #[allow(
        clippy::cast_possible_truncation,
        reason = "the float reader rounds f32 slots to f32 precision"
    )]
    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::Float(x) => Some(x as f32),
            _ => None,
        }
    }
}

impl<'a, U: CodeUnit> Scannable<'a, U> for bool {
    const KIND: ArgKind = ArgKind::Bool;

    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl<'a, U: CodeUnit> Scannable<'a, U> for char {
    const KIND: ArgKind = ArgKind::Char;

    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::Char(ch) => Some(ch),
            _ => None,
        }
    }
}

impl<'a, U: CodeUnit> Scannable<'a, U> for CodePoint {
    const KIND: ArgKind = ArgKind::CodePoint;

    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::CodePoint(cp) => Some(cp),
            _ => None,
        }
    }
}

impl<'a, U: CodeUnit> Scannable<'a, U> for String {
    const KIND: ArgKind = ArgKind::String;

    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::String(text) => Some(text),
            _ => None,
        }
    }
}

impl<'a, U: CodeUnit> Scannable<'a, U> for View<'a, U> {
    const KIND: ArgKind = ArgKind::Span;

    fn from_value(value: Value<'a, U>) -> Option<Self> {
        match value {
            Value::Span(view) => Some(view),
            _ => None,
        }
    }
}

/// Borrowed text, for UTF-8 input only. The span reader has already
/// validated the units.
impl<'a> Scannable<'a, u8> for &'a str {
    const KIND: ArgKind = ArgKind::Span;

    fn from_value(value: Value<'a, u8>) -> Option<Self> {
        match value {
            Value::Span(view) => view.to_str().ok(),
            _ => None,
        }
    }
}

/// A tuple of [`Scannable`]s, bound positionally to the format's directives.
pub trait ScanArgs<'a, U: CodeUnit>: Sized {
    /// Slot kinds in argument order.
    fn kinds() -> SmallVec<[ArgKind; 8]>;

    /// Build the tuple from values in argument order. `None` on a count or
    /// category mismatch.
    fn from_values(values: Vec<Value<'a, U>>) -> Option<Self>;
}

macro_rules! impl_scan_args {
    ($($name:ident),*) => {
        impl<'a, U: CodeUnit, $($name: Scannable<'a, U>),*> ScanArgs<'a, U> for ($($name,)*) {
            fn kinds() -> SmallVec<[ArgKind; 8]> {
                SmallVec::from_slice(&[$($name::KIND),*])
            }

            #[allow(non_snake_case, reason = "bindings reuse the type parameter names")]
            fn from_values(values: Vec<Value<'a, U>>) -> Option<Self> {
                let mut iter = values.into_iter();
                $(let $name = $name::from_value(iter.next()?)?;)*
                if iter.next().is_some() {
                    return None;
                }
                Some(($($name,)*))
            }
        }
    };
}

impl_scan_args!();
impl_scan_args!(A);
impl_scan_args!(A, B);
impl_scan_args!(A, B, C);
impl_scan_args!(A, B, C, D);
impl_scan_args!(A, B, C, D, E);
impl_scan_args!(A, B, C, D, E, F);
impl_scan_args!(A, B, C, D, E, F, G);
impl_scan_args!(A, B, C, D, E, F, G, H);
impl_scan_args!(A, B, C, D, E, F, G, H, I);
impl_scan_args!(A, B, C, D, E, F, G, H, I, J);
impl_scan_args!(A, B, C, D, E, F, G, H, I, J, K);
impl_scan_args!(A, B, C, D, E, F, G, H, I, J, K, L);
