//! Scan entry points.
//!
//! Borrowed inputs (`&str`, slices of code units, [`View`]s) are scanned in
//! place and report a [`Remainder::Valid`] view of what is left. One-shot
//! sources ([`scan_reader`], and the console helpers in
//! [`stdin`](crate::stdin)) copy into a buffer owned by the call, so their
//! remainder is [`Remainder::Unusable`] and only owned slot types can be
//! bound.

use std::io::{self, Read};

use sift_core::{CodeUnit, View};

use crate::args::{ScanArgs, Scannable};
use crate::interpreter::vscan;
use crate::result::{bind, Remainder, ScanResult, ValueResult};
use crate::{ErrorKind, Locale, ScanError, ScanOptions};

/// An input that can be viewed as code units without copying.
pub trait ScanInput<'a> {
    type Unit: CodeUnit;

    fn into_view(self) -> View<'a, Self::Unit>;
}

impl<'a> ScanInput<'a> for &'a str {
    type Unit = u8;

    fn into_view(self) -> View<'a, u8> {
        View::from(self)
    }
}

impl<'a> ScanInput<'a> for &'a String {
    type Unit = u8;

    fn into_view(self) -> View<'a, u8> {
        View::from(self)
    }
}

impl<'a, U: CodeUnit> ScanInput<'a> for &'a [U] {
    type Unit = U;

    fn into_view(self) -> View<'a, U> {
        View::new(self)
    }
}

impl<'a, U: CodeUnit, const N: usize> ScanInput<'a> for &'a [U; N] {
    type Unit = U;

    fn into_view(self) -> View<'a, U> {
        View::new(self)
    }
}

impl<'a, U: CodeUnit> ScanInput<'a> for &'a Vec<U> {
    type Unit = U;

    fn into_view(self) -> View<'a, U> {
        View::new(self)
    }
}

impl<'a, U: CodeUnit> ScanInput<'a> for View<'a, U> {
    type Unit = U;

    fn into_view(self) -> View<'a, U> {
        self
    }
}

/// Scan `input` against `format` with default options.
///
/// ```
/// let result = sift::scan::<(String, i32), _>("answer 42", "{} {}");
/// assert!(result.is_ok());
/// assert_eq!(result.into_values(), Some(("answer".to_owned(), 42)));
/// ```
pub fn scan<'a, T, I>(input: I, format: &str) -> ScanResult<'a, I::Unit, T>
where
    I: ScanInput<'a>,
    T: ScanArgs<'a, I::Unit>,
{
    scan_with(&ScanOptions::default(), input, format)
}

/// Scan with explicit options.
pub fn scan_with<'a, T, I>(
    options: &ScanOptions,
    input: I,
    format: &str,
) -> ScanResult<'a, I::Unit, T>
where
    I: ScanInput<'a>,
    T: ScanArgs<'a, I::Unit>,
{
    let input = input.into_view();
    let outcome = vscan(options, input, format, &T::kinds());
    let remainder = Remainder::Valid(input.subspan(outcome.consumed));
    let consumed = outcome.consumed;
    ScanResult::new(remainder, consumed, bind(outcome))
}

/// Scan with `locale` for directives carrying the `L` flag.
pub fn scan_localized<'a, T, I>(
    locale: &Locale,
    input: I,
    format: &str,
) -> ScanResult<'a, I::Unit, T>
where
    I: ScanInput<'a>,
    T: ScanArgs<'a, I::Unit>,
{
    let options = ScanOptions::default().with_locale(locale.clone());
    scan_with(&options, input, format)
}

/// Scan a single value with the `{}` directive.
///
/// On failure the result carries `default`, never a partially parsed value.
pub fn scan_value<'a, T, I>(input: I, default: T) -> ValueResult<'a, I::Unit, T>
where
    I: ScanInput<'a>,
    T: Scannable<'a, I::Unit>,
{
    let input = input.into_view();
    let outcome = vscan(&ScanOptions::default(), input, "{}", &[T::KIND]);
    let remainder = Remainder::Valid(input.subspan(outcome.consumed));
    let consumed = outcome.consumed;
    let bound = bind::<_, (T,)>(outcome).map(|(value,)| value);
    ValueResult::new(remainder, consumed, bound, default)
}

/// Scan everything `reader` yields.
///
/// The stream is read to the end into a buffer owned by this call, so the
/// remainder is [`Remainder::Unusable`] and `T` may not borrow from the
/// input. Read failures surface as `EndOfInput`.
pub fn scan_reader<T, R>(mut reader: R, format: &str) -> ScanResult<'static, u8, T>
where
    R: Read,
    T: for<'b> ScanArgs<'b, u8>,
{
    let mut buffer = Vec::new();
    if let Err(err) = reader.read_to_end(&mut buffer) {
        return ScanResult::new(Remainder::Unusable, 0, Err(io_error(&err)));
    }
    scan_owned(&ScanOptions::default(), &buffer, format)
}

/// Scan a buffer that dies with the call.
pub(crate) fn scan_owned<T>(
    options: &ScanOptions,
    buffer: &[u8],
    format: &str,
) -> ScanResult<'static, u8, T>
where
    T: for<'b> ScanArgs<'b, u8>,
{
    let outcome = vscan(options, View::new(buffer), format, &T::kinds());
    let consumed = outcome.consumed;
    ScanResult::new(Remainder::Unusable, consumed, bind(outcome))
}

pub(crate) fn io_error(err: &io::Error) -> ScanError {
    let kind = if err.kind() == io::ErrorKind::InvalidData {
        ErrorKind::InvalidEncoding
    } else {
        ErrorKind::EndOfInput
    };
    ScanError::new(kind, format!("read failed: {err}"))
}
