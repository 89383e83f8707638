//! Caller-facing scan results.
//!
//! A scan either binds every argument or none: [`ScanResult`] holds a
//! `Result<T, ScanError>`, so values parsed before a failing directive are
//! never exposed. The remainder is reported either way.

use sift_core::{CodeUnit, View};

use crate::args::ScanArgs;
use crate::interpreter::VScanOutcome;
use crate::ScanError;

/// What is left of the input after a scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Remainder<'a, U> {
    /// The unconsumed suffix of the caller's input.
    Valid(View<'a, U>),
    /// The input was a one-shot source (a stream, stdin) and cannot be
    /// addressed again.
    Unusable,
}

impl<'a, U> Remainder<'a, U> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn view(&self) -> Option<View<'a, U>> {
        match *self {
            Self::Valid(view) => Some(view),
            Self::Unusable => None,
        }
    }
}

impl<'a> Remainder<'a, u8> {
    /// The remainder as text, for UTF-8 input.
    pub fn as_str(&self) -> Option<&'a str> {
        self.view().and_then(|view| view.to_str().ok())
    }
}

/// Outcome of a typed scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult<'a, U, T> {
    remainder: Remainder<'a, U>,
    consumed: usize,
    outcome: Result<T, ScanError>,
}

impl<'a, U, T> ScanResult<'a, U, T> {
    pub(crate) fn new(
        remainder: Remainder<'a, U>,
        consumed: usize,
        outcome: Result<T, ScanError>,
    ) -> Self {
        Self {
            remainder,
            consumed,
            outcome,
        }
    }

    pub fn remainder(&self) -> Remainder<'a, U>
    where
        U: Copy,
    {
        self.remainder
    }

    /// Code units consumed before the scan finished or stopped.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&ScanError> {
        self.outcome.as_ref().err()
    }

    /// The bound values, or `None` if the scan failed.
    pub fn values(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn into_values(self) -> Option<T> {
        self.outcome.ok()
    }

    pub fn into_result(self) -> Result<T, ScanError> {
        self.outcome
    }
}

/// Outcome of [`scan_value`](crate::scan_value): the value is always
/// present, falling back to the caller's default on failure.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueResult<'a, U, T> {
    remainder: Remainder<'a, U>,
    consumed: usize,
    value: T,
    error: Option<ScanError>,
}

impl<'a, U, T> ValueResult<'a, U, T> {
    pub(crate) fn new(
        remainder: Remainder<'a, U>,
        consumed: usize,
        outcome: Result<T, ScanError>,
        default: T,
    ) -> Self {
        let (value, error) = match outcome {
            Ok(value) => (value, None),
            Err(err) => (default, Some(err)),
        };
        Self {
            remainder,
            consumed,
            value,
            error,
        }
    }

    pub fn remainder(&self) -> Remainder<'a, U>
    where
        U: Copy,
    {
        self.remainder
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Convert raw values into `T`, all or nothing.
pub(crate) fn bind<'b, U: CodeUnit, T: ScanArgs<'b, U>>(
    outcome: VScanOutcome<'b, U>,
) -> Result<T, ScanError> {
    if let Some(err) = outcome.error {
        return Err(err);
    }
    T::from_values(outcome.values)
        .ok_or_else(|| ScanError::invalid_value("scanned values do not match the argument types"))
}
