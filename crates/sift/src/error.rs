//! Scan error taxonomy.
//!
//! Every failure the engine can report is a [`ScanError`]: a kind from
//! [`ErrorKind`] plus a diagnostic message. There are no fatal errors; the
//! caller decides what to do, usually with the help of the remainder the
//! scan hands back.
//!
//! # End of Range
//!
//! Readers distinguish "the input ran out before this production could even
//! start" from the public [`ErrorKind::EndOfInput`]. That internal
//! end-of-range state lets the interpreter tell exhaustion apart from a
//! grammar mismatch while it runs. It is never observable by callers:
//! [`ScanError::kind`] reports it as `EndOfInput`.

use std::borrow::Cow;
use std::fmt;

use sift_core::DecodeError;

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed format string, or one that does not fit the argument slots.
    /// Detected before any input is read.
    InvalidFormatString,
    /// Malformed code unit sequence in the input.
    InvalidEncoding,
    /// The input does not match the expected grammar.
    InvalidScannedValue,
    /// A number does not fit the destination type.
    ValueOutOfRange,
    /// The input ended before a directive or literal could be satisfied.
    EndOfInput,
}

impl ErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            Self::InvalidFormatString => "invalid format string",
            Self::InvalidEncoding => "invalid encoding",
            Self::InvalidScannedValue => "invalid scanned value",
            Self::ValueOutOfRange => "value out of range",
            Self::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Code {
    Kind(ErrorKind),
    EndOfRange,
}

impl Code {
    fn public(self) -> ErrorKind {
        match self {
            Self::Kind(kind) => kind,
            Self::EndOfRange => ErrorKind::EndOfInput,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.public().fmt(f)
    }
}

/// A scan failure: kind plus message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ScanError {
    code: Code,
    message: Cow<'static, str>,
}

impl ScanError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Code::Kind(kind),
            message: message.into(),
        }
    }

    pub fn invalid_format(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidFormatString, message)
    }

    pub fn invalid_value(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidScannedValue, message)
    }

    pub fn out_of_range(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ValueOutOfRange, message)
    }

    pub fn end_of_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::EndOfInput, message)
    }

    /// The input ran out before a reader could start.
    pub(crate) fn end_of_range() -> Self {
        Self {
            code: Code::EndOfRange,
            message: Cow::Borrowed("input exhausted"),
        }
    }

    pub(crate) fn is_end_of_range(&self) -> bool {
        self.code == Code::EndOfRange
    }

    /// Normalize internal states before the error leaves the engine.
    #[must_use]
    pub(crate) fn into_public(self) -> Self {
        Self {
            code: Code::Kind(self.code.public()),
            message: self.message,
        }
    }

    /// Error kind. The internal end-of-range state reports as
    /// [`ErrorKind::EndOfInput`].
    pub fn kind(&self) -> ErrorKind {
        self.code.public()
    }

    /// Diagnostic message, without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DecodeError> for ScanError {
    fn from(err: DecodeError) -> Self {
        Self::new(ErrorKind::InvalidEncoding, err.to_string())
    }
}
