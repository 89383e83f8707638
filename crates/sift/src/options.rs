//! Per-scan configuration.

use crate::Locale;

/// How whitespace in literal format text matches the input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WhitespaceMode {
    /// A whitespace run in the format matches any amount of input
    /// whitespace, including none. Numeric, boolean and word readers skip
    /// leading whitespace.
    #[default]
    Collapse,
    /// Every format character, whitespace included, must match exactly one
    /// input character. No reader skips whitespace.
    Exact,
}

/// What the float reader does when the text is out of the target range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloatOverflow {
    /// Overflow yields the correctly signed infinity, underflow yields zero.
    #[default]
    Permissive,
    /// Overflow to infinity and underflow of a nonzero mantissa to zero fail
    /// with `ValueOutOfRange`. Spelled-out infinities are still accepted.
    Strict,
}

/// Options threaded through every reader of one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub locale: Locale,
    pub whitespace: WhitespaceMode,
    /// Fail when input remains after the last format piece.
    pub consume_all: bool,
    pub float_overflow: FloatOverflow,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_whitespace(mut self, mode: WhitespaceMode) -> Self {
        self.whitespace = mode;
        self
    }

    #[must_use]
    pub fn with_consume_all(mut self, enabled: bool) -> Self {
        self.consume_all = enabled;
        self
    }

    #[must_use]
    pub fn with_float_overflow(mut self, mode: FloatOverflow) -> Self {
        self.float_overflow = mode;
        self
    }
}
