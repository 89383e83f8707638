//! Locale conventions consulted by localized directives.
//!
//! A [`Locale`] is an explicit value, not ambient state: it travels inside
//! [`ScanOptions`](crate::ScanOptions) and is only consulted by directives
//! that carry the `L` flag. Everything else uses the classic ("C")
//! conventions.

use std::borrow::Cow;

/// Numeric punctuation, boolean spellings and whitespace class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    decimal_point: char,
    /// `None` for locales that do not group digits.
    thousands_sep: Option<char>,
    truename: Cow<'static, str>,
    falsename: Cow<'static, str>,
    unicode_whitespace: bool,
}

impl Default for Locale {
    fn default() -> Self {
        Self::classic()
    }
}

impl Locale {
    /// The "C" locale: `.` radix point, `,` grouping, `true`/`false`,
    /// ASCII whitespace.
    pub fn classic() -> Self {
        Self {
            decimal_point: '.',
            thousands_sep: Some(','),
            truename: Cow::Borrowed("true"),
            falsename: Cow::Borrowed("false"),
            unicode_whitespace: false,
        }
    }

    #[must_use]
    pub fn with_decimal_point(mut self, ch: char) -> Self {
        self.decimal_point = ch;
        self
    }

    #[must_use]
    pub fn with_thousands_sep(mut self, ch: char) -> Self {
        self.thousands_sep = Some(ch);
        self
    }

    /// A locale without digit grouping: the `'` flag then accepts no
    /// separator at all for `L` directives.
    #[must_use]
    pub fn without_thousands_sep(mut self) -> Self {
        self.thousands_sep = None;
        self
    }

    #[must_use]
    pub fn with_bool_names(
        mut self,
        truename: impl Into<Cow<'static, str>>,
        falsename: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.truename = truename.into();
        self.falsename = falsename.into();
        self
    }

    /// Treat every Unicode `White_Space` character as whitespace, instead
    /// of only the ASCII set.
    #[must_use]
    pub fn with_unicode_whitespace(mut self, enabled: bool) -> Self {
        self.unicode_whitespace = enabled;
        self
    }

    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }

    pub fn thousands_sep(&self) -> Option<char> {
        self.thousands_sep
    }

    pub fn truename(&self) -> &str {
        &self.truename
    }

    pub fn falsename(&self) -> &str {
        &self.falsename
    }

    pub fn is_space(&self, ch: char) -> bool {
        if self.unicode_whitespace {
            ch.is_whitespace()
        } else {
            is_classic_space(ch)
        }
    }
}

/// C `isspace` in the classic locale: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub fn is_classic_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t'..='\r')
}
