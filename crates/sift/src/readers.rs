//! Value readers.
//!
//! One reader per argument category. Every reader consumes a prefix of the
//! input through a [`Cursor`] and either produces a [`Value`] or fails with
//! a [`ScanError`]. A reader never consumes a code point it cannot use: it
//! peeks before stepping and restores a snapshot when a speculative step
//! (a prefix, an exponent, a grouping separator) does not pan out.
//!
//! [`read_directive`] is the single entry point the interpreter uses. It
//! skips leading whitespace where the mode calls for it, applies the
//! directive's width as a cursor limit, and leaves the caller's cursor at
//! the field start when the reader fails.

mod boolean;
mod character;
mod float;
mod int;
mod string;

use sift_core::{CodeUnit, Cursor};
use tracing::trace;

use crate::args::{ArgKind, Value};
use crate::format::Directive;
use crate::locale::is_classic_space;
use crate::options::{FloatOverflow, ScanOptions, WhitespaceMode};
use crate::ScanError;

/// Directive-specific view of the scan options.
pub(crate) struct ReadContext<'o> {
    options: &'o ScanOptions,
    localized: bool,
    grouping: bool,
    width: Option<usize>,
}

impl<'o> ReadContext<'o> {
    pub(crate) fn new(options: &'o ScanOptions, directive: &Directive) -> Self {
        Self {
            options,
            localized: directive.is_localized(),
            grouping: directive.accepts_grouping(),
            width: directive.width,
        }
    }

    fn decimal_point(&self) -> char {
        if self.localized {
            self.options.locale.decimal_point()
        } else {
            '.'
        }
    }

    /// Separator accepted between integer digits, if grouping is enabled.
    fn thousands_sep(&self) -> Option<char> {
        if !self.grouping {
            None
        } else if self.localized {
            self.options.locale.thousands_sep()
        } else {
            Some(',')
        }
    }

    fn truename(&self) -> &str {
        if self.localized {
            self.options.locale.truename()
        } else {
            "true"
        }
    }

    fn falsename(&self) -> &str {
        if self.localized {
            self.options.locale.falsename()
        } else {
            "false"
        }
    }

    fn is_space(&self, ch: char) -> bool {
        if self.localized {
            self.options.locale.is_space(ch)
        } else {
            is_classic_space(ch)
        }
    }

    fn float_overflow(&self) -> FloatOverflow {
        self.options.float_overflow
    }
}

/// Read one directive into a value of `kind`.
///
/// On success `cursor` is past the field. On failure it is at the field
/// start, after any whitespace that was skipped.
pub(crate) fn read_directive<'a, U: CodeUnit>(
    cursor: &mut Cursor<'a, U>,
    directive: &Directive,
    kind: ArgKind,
    options: &ScanOptions,
) -> Result<Value<'a, U>, ScanError> {
    let ctx = ReadContext::new(options, directive);
    if options.whitespace == WhitespaceMode::Collapse && kind.skips_whitespace() {
        cursor.eat_while(|ch| ctx.is_space(ch))?;
    }
    if cursor.is_eof() {
        return Err(ScanError::end_of_range());
    }

    let mut field = cursor.with_width(directive.width);
    if field.peek()?.is_none() {
        return Err(ScanError::invalid_value(
            "field width splits a multi-unit code point",
        ));
    }

    let presentation = &directive.presentation;
    let value = match kind {
        ArgKind::Int(int_kind) => int::read(&mut field, &ctx, int_kind, presentation)?,
        ArgKind::Float(float_kind) => float::read(&mut field, &ctx, float_kind, presentation)?,
        ArgKind::Bool => boolean::read(&mut field, &ctx, presentation)?,
        ArgKind::Char | ArgKind::CodePoint => character::read(&mut field, kind)?,
        ArgKind::String | ArgKind::Span => string::read(&mut field, &ctx, kind, presentation)?,
    };
    trace!(
        kind = kind.name(),
        start = cursor.pos(),
        end = field.pos(),
        "read field"
    );
    cursor.sync(&field);
    Ok(value)
}

/// Consume an optional `+` or `-`. Returns `true` for `-`.
fn read_sign<U: CodeUnit>(cursor: &mut Cursor<'_, U>) -> Result<bool, ScanError> {
    Ok(cursor.eat_if(|ch| ch == '+' || ch == '-')? == Some('-'))
}

/// Value of the next code point as a digit in `radix`, without consuming it.
fn peek_digit<U: CodeUnit>(cursor: &Cursor<'_, U>, radix: u32) -> Result<Option<u32>, ScanError> {
    Ok(cursor.peek()?.and_then(|decoded| decoded.ch.to_digit(radix)))
}
