//! Code-point cursor over a bounded view.
//!
//! The cursor steps through a `&[U]` one decoded code point at a time.
//! It is [`Copy`], so readers take a snapshot before a speculative step and
//! restore it when the step is rejected; nothing is ever consumed that a
//! reader could not use.
//!
//! # Limits
//!
//! A cursor has a hard `end` (the end of the underlying units) and a soft
//! `limit` that a reader can lower for a width-restricted field with
//! [`Cursor::with_width`]. Every lookahead respects the limit, so a
//! multi-unit code point straddling the limit is reported as end of input
//! rather than split.

use crate::unicode::{CodeUnit, DecodeError};
use crate::View;

/// One decoded code point and the number of units it occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub ch: char,
    pub len: usize,
}

/// `Copy` cursor over code units of encoding `U`.
#[derive(Debug)]
pub struct Cursor<'a, U> {
    units: &'a [U],
    pos: usize,
    limit: usize,
}

impl<U> Clone for Cursor<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Cursor<'_, U> {}

impl<'a, U: CodeUnit> Cursor<'a, U> {
    /// Create a cursor at the start of `view`.
    pub fn new(view: View<'a, U>) -> Self {
        let units = view.as_slice();
        Self {
            units,
            pos: 0,
            limit: units.len(),
        }
    }

    /// Current unit offset from the start of the view.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move back to an earlier snapshot position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is ahead of the current position.
    #[inline]
    pub fn rewind(&mut self, pos: usize) {
        assert!(
            pos <= self.pos,
            "cursor may only rewind (from {} to {pos})",
            self.pos
        );
        self.pos = pos;
    }

    /// `true` once the cursor reached its limit.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.limit
    }

    /// A copy of this cursor that can read at most `width` more units.
    #[must_use]
    pub fn with_width(&self, width: Option<usize>) -> Self {
        let limit = match width {
            Some(w) => self.limit.min(self.pos.saturating_add(w)),
            None => self.limit,
        };
        Self { limit, ..*self }
    }

    /// Adopt the position of a cursor derived from this one (e.g. by
    /// [`with_width`](Self::with_width)), keeping this cursor's limit.
    #[inline]
    pub fn sync(&mut self, other: &Self) {
        debug_assert!(
            other.pos >= self.pos,
            "cursor positions never move backwards across readers"
        );
        self.pos = other.pos;
    }

    /// The units between `start` and the current position.
    pub fn consumed_since(&self, start: usize) -> View<'a, U> {
        View::from_bounds(self.units, start, self.pos)
    }

    /// Everything from the current position to the limit.
    pub fn rest_within_limit(&self) -> &'a [U] {
        &self.units[self.pos..self.limit]
    }

    /// Decode the next code point without consuming it.
    ///
    /// `Ok(None)` at the limit. A sequence cut by the width limit is treated
    /// as the limit.
    pub fn peek(&self) -> Result<Option<Decoded>, DecodeError> {
        if self.is_eof() {
            return Ok(None);
        }
        let mut next = self.pos;
        let ch = U::decode_next(self.units, &mut next)?;
        if next > self.limit {
            return Ok(None);
        }
        Ok(Some(Decoded {
            ch,
            len: next - self.pos,
        }))
    }

    /// Decode and consume the next code point.
    pub fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        let Some(decoded) = self.peek()? else {
            return Ok(None);
        };
        self.pos += decoded.len;
        Ok(Some(decoded.ch))
    }

    /// Consume the next code point if `pred` accepts it.
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Result<Option<char>, DecodeError> {
        match self.peek()? {
            Some(decoded) if pred(decoded.ch) => {
                self.pos += decoded.len;
                Ok(Some(decoded.ch))
            }
            _ => Ok(None),
        }
    }

    /// Consume `expected` if it is next. Case-sensitive.
    pub fn eat_char(&mut self, expected: char) -> Result<bool, DecodeError> {
        Ok(self.eat_if(|ch| ch == expected)?.is_some())
    }

    /// Consume `units` if the input continues with exactly those units.
    ///
    /// Compares raw units without decoding, so `units` must be a complete
    /// encoded sequence; nothing is consumed on mismatch.
    pub fn eat_units(&mut self, units: &[U]) -> bool {
        if self.rest_within_limit().starts_with(units) {
            self.pos += units.len();
            true
        } else {
            false
        }
    }

    /// Consume code points while `pred` accepts them.
    ///
    /// Returns the number of code points consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> Result<usize, DecodeError> {
        let mut count = 0;
        while self.eat_if(&pred)?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// Consume `word` if the input starts with it, comparing code points
    /// with `eq`. On mismatch nothing is consumed.
    pub fn eat_word(
        &mut self,
        word: &str,
        eq: impl Fn(char, char) -> bool,
    ) -> Result<bool, DecodeError> {
        let snapshot = *self;
        for expected in word.chars() {
            if self.eat_if(|ch| eq(ch, expected))?.is_none() {
                *self = snapshot;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Advance to the next `\n` unit or the limit.
    ///
    /// The newline itself is not consumed. Uses a byte search for UTF-8.
    pub fn eat_until_newline(&mut self) {
        let rest = self.rest_within_limit();
        self.pos += U::find_newline(rest).unwrap_or(rest.len());
    }
}
