//! Directive interpreter.
//!
//! Walks the parsed format left to right as a small state machine:
//!
//! ```text
//! MatchLiteral --ok--> next piece      Dispatch --ok--> next piece
//!      |                                   |
//!      +--mismatch--> Failed <--error------+
//! (no pieces left) --> Done
//! ```
//!
//! The first failure stops the scan; nothing after it is consumed. Values
//! are collected per argument slot and only handed out when the whole
//! format matched.

use smallvec::SmallVec;
use sift_core::{CodeUnit, Cursor, View};
use tracing::{debug, trace};

use crate::args::{ArgKind, Value};
use crate::format::{parse_format, Directive, Format, Piece};
use crate::locale::is_classic_space;
use crate::options::{ScanOptions, WhitespaceMode};
use crate::readers::read_directive;
use crate::ScanError;

/// Raw outcome of one scan, before values are bound to Rust types.
#[derive(Clone, Debug, PartialEq)]
pub struct VScanOutcome<'a, U> {
    /// Code units consumed from the start of the input.
    pub consumed: usize,
    pub error: Option<ScanError>,
    /// One value per argument slot, in slot order. Empty on failure.
    pub values: Vec<Value<'a, U>>,
}

impl<'a, U> VScanOutcome<'a, U> {
    fn failed(consumed: usize, error: ScanError) -> Self {
        Self {
            consumed,
            error: Some(error.into_public()),
            values: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

enum State<'p, 'f> {
    MatchLiteral(usize, &'p Piece<'f>),
    Dispatch(usize, &'p Directive),
    Done,
    Failed(ScanError),
}

impl<'p, 'f> State<'p, 'f> {
    fn at(pieces: &'p [Piece<'f>], index: usize) -> Self {
        match pieces.get(index) {
            None => Self::Done,
            Some(Piece::Field(directive)) => Self::Dispatch(index, directive),
            Some(piece) => Self::MatchLiteral(index, piece),
        }
    }
}

/// Scan `input` against `format` into slots of the given kinds.
///
/// The format is parsed and validated against `kinds` before any input is
/// read; a malformed format fails with `InvalidFormatString` and consumes
/// nothing.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(encoding = U::ENCODING.name(), input_len = input.size(), args = kinds.len())
)]
pub fn vscan<'a, U: CodeUnit>(
    options: &ScanOptions,
    input: View<'a, U>,
    format: &str,
    kinds: &[ArgKind],
) -> VScanOutcome<'a, U> {
    let parsed = match parse_format(format).and_then(|parsed| {
        parsed.validate(kinds)?;
        Ok(parsed)
    }) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(kind = %err.kind(), "rejected format: {}", err.message());
            return VScanOutcome::failed(0, err);
        }
    };

    let mut interpreter = Interpreter {
        options,
        kinds,
        cursor: Cursor::new(input),
        slots: (0..kinds.len()).map(|_| None).collect(),
    };
    interpreter.run(&parsed)
}

struct Interpreter<'o, 'k, 'a, U> {
    options: &'o ScanOptions,
    kinds: &'k [ArgKind],
    cursor: Cursor<'a, U>,
    slots: SmallVec<[Option<Value<'a, U>>; 8]>,
}

impl<'a, U: CodeUnit> Interpreter<'_, '_, 'a, U> {
    fn run(&mut self, format: &Format<'_>) -> VScanOutcome<'a, U> {
        let pieces = format.pieces();
        let mut state = State::at(pieces, 0);
        let error = loop {
            state = match state {
                State::MatchLiteral(index, piece) => match self.match_literal(piece) {
                    Ok(()) => State::at(pieces, index + 1),
                    Err(err) => State::Failed(err),
                },
                State::Dispatch(index, directive) => match self.dispatch(directive) {
                    Ok(()) => State::at(pieces, index + 1),
                    Err(err) => State::Failed(err),
                },
                State::Done => break self.finish(),
                State::Failed(err) => break Some(err),
            };
        };

        let consumed = self.cursor.pos();
        match error {
            None => VScanOutcome {
                consumed,
                error: None,
                values: self.slots.drain(..).flatten().collect(),
            },
            Some(err) => {
                debug!(kind = %err.kind(), consumed, "scan failed: {}", err.message());
                VScanOutcome::failed(consumed, err)
            }
        }
    }

    fn match_literal(&mut self, piece: &Piece<'_>) -> Result<(), ScanError> {
        match piece {
            Piece::Whitespace(_) if self.options.whitespace == WhitespaceMode::Collapse => {
                self.cursor.eat_while(is_classic_space)?;
                Ok(())
            }
            Piece::Literal(text) | Piece::Whitespace(text) => self.match_text(text),
            Piece::Field(_) => Ok(()),
        }
    }

    /// Match `text` against the input. On mismatch the cursor returns to
    /// where the literal started.
    ///
    /// Valid input has exactly one encoding per code point, so the literal
    /// is first compared unit by unit without decoding. Only a failed
    /// comparison walks the input code point by code point to report what
    /// was found instead.
    fn match_text(&mut self, text: &str) -> Result<(), ScanError> {
        let start = self.cursor.pos();
        let mut buf = [U::default(); 4];
        if text
            .chars()
            .all(|ch| self.cursor.eat_units(U::encode(ch, &mut buf)))
        {
            return Ok(());
        }
        self.cursor.rewind(start);

        for expected in text.chars() {
            let failure = match self.cursor.next_char() {
                Ok(Some(ch)) if ch == expected => continue,
                Ok(Some(ch)) => ScanError::invalid_value(format!(
                    "expected {expected:?} of literal {text:?}, found {ch:?}"
                )),
                Ok(None) => ScanError::end_of_input(format!(
                    "input ended while matching literal {text:?}"
                )),
                Err(err) => err.into(),
            };
            trace!(literal = text, pos = start, "literal mismatch");
            self.cursor.rewind(start);
            return Err(failure);
        }
        Ok(())
    }

    fn dispatch(&mut self, directive: &Directive) -> Result<(), ScanError> {
        let kind = self.kinds[directive.arg];
        trace!(
            arg = directive.arg,
            kind = kind.name(),
            pos = self.cursor.pos(),
            "dispatch"
        );
        let value =
            read_directive(&mut self.cursor, directive, kind, self.options).map_err(|err| {
                if err.is_end_of_range() {
                    ScanError::end_of_input(format!(
                        "input ended before argument {} ({})",
                        directive.arg,
                        kind.name()
                    ))
                } else {
                    err
                }
            })?;
        self.slots[directive.arg] = Some(value);
        Ok(())
    }

    /// Checks that run once every piece matched.
    fn finish(&mut self) -> Option<ScanError> {
        if !self.options.consume_all {
            return None;
        }
        if self.options.whitespace == WhitespaceMode::Collapse {
            if let Err(err) = self.cursor.eat_while(is_classic_space) {
                return Some(err.into());
            }
        }
        if self.cursor.is_eof() {
            None
        } else {
            Some(ScanError::invalid_value(
                "input remains after the last format piece",
            ))
        }
    }
}

#[cfg(test)]
mod tests;
