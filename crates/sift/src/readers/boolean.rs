//! Boolean reader.
//!
//! Textual (`s`): the true or false name, case-sensitive. Numeric (any
//! integer type): a single `0` or `1` not followed by another digit.
//! Without a type character, textual is tried first.

use sift_core::{CodeUnit, Cursor};

use super::ReadContext;
use crate::args::Value;
use crate::format::Presentation;
use crate::ScanError;

pub(super) fn read<'a, U: CodeUnit>(
    cursor: &mut Cursor<'a, U>,
    ctx: &ReadContext<'_>,
    presentation: &Presentation,
) -> Result<Value<'a, U>, ScanError> {
    let value = match presentation {
        Presentation::Word => read_textual(cursor, ctx)?,
        p if p.is_integer() => read_numeric(cursor)?,
        _ => match read_textual(cursor, ctx)? {
            Some(b) => Some(b),
            None => read_numeric(cursor)?,
        },
    };
    value.map(Value::Bool).ok_or_else(|| {
        ScanError::invalid_value(format!(
            "expected '{}', '{}', '0' or '1'",
            ctx.truename(),
            ctx.falsename()
        ))
    })
}

fn read_textual<U: CodeUnit>(
    cursor: &mut Cursor<'_, U>,
    ctx: &ReadContext<'_>,
) -> Result<Option<bool>, ScanError> {
    let exact = |a: char, b: char| a == b;
    if cursor.eat_word(ctx.truename(), exact)? {
        return Ok(Some(true));
    }
    if cursor.eat_word(ctx.falsename(), exact)? {
        return Ok(Some(false));
    }
    Ok(None)
}

fn read_numeric<U: CodeUnit>(cursor: &mut Cursor<'_, U>) -> Result<Option<bool>, ScanError> {
    let snapshot = *cursor;
    let Some(digit) = cursor.eat_if(|ch| ch == '0' || ch == '1')? else {
        return Ok(None);
    };
    if cursor.peek()?.is_some_and(|decoded| decoded.ch.is_ascii_digit()) {
        *cursor = snapshot;
        return Ok(None);
    }
    Ok(Some(digit == '1'))
}

#[cfg(test)]
mod tests;
