//! Character and code point reader: exactly one decoded code point.

use sift_core::{CodePoint, CodeUnit, Cursor};

use crate::args::{ArgKind, Value};
use crate::ScanError;

pub(super) fn read<'a, U: CodeUnit>(
    cursor: &mut Cursor<'a, U>,
    kind: ArgKind,
) -> Result<Value<'a, U>, ScanError> {
    let Some(ch) = cursor.next_char()? else {
        return Err(ScanError::end_of_range());
    };
    Ok(match kind {
        ArgKind::CodePoint => Value::CodePoint(CodePoint::from(ch)),
        _ => Value::Char(ch),
    })
}
