//! String and span reader.
//!
//! Consumes a maximal run of code points matching the presentation's class:
//! a whitespace-delimited word, a `[...]` set, everything up to the width
//! (`c`), or the rest of the line. The run is cut only at code point
//! boundaries. `String` slots get decoded text, `Span` slots the raw units.

use sift_core::{CodeUnit, Cursor};

use super::ReadContext;
use crate::args::{ArgKind, Value};
use crate::format::Presentation;
use crate::ScanError;

pub(super) fn read<'a, U: CodeUnit>(
    cursor: &mut Cursor<'a, U>,
    ctx: &ReadContext<'_>,
    kind: ArgKind,
    presentation: &Presentation,
) -> Result<Value<'a, U>, ScanError> {
    let start = cursor.pos();
    match presentation {
        Presentation::Default | Presentation::Word => {
            cursor.eat_while(|ch| !ctx.is_space(ch))?;
        }
        Presentation::Character if ctx.width.is_some() => {
            cursor.eat_while(|_| true)?;
        }
        Presentation::Character => {
            cursor.next_char()?;
        }
        Presentation::Set(set) if set.is_rest_of_line() && ctx.width.is_none() => {
            cursor.eat_until_newline();
            // The newline search skips decoding; validate what it covered.
            cursor.consumed_since(start).code_points()?;
        }
        Presentation::Set(set) => {
            cursor.eat_while(|ch| set.contains(ch))?;
        }
        other => {
            return Err(ScanError::invalid_format(format!(
                "type {other} cannot be read into a {} argument",
                kind.name()
            )));
        }
    }

    let span = cursor.consumed_since(start);
    if span.is_empty() {
        return Err(ScanError::invalid_value(match presentation {
            Presentation::Set(_) => "no characters matched the set",
            _ => "expected a non-whitespace character",
        }));
    }
    Ok(match kind {
        ArgKind::Span => Value::Span(span),
        _ => Value::String(span.decode_to_string()?),
    })
}
