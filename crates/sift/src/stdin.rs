//! Console helpers over the process-wide stdin adapter.
//!
//! [`input`] and [`prompt`] read one line from standard input and scan it.
//! The line buffer is shared by the whole process and guarded by a mutex, so
//! concurrent callers each get whole lines. The remainder is always
//! [`Remainder::Unusable`](crate::Remainder::Unusable).

use std::io::{self, BufRead, Write};

use parking_lot::{const_mutex, Mutex};

use crate::args::ScanArgs;
use crate::result::{Remainder, ScanResult};
use crate::scan::{io_error, scan_owned};
use crate::{ScanError, ScanOptions};

static LINE: Mutex<String> = const_mutex(String::new());

/// Read one line from stdin and scan it against `format`.
pub fn input<T>(format: &str) -> ScanResult<'static, u8, T>
where
    T: for<'b> ScanArgs<'b, u8>,
{
    let mut line = LINE.lock();
    read_and_scan(&mut io::stdin().lock(), &mut line, format)
}

/// Print `message`, then behave like [`input`].
pub fn prompt<T>(message: &str, format: &str) -> ScanResult<'static, u8, T>
where
    T: for<'b> ScanArgs<'b, u8>,
{
    let mut line = LINE.lock();
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(message.as_bytes()).and_then(|()| stdout.flush()) {
        return ScanResult::new(Remainder::Unusable, 0, Err(io_error(&err)));
    }
    drop(stdout);
    read_and_scan(&mut io::stdin().lock(), &mut line, format)
}

/// Read one line from `reader` into `line` and scan it. The trailing line
/// terminator is not part of the scanned text.
pub(crate) fn read_and_scan<R, T>(
    reader: &mut R,
    line: &mut String,
    format: &str,
) -> ScanResult<'static, u8, T>
where
    R: BufRead,
    T: for<'b> ScanArgs<'b, u8>,
{
    line.clear();
    match reader.read_line(line) {
        Ok(0) => {
            return ScanResult::new(
                Remainder::Unusable,
                0,
                Err(ScanError::end_of_input("stdin is closed")),
            );
        }
        Ok(_) => {}
        Err(err) => return ScanResult::new(Remainder::Unusable, 0, Err(io_error(&err))),
    }
    let text = line.trim_end_matches(['\n', '\r']);
    scan_owned(&ScanOptions::default(), text.as_bytes(), format)
}

#[cfg(test)]
mod tests;
