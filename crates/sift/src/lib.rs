//! Format-driven scanning: the inverse of formatted printing.
//!
//! `sift` extracts typed values from text according to a format string:
//!
//! ```
//! let result = sift::scan::<(String, u16), _>("port 8080", "{} {}");
//! assert_eq!(result.into_values(), Some(("port".to_owned(), 8080)));
//! ```
//!
//! # Pipeline
//!
//! 1. [`format::parse_format`] splits the format into literal and field
//!    pieces and validates them against the argument slots before any
//!    input is read.
//! 2. The interpreter ([`vscan`]) walks the pieces, matching literals and
//!    dispatching each field to a value reader over a `sift_core::Cursor`.
//! 3. The binder turns the raw [`Value`]s into the caller's tuple, all or
//!    nothing, and reports a [`Remainder`].
//!
//! Input is never copied when it is already contiguous. UTF-8 (`u8`),
//! UTF-16 (`u16`) and UTF-32 (`u32`) code units are supported; malformed
//! sequences fail with [`ErrorKind::InvalidEncoding`].
//!
//! # Tracing
//!
//! Scans emit `tracing` events: a `debug` span per scan, `trace` events per
//! field, and a `debug` event when a scan fails. [`init_tracing`] installs
//! a subscriber driven by `RUST_LOG`.

mod args;
mod error;
pub mod format;
mod interpreter;
mod locale;
mod options;
mod readers;
mod result;
mod scan;
pub mod stdin;

use std::sync::Once;

pub use args::{ArgKind, FloatKind, IntKind, ScanArgs, Scannable, Value};
pub use error::{ErrorKind, ScanError};
pub use interpreter::{vscan, VScanOutcome};
pub use locale::Locale;
pub use options::{FloatOverflow, ScanOptions, WhitespaceMode};
pub use result::{Remainder, ScanResult, ValueResult};
pub use scan::{scan, scan_localized, scan_reader, scan_value, scan_with, ScanInput};
pub use sift_core::{CodePoint, CodeUnit, DecodeError, Encoding, View, ViewMut};
pub use stdin::{input, prompt};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sift=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("a global tracing subscriber was already installed");
            }
        }
    });
}
