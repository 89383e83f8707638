//! Low-level building blocks for the sift scanning engine.
//!
//! This crate is standalone: it knows nothing about format strings, readers,
//! or argument slots. It provides the three things every scan needs:
//!
//! - [`View`]: a copyable, non-owning, bounds-checked handle over a
//!   contiguous run of elements. It is the currency for "some input" and
//!   "the rest of the input" throughout the engine.
//! - [`unicode`]: stateless validation and decoding of one code point at a
//!   time, for UTF-8 (`u8`), UTF-16 (`u16`) and UTF-32 (`u32`) code units,
//!   tied together by the [`CodeUnit`] trait.
//! - [`Cursor`]: a `Copy` position over a view that steps whole code points,
//!   so readers can snapshot and backtrack for free.
//!
//! Nothing here allocates an owned copy of the input.

mod cursor;
pub mod unicode;
mod view;

pub use cursor::{Cursor, Decoded};
pub use unicode::{CodePoint, CodeUnit, DecodeError, Encoding};
pub use view::{View, ViewMut};
