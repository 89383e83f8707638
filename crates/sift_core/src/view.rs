//! Non-owning, bounds-checked views over contiguous elements.
//!
//! A [`View`] is a borrow: it never owns the elements it addresses, and the
//! lifetime `'a` ties it to the storage it was created from. Every sub-view
//! operation checks its bounds against the view's own length and panics on
//! misuse instead of wrapping around. The `checked_*` variants return
//! `None` for the same conditions.
//!
//! # Counted Subspans
//!
//! [`View::subspan_n`] requires `offset + count < size()`, strictly. Asking
//! for a counted subspan that reaches the very end of the view is treated as
//! misuse. Callers that want the tail use [`View::subspan`], which accepts
//! `offset == size()` and yields an empty view.

use std::fmt;
use std::ops::Index;

/// Copyable, non-owning handle over a contiguous run of `T`.
///
/// Created from a slice (pointer + count) with [`View::new`], or from a base
/// slice and a `begin..end` pair with [`View::from_bounds`].
pub struct View<'a, T> {
    elems: &'a [T],
}

// Manual impls: a view is `Copy` regardless of whether `T` is.
impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        Self { elems: &[] }
    }
}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems).finish()
    }
}

impl<T: PartialEq> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq> Eq for View<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for View<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elems == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for View<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elems == other
    }
}

impl<'a, T> View<'a, T> {
    /// Create a view over the whole slice.
    #[inline]
    pub const fn new(elems: &'a [T]) -> Self {
        Self { elems }
    }

    /// Create a view over `base[begin..end]`.
    ///
    /// # Panics
    ///
    /// Panics unless `begin <= end <= base.len()`.
    #[inline]
    pub fn from_bounds(base: &'a [T], begin: usize, end: usize) -> Self {
        assert!(begin <= end, "view begin {begin} exceeds end {end}");
        assert!(
            end <= base.len(),
            "view end {end} exceeds storage length {}",
            base.len()
        );
        Self {
            elems: &base[begin..end],
        }
    }

    /// Number of elements in the view.
    #[inline]
    pub const fn size(&self) -> usize {
        self.elems.len()
    }

    /// Number of elements as a signed count.
    #[inline]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "slice lengths never exceed isize::MAX"
    )]
    pub const fn ssize(&self) -> isize {
        self.elems.len() as isize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The referenced elements as a slice with the view's full lifetime.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elems
    }

    /// Element at `index`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elems.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.elems.iter()
    }

    /// The first `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n > size()`.
    pub fn first(&self, n: usize) -> Self {
        match self.checked_first(n) {
            Some(view) => view,
            None => panic!("first({n}) on a view of size {}", self.size()),
        }
    }

    /// The last `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n > size()`.
    pub fn last(&self, n: usize) -> Self {
        match self.checked_last(n) {
            Some(view) => view,
            None => panic!("last({n}) on a view of size {}", self.size()),
        }
    }

    /// Everything from `offset` to the end.
    ///
    /// # Panics
    ///
    /// Panics if `offset > size()`.
    pub fn subspan(&self, offset: usize) -> Self {
        match self.checked_subspan(offset) {
            Some(view) => view,
            None => panic!("subspan({offset}) on a view of size {}", self.size()),
        }
    }

    /// `count` elements starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics unless `offset + count < size()` (strictly; see the module docs).
    pub fn subspan_n(&self, offset: usize, count: usize) -> Self {
        match self.checked_subspan_n(offset, count) {
            Some(view) => view,
            None => panic!(
                "subspan({offset}, {count}) on a view of size {}",
                self.size()
            ),
        }
    }

    pub fn checked_first(&self, n: usize) -> Option<Self> {
        self.elems.get(..n).map(Self::new)
    }

    pub fn checked_last(&self, n: usize) -> Option<Self> {
        let start = self.size().checked_sub(n)?;
        Some(Self::new(&self.elems[start..]))
    }

    pub fn checked_subspan(&self, offset: usize) -> Option<Self> {
        self.elems.get(offset..).map(Self::new)
    }

    pub fn checked_subspan_n(&self, offset: usize, count: usize) -> Option<Self> {
        let end = offset.checked_add(count)?;
        if end >= self.size() {
            return None;
        }
        Some(Self::new(&self.elems[offset..end]))
    }
}

impl<'a> View<'a, u8> {
    /// Reinterpret the bytes as UTF-8 text.
    pub fn to_str(&self) -> Result<&'a str, std::str::Utf8Error> {
        std::str::from_utf8(self.elems)
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= size()`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.size(),
            "index {index} out of bounds for a view of size {}",
            self.size()
        );
        &self.elems[index]
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(elems: &'a [T]) -> Self {
        Self::new(elems)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(elems: &'a [T; N]) -> Self {
        Self::new(elems)
    }
}

impl<'a, T> From<&'a Vec<T>> for View<'a, T> {
    fn from(elems: &'a Vec<T>) -> Self {
        Self::new(elems)
    }
}

impl<'a> From<&'a str> for View<'a, u8> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a> From<&'a String> for View<'a, u8> {
    fn from(text: &'a String) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Non-owning handle over a contiguous run of mutable `T`.
///
/// Converts into a shared [`View`]; there is no conversion back.
#[derive(Debug)]
pub struct ViewMut<'a, T> {
    elems: &'a mut [T],
}

impl<'a, T> ViewMut<'a, T> {
    #[inline]
    pub fn new(elems: &'a mut [T]) -> Self {
        Self { elems }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.elems
    }

    /// Borrow as a shared view for the duration of the borrow.
    #[inline]
    pub fn as_const(&self) -> View<'_, T> {
        View::new(self.elems)
    }

    /// Give up mutable access for a shared view with the full lifetime.
    #[inline]
    pub fn into_const(self) -> View<'a, T> {
        View::new(self.elems)
    }
}

impl<'a, T> From<ViewMut<'a, T>> for View<'a, T> {
    fn from(view: ViewMut<'a, T>) -> Self {
        view.into_const()
    }
}

impl<'a, T> From<&'a mut [T]> for ViewMut<'a, T> {
    fn from(elems: &'a mut [T]) -> Self {
        Self::new(elems)
    }
}

#[cfg(test)]
mod tests;
