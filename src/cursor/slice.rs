use core::fmt;
use core::ptr;

use crate::category::RandomAccess;
use crate::traits::{
    BidirectionalIterator, ForwardIterator, InputIterator, IteratorTraits, RandomAccessIterator,
    Readable,
};

/// A position inside a borrowed slice.
///
/// `Cursor::end` is one past the last element and must not be read.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub const fn new(slice: &'a [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    #[inline]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self::new(slice, 0)
    }

    #[inline]
    pub const fn end(slice: &'a [T]) -> Self {
        Self::new(slice, slice.len())
    }

    /// Index of the designated element.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The element at this position, if there is one.
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }
}

/// `(begin, end)` for a whole slice.
#[inline]
pub const fn cursors<T>(slice: &[T]) -> (Cursor<'_, T>, Cursor<'_, T>) {
    (Cursor::begin(slice), Cursor::end(slice))
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> IteratorTraits for Cursor<'a, T> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference<'r>
        = &'a T
    where
        Self: 'r;
}

impl<T> InputIterator for Cursor<'_, T> {
    #[inline(always)]
    fn step(&mut self) {
        self.pos += 1;
    }
}

impl<T> ForwardIterator for Cursor<'_, T> {}

impl<T> BidirectionalIterator for Cursor<'_, T> {
    #[inline(always)]
    fn step_back(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomAccessIterator for Cursor<'_, T> {
    #[inline(always)]
    fn jump(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
    }

    #[inline(always)]
    fn difference_from(&self, origin: &Self) -> isize {
        self.pos.wrapping_sub(origin.pos) as isize
    }
}

impl<'a, T> Readable for Cursor<'a, T> {
    /// Panics when the cursor is outside the slice.
    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }
}
