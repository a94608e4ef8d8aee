//! Primitive operations, one trait per category level.
//!
//! A handle implements the traits matching the operations it really has;
//! its declared [`Category`](crate::Category) decides which of them the
//! dispatched algorithms are allowed to use.

use super::descriptor::IteratorTraits;

/// Step forward and compare for equality.
///
/// Equality is only meaningful between handles into the same sequence.
pub trait InputIterator: IteratorTraits + PartialEq {
    /// Move to the next position.
    fn step(&mut self);
}

/// Multi-pass: a copy can be traversed again and sees the same positions.
pub trait ForwardIterator: InputIterator + Clone {}

/// Step backward.
pub trait BidirectionalIterator: ForwardIterator {
    /// Move to the previous position.
    fn step_back(&mut self);
}

/// Constant-time offset and subtraction.
pub trait RandomAccessIterator: BidirectionalIterator {
    /// Move by `n` positions in one operation (`i += n`).
    fn jump(&mut self, n: Self::Difference);

    /// Number of forward steps from `origin` to `self` (`self - origin`).
    fn difference_from(&self, origin: &Self) -> Self::Difference;
}

/// Write through the handle, then move past the written slot.
pub trait OutputIterator: IteratorTraits {
    fn put(&mut self, value: Self::Value);
}

/// Safe read access to the designated element.
pub trait Readable: IteratorTraits {
    fn get(&self) -> Self::Reference<'_>;
}
