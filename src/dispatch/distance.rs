//! `distance(first, last)`: forward steps from `first` to `last`.

use crate::primitives::Difference;
use crate::trace::trace;
use crate::traits::{DifferenceOf, InputIterator, IteratorTraits, RandomAccessIterator};

use super::select::{DistanceStrategyOf, Strategy};

/// A `distance` variant usable for handles of type `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot compute `distance` for `{I}`",
    label = "variant `{Self}` needs operations `{I}` does not provide",
    note = "a declared category must be backed by the matching operation trait (`InputIterator`, `RandomAccessIterator`)"
)]
pub trait DistanceStrategy<I: IteratorTraits>: Strategy {
    fn distance(first: I, last: I) -> I::Difference;
}

/// Step and count. O(n), uses only equality and forward steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDistance;

impl Strategy for InputDistance {
    const NAME: &'static str = "input";
}

impl<I: InputIterator> DistanceStrategy<I> for InputDistance {
    #[inline]
    fn distance(mut first: I, last: I) -> I::Difference {
        let mut n = <I::Difference as Difference>::ZERO;
        while first != last {
            first.step();
            n += <I::Difference as Difference>::ONE;
        }
        n
    }
}

/// One subtraction. O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccessDistance;

impl Strategy for RandomAccessDistance {
    const NAME: &'static str = "random_access";
}

impl<I: RandomAccessIterator> DistanceStrategy<I> for RandomAccessDistance {
    #[inline(always)]
    fn distance(first: I, last: I) -> I::Difference {
        last.difference_from(&first)
    }
}

/// Handles whose category selects a `distance` variant they can run.
#[diagnostic::on_unimplemented(
    message = "`distance` is not available for `{Self}`",
    label = "no `distance` variant matches the category of `{Self}`",
    note = "`Output` handles and non-iterators have no `distance`"
)]
pub trait Distance: IteratorTraits + Sized {
    /// Forward steps from `self` to `last`.
    fn distance_to(self, last: Self) -> Self::Difference;
}

impl<I> Distance for I
where
    I: IteratorTraits,
    DistanceStrategyOf<I::Category>: DistanceStrategy<I>,
{
    #[inline(always)]
    fn distance_to(self, last: Self) -> Self::Difference {
        trace!(
            "distance: category={} strategy={}",
            <I::Category as crate::category::Category>::NAME,
            <DistanceStrategyOf<I::Category> as Strategy>::NAME
        );
        <DistanceStrategyOf<I::Category> as DistanceStrategy<I>>::distance(self, last)
    }
}

/// Number of forward steps from `first` to `last`.
///
/// `first` and `last` must designate positions in the same sequence, with
/// `last` reachable from `first`. Random-access handles may also have
/// `last` before `first`, giving a negative result. None of this is checked.
///
/// Raw addresses of a zero-sized element type all compare equal, so their
/// distance is always 0 whatever the number of elements between them.
///
/// ```
/// use itertag::distance;
///
/// let arr = [1, 2, 3, 4, 5];
/// let p = arr.as_ptr();
/// assert_eq!(distance(p, p.wrapping_add(5)), 5);
/// assert_eq!(distance(p, p), 0);
/// assert_eq!(distance(p.wrapping_add(1), p.wrapping_add(3)), 2);
/// ```
///
/// Types without iterator traits are rejected at compile time:
///
/// ```compile_fail
/// itertag::distance(1u32, 5u32);
/// ```
#[inline(always)]
pub fn distance<I: Distance>(first: I, last: I) -> DifferenceOf<I> {
    first.distance_to(last)
}
