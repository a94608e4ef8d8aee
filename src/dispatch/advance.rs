//! `advance(&mut i, n)`: move a handle by `n` positions in place.
//!
//! Also `next` and `prev`, the by-value forms.

use crate::category::{Bidirectional, Refines};
use crate::primitives::Difference;
use crate::trace::trace;
use crate::traits::{
    BidirectionalIterator, CategoryOf, DifferenceOf, InputIterator, IteratorTraits,
    RandomAccessIterator,
};

use super::select::{AdvanceStrategyOf, Strategy};

/// An `advance` variant usable for handles of type `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot `advance` a `{I}`",
    label = "variant `{Self}` needs operations `{I}` does not provide",
    note = "a declared category must be backed by the matching operation trait (`InputIterator`, `BidirectionalIterator`, `RandomAccessIterator`)"
)]
pub trait AdvanceStrategy<I: IteratorTraits>: Strategy {
    fn advance(i: &mut I, n: I::Difference);
}

/// Step forward `n` times. A negative `n` steps zero times.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdvance;

impl Strategy for InputAdvance {
    const NAME: &'static str = "input";
}

impl<I: InputIterator> AdvanceStrategy<I> for InputAdvance {
    #[inline]
    fn advance(i: &mut I, mut n: I::Difference) {
        while n > <I::Difference as Difference>::ZERO {
            i.step();
            n -= <I::Difference as Difference>::ONE;
        }
    }
}

/// Step forward or backward `|n|` times.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalAdvance;

impl Strategy for BidirectionalAdvance {
    const NAME: &'static str = "bidirectional";
}

impl<I: BidirectionalIterator> AdvanceStrategy<I> for BidirectionalAdvance {
    #[inline]
    fn advance(i: &mut I, mut n: I::Difference) {
        if n.is_negative() {
            while n < <I::Difference as Difference>::ZERO {
                i.step_back();
                n += <I::Difference as Difference>::ONE;
            }
        } else {
            while n > <I::Difference as Difference>::ZERO {
                i.step();
                n -= <I::Difference as Difference>::ONE;
            }
        }
    }
}

/// One jump. O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccessAdvance;

impl Strategy for RandomAccessAdvance {
    const NAME: &'static str = "random_access";
}

impl<I: RandomAccessIterator> AdvanceStrategy<I> for RandomAccessAdvance {
    #[inline(always)]
    fn advance(i: &mut I, n: I::Difference) {
        i.jump(n);
    }
}

/// Handles whose category selects an `advance` variant they can run.
#[diagnostic::on_unimplemented(
    message = "`advance` is not available for `{Self}`",
    label = "no `advance` variant matches the category of `{Self}`",
    note = "`Output` handles and non-iterators have no `advance`"
)]
pub trait Advance: IteratorTraits {
    /// Move `self` by `n` positions.
    fn advance(&mut self, n: Self::Difference);
}

impl<I> Advance for I
where
    I: IteratorTraits,
    AdvanceStrategyOf<I::Category>: AdvanceStrategy<I>,
{
    #[inline(always)]
    fn advance(&mut self, n: Self::Difference) {
        trace!(
            "advance: category={} strategy={} n={:?}",
            <I::Category as crate::category::Category>::NAME,
            <AdvanceStrategyOf<I::Category> as Strategy>::NAME,
            n
        );
        <AdvanceStrategyOf<I::Category> as AdvanceStrategy<I>>::advance(self, n);
    }
}

/// Move `i` by `n` positions in place.
///
/// Negative `n` requires a bidirectional or random-access category; for
/// input and forward handles it is a precondition violation and the handle
/// is left where it was. The positions passed over must lie in the same
/// sequence. None of this is checked.
///
/// ```
/// use itertag::advance;
///
/// let arr = [1, 2, 3, 4, 5];
/// let mut p = arr.as_ptr();
/// advance(&mut p, 3);
/// assert_eq!(unsafe { *p }, 4);
///
/// let mut q = arr.as_ptr().wrapping_add(4);
/// advance(&mut q, -2);
/// assert_eq!(unsafe { *q }, 3);
/// ```
#[inline(always)]
pub fn advance<I: Advance>(i: &mut I, n: DifferenceOf<I>) {
    Advance::advance(i, n);
}

/// `i` moved forward by `n` positions.
#[inline]
pub fn next<I: Advance>(mut i: I, n: DifferenceOf<I>) -> I {
    advance(&mut i, n);
    i
}

/// `i` moved backward by `n` positions. Needs at least a bidirectional category.
///
/// ```compile_fail
/// use itertag::{cursor::{Cursor, Restrict}, prev, Forward};
///
/// let data = [1, 2, 3];
/// let end = Restrict::<_, Forward>::new(Cursor::end(&data));
/// prev(end, 1);
/// ```
#[inline]
pub fn prev<I>(mut i: I, n: DifferenceOf<I>) -> I
where
    I: Advance,
    CategoryOf<I>: Refines<Bidirectional>,
{
    advance(&mut i, -n);
    i
}
