use core::fmt;
use core::marker::PhantomData;

use crate::category::{Bidirectional, Category, Forward, Input, Output, RandomAccess, Refines};
use crate::traits::{
    BidirectionalIterator, ForwardIterator, InputIterator, IteratorTraits, OutputIterator,
    RandomAccessIterator, Readable,
};

/// A handle re-declared with category `C`.
///
/// Only the operations `C` guarantees are passed through, so
/// `Restrict<Cursor<'_, T>, Input>` runs the input variants of `distance`
/// and `advance` over a slice.
///
/// ```
/// use itertag::{cursor::{cursors, Restrict}, distance, Forward};
///
/// let data = [3, 1, 4, 1, 5];
/// let (first, last) = cursors(&data);
/// let n = distance(Restrict::<_, Forward>::new(first), Restrict::new(last));
/// assert_eq!(n, 5);
/// ```
pub struct Restrict<I, C> {
    inner: I,
    _category: PhantomData<C>,
}

impl<I, C: Category> Restrict<I, C> {
    #[inline]
    pub const fn new(inner: I) -> Self {
        Self {
            inner,
            _category: PhantomData,
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Clone, C> Clone for Restrict<I, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _category: PhantomData,
        }
    }
}

impl<I: Copy, C> Copy for Restrict<I, C> {}

impl<I: PartialEq, C> PartialEq for Restrict<I, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<I: Eq, C> Eq for Restrict<I, C> {}

impl<I: fmt::Debug, C: Category> fmt::Debug for Restrict<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restrict")
            .field("category", &C::NAME)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I: IteratorTraits, C: Category> IteratorTraits for Restrict<I, C> {
    type Category = C;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference<'a>
        = I::Reference<'a>
    where
        Self: 'a;
}

impl<I, C> InputIterator for Restrict<I, C>
where
    I: InputIterator,
    C: Category + Refines<Input>,
{
    #[inline(always)]
    fn step(&mut self) {
        self.inner.step();
    }
}

impl<I, C> ForwardIterator for Restrict<I, C>
where
    I: ForwardIterator,
    C: Category + Refines<Input> + Refines<Forward>,
{
}

impl<I, C> BidirectionalIterator for Restrict<I, C>
where
    I: BidirectionalIterator,
    C: Category + Refines<Input> + Refines<Forward> + Refines<Bidirectional>,
{
    #[inline(always)]
    fn step_back(&mut self) {
        self.inner.step_back();
    }
}

impl<I, C> RandomAccessIterator for Restrict<I, C>
where
    I: RandomAccessIterator,
    C: Category
        + Refines<Input>
        + Refines<Forward>
        + Refines<Bidirectional>
        + Refines<RandomAccess>,
{
    #[inline(always)]
    fn jump(&mut self, n: Self::Difference) {
        self.inner.jump(n);
    }

    #[inline(always)]
    fn difference_from(&self, origin: &Self) -> Self::Difference {
        self.inner.difference_from(&origin.inner)
    }
}

impl<I, C> OutputIterator for Restrict<I, C>
where
    I: OutputIterator,
    C: Category + Refines<Output>,
{
    #[inline(always)]
    fn put(&mut self, value: Self::Value) {
        self.inner.put(value);
    }
}

impl<I: Readable, C: Category> Readable for Restrict<I, C> {
    #[inline(always)]
    fn get(&self) -> Self::Reference<'_> {
        self.inner.get()
    }
}
