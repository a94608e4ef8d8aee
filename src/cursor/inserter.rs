use alloc::vec::Vec;

use crate::category::Output;
use crate::traits::{IteratorTraits, OutputIterator};

/// Output handle that appends every written value to a vector.
///
/// It has no position to compare or measure, so `distance` and `advance`
/// do not apply:
///
/// ```compile_fail
/// use itertag::{advance, cursor::BackInserter};
///
/// let mut v: Vec<i32> = Vec::new();
/// let mut out = BackInserter::new(&mut v);
/// advance(&mut out, 1);
/// ```
#[derive(Debug)]
pub struct BackInserter<'a, T> {
    target: &'a mut Vec<T>,
}

impl<'a, T> BackInserter<'a, T> {
    #[inline]
    pub fn new(target: &'a mut Vec<T>) -> Self {
        Self { target }
    }

    /// Number of elements currently in the target.
    #[inline]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

impl<T> IteratorTraits for BackInserter<'_, T> {
    type Category = Output;
    type Value = T;
    type Difference = isize;
    type Pointer = ();
    type Reference<'r>
        = ()
    where
        Self: 'r;
}

impl<T> OutputIterator for BackInserter<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.target.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends() {
        let mut v = alloc::vec![1];
        {
            let mut out = BackInserter::new(&mut v);
            out.put(2);
            out.put(3);
            assert_eq!(out.len(), 3);
        }
        assert_eq!(v, [1, 2, 3]);
    }
}
