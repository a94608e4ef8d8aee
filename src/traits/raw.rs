//! Raw addresses as iterator handles.
//!
//! A `*const T` or `*mut T` declares nothing, yet supports everything a
//! random-access handle needs. Both shapes report `Value = T`; only the
//! pointer-like and reference-like types carry the mutability.
//!
//! Stepping uses wrapping address arithmetic, so no operation here is
//! `unsafe`. Reading through the address stays the caller's business.

use core::mem::size_of;

use super::descriptor::IteratorTraits;
use super::ops::{BidirectionalIterator, ForwardIterator, InputIterator, RandomAccessIterator};
use crate::category::RandomAccess;

/// Elements of `T` between two addresses.
///
/// Zero-sized elements all share one address, so the count is always 0.
#[inline(always)]
fn element_delta<T>(origin: usize, target: usize) -> isize {
    match size_of::<T>() {
        0 => 0,
        size => (target.wrapping_sub(origin) as isize) / size as isize,
    }
}

macro_rules! raw_address {
    ([$lt:lifetime, $t:ident] $ptr:ty => $reference:ty) => {
        impl<$t> IteratorTraits for $ptr {
            type Category = RandomAccess;
            type Value = T;
            type Difference = isize;
            type Pointer = $ptr;
            type Reference<$lt>
                = $reference
            where
                Self: $lt;
        }

        impl<$t> InputIterator for $ptr {
            #[inline(always)]
            fn step(&mut self) {
                *self = self.wrapping_add(1);
            }
        }

        impl<$t> ForwardIterator for $ptr {}

        impl<$t> BidirectionalIterator for $ptr {
            #[inline(always)]
            fn step_back(&mut self) {
                *self = self.wrapping_sub(1);
            }
        }

        impl<$t> RandomAccessIterator for $ptr {
            #[inline(always)]
            fn jump(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline(always)]
            fn difference_from(&self, origin: &Self) -> isize {
                element_delta::<$t>(*origin as usize, *self as usize)
            }
        }
    };
}

raw_address!(['a, T] *const T => &'a T);
raw_address!(['a, T] *mut T => &'a mut T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_offset() {
        let data = [10u64, 20, 30, 40];
        let first = data.as_ptr();
        let mut p = first;
        p.step();
        p.step();
        assert_eq!(p.difference_from(&first), 2);
        p.step_back();
        assert_eq!(p.difference_from(&first), 1);
        assert_eq!(first.difference_from(&p), -1);
    }

    #[test]
    fn test_jump_mut() {
        let mut data = [1i32, 2, 3, 4, 5];
        let first = data.as_mut_ptr();
        let mut p = first;
        p.jump(4);
        assert_eq!(p.difference_from(&first), 4);
        p.jump(-3);
        assert_eq!(unsafe { *p }, 2);
    }

    #[test]
    fn test_zero_sized_elements() {
        let units = [(), (), ()];
        let first = units.as_ptr();
        let mut p = first;
        p.jump(3);
        assert_eq!(p.difference_from(&first), 0);
    }
}
