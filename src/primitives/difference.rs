//! Signed integers usable as an iterator's difference type.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed integer measuring the number of steps between two positions.
///
/// `distance` counts with it and `advance` consumes it, so the trait carries
/// exactly the constants and operators those loops need.
pub trait Difference:
    Copy
    + Ord
    + Hash
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    /// The constant representing 0.
    const ZERO: Self;
    /// The constant representing +1.
    const ONE: Self;

    /// Returns `true` if the value is strictly negative.
    #[inline(always)]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_difference_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Difference for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_difference_for!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_ones<D: Difference>(count: usize) -> D {
        let mut n = D::ZERO;
        for _ in 0..count {
            n += D::ONE;
        }
        n
    }

    #[test]
    fn test_constants() {
        assert_eq!(<isize as Difference>::ZERO, 0);
        assert_eq!(<i8 as Difference>::ONE, 1);
        assert_eq!(<i128 as Difference>::ONE, 1);
    }

    #[test]
    fn test_counting() {
        assert_eq!(sum_of_ones::<i16>(12), 12);
        assert_eq!(sum_of_ones::<isize>(0), 0);
    }

    #[test]
    fn test_sign() {
        assert!((-<i32 as Difference>::ONE).is_negative());
        assert!(!<i64 as Difference>::ZERO.is_negative());
    }
}
