//! Type-level strategy selection.
//!
//! Variants are plain unit types. A category picks one by asking
//! [`Satisfies`] from the most specific requirement down to the least;
//! the first `True` answer wins.

use crate::category::{Bidirectional, Input, RandomAccess, Satisfies};
use crate::primitives::Bool;

use super::advance::{BidirectionalAdvance, InputAdvance, RandomAccessAdvance};
use super::distance::{InputDistance, RandomAccessDistance};

/// `Then` if category `C` satisfies `Required`, `Else` otherwise.
pub type Pick<C, Required, Then, Else> =
    <<C as Satisfies<Required>>::Out as Bool>::If<Then, Else>;

/// The `distance` variant for category `C`.
pub type DistanceStrategyOf<C> =
    Pick<C, RandomAccess, RandomAccessDistance, Pick<C, Input, InputDistance, NoStrategy>>;

/// The `advance` variant for category `C`.
pub type AdvanceStrategyOf<C> = Pick<
    C,
    RandomAccess,
    RandomAccessAdvance,
    Pick<C, Bidirectional, BidirectionalAdvance, Pick<C, Input, InputAdvance, NoStrategy>>,
>;

/// A named algorithm variant.
pub trait Strategy {
    const NAME: &'static str;
}

/// Selected when no variant applies. Implements no strategy trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStrategy;

impl Strategy for NoStrategy {
    const NAME: &'static str = "none";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Forward, Output};

    fn name<S: Strategy>() -> &'static str {
        S::NAME
    }

    #[test]
    fn test_distance_selection() {
        assert_eq!(name::<DistanceStrategyOf<Input>>(), "input");
        assert_eq!(name::<DistanceStrategyOf<Forward>>(), "input");
        assert_eq!(name::<DistanceStrategyOf<Bidirectional>>(), "input");
        assert_eq!(name::<DistanceStrategyOf<RandomAccess>>(), "random_access");
        assert_eq!(name::<DistanceStrategyOf<Output>>(), "none");
    }

    #[test]
    fn test_advance_selection() {
        assert_eq!(name::<AdvanceStrategyOf<Input>>(), "input");
        assert_eq!(name::<AdvanceStrategyOf<Forward>>(), "input");
        assert_eq!(name::<AdvanceStrategyOf<Bidirectional>>(), "bidirectional");
        assert_eq!(name::<AdvanceStrategyOf<RandomAccess>>(), "random_access");
        assert_eq!(name::<AdvanceStrategyOf<Output>>(), "none");
    }
}
