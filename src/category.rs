//! Iterator category markers.
//!
//! Five zero-sized tags describe what an iterator handle guarantees:
//!
//! ```text
//! Input          step forward, compare for equality (single pass)
//!   |
//! Forward        + multi-pass (copies can be re-traversed)
//!   |
//! Bidirectional  + step backward
//!   |
//! RandomAccess   + O(1) offset and O(1) subtraction
//!
//! Output         write-only, unrelated to the chain above
//! ```
//!
//! The refinement order is encoded as a table of [`Satisfies`] impls whose
//! answers are type-level booleans, so downstream code can branch on a
//! category with `Bool::If` or require one with [`Refines`].

use core::fmt::Debug;
use core::hash::Hash;

use crate::primitives::{Bool, False, IsTrue, True};

// =============================================================================
// Markers
// =============================================================================

/// Single-pass read: step forward and compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Input;

/// Write-only sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Output;

/// Multi-pass read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Multi-pass read in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Constant-time offset and subtraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Input {}
    impl Sealed for super::Output {}
    impl Sealed for super::Forward {}
    impl Sealed for super::Bidirectional {}
    impl Sealed for super::RandomAccess {}
}

// =============================================================================
// Category
// =============================================================================

/// One of the five category markers.
///
/// The set is closed. Every marker answers [`Satisfies`] for every other
/// marker, which lets generic code ask capability questions about
/// `I::Category` without naming a concrete tag.
pub trait Category:
    sealed::Sealed
    + Copy
    + Default
    + Debug
    + Eq
    + Hash
    + Send
    + Sync
    + 'static
    + Satisfies<Input>
    + Satisfies<Output>
    + Satisfies<Forward>
    + Satisfies<Bidirectional>
    + Satisfies<RandomAccess>
{
    /// Human-readable marker name.
    const NAME: &'static str;
}

impl Category for Input {
    const NAME: &'static str = "input";
}

impl Category for Output {
    const NAME: &'static str = "output";
}

impl Category for Forward {
    const NAME: &'static str = "forward";
}

impl Category for Bidirectional {
    const NAME: &'static str = "bidirectional";
}

impl Category for RandomAccess {
    const NAME: &'static str = "random_access";
}

// =============================================================================
// Refinement
// =============================================================================

/// Does `Self` guarantee everything `Required` guarantees?
///
/// Answers with [`True`] or [`False`]; defined for every pair of markers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an iterator category",
    label = "cannot compare `{Self}` against `{Required}`",
    note = "categories are `Input`, `Output`, `Forward`, `Bidirectional` and `RandomAccess`"
)]
pub trait Satisfies<Required> {
    type Out: Bool;
}

macro_rules! satisfies_table {
    ($($cat:ident => [$($req:ident: $out:ident),* $(,)?]);* $(;)?) => {
        $($(
            impl Satisfies<$req> for $cat {
                type Out = $out;
            }
        )*)*
    };
}

satisfies_table! {
    Input => [
        Input: True, Output: False, Forward: False, Bidirectional: False, RandomAccess: False,
    ];
    Output => [
        Input: False, Output: True, Forward: False, Bidirectional: False, RandomAccess: False,
    ];
    Forward => [
        Input: True, Output: False, Forward: True, Bidirectional: False, RandomAccess: False,
    ];
    Bidirectional => [
        Input: True, Output: False, Forward: True, Bidirectional: True, RandomAccess: False,
    ];
    RandomAccess => [
        Input: True, Output: False, Forward: True, Bidirectional: True, RandomAccess: True,
    ];
}

/// Bound form of [`Satisfies`]: implemented only when the answer is [`True`].
///
/// ```
/// use itertag::{Bidirectional, RandomAccess, Refines};
///
/// fn needs_backward<C: Refines<Bidirectional>>() {}
///
/// needs_backward::<RandomAccess>();
/// needs_backward::<Bidirectional>();
/// ```
///
/// ```compile_fail
/// use itertag::{Bidirectional, Forward, Refines};
///
/// fn needs_backward<C: Refines<Bidirectional>>() {}
///
/// needs_backward::<Forward>();
/// ```
pub trait Refines<Required>: Satisfies<Required> {}

impl<C, R> Refines<R> for C
where
    C: Satisfies<R>,
    <C as Satisfies<R>>::Out: IsTrue,
{
}

/// Runtime view of [`Satisfies`].
#[inline(always)]
pub const fn satisfies<C, Required>() -> bool
where
    C: Satisfies<Required>,
{
    <<C as Satisfies<Required>>::Out as Bool>::VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        assert!(satisfies::<Input, Input>());
        assert!(satisfies::<Output, Output>());
        assert!(satisfies::<Forward, Forward>());
        assert!(satisfies::<Bidirectional, Bidirectional>());
        assert!(satisfies::<RandomAccess, RandomAccess>());
    }

    #[test]
    fn test_chain_is_transitive() {
        assert!(satisfies::<RandomAccess, Bidirectional>());
        assert!(satisfies::<RandomAccess, Forward>());
        assert!(satisfies::<RandomAccess, Input>());
        assert!(satisfies::<Bidirectional, Input>());
        assert!(!satisfies::<Input, Forward>());
        assert!(!satisfies::<Forward, Bidirectional>());
        assert!(!satisfies::<Bidirectional, RandomAccess>());
    }

    #[test]
    fn test_output_is_disjoint() {
        assert!(!satisfies::<Output, Input>());
        assert!(!satisfies::<RandomAccess, Output>());
        assert!(!satisfies::<Input, Output>());
    }

    #[test]
    fn test_names_are_distinct() {
        let names = [
            Input::NAME,
            Output::NAME,
            Forward::NAME,
            Bidirectional::NAME,
            RandomAccess::NAME,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
