//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait. Category predicates
//! ([`Satisfies`](crate::Satisfies)) answer with one of these, and dispatch
//! picks its variant through `Bool::If`.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// A `bool` constant lifted into a type.
///
/// `BoolConstant<true>` and `BoolConstant<false>` convert to [`True`] and
/// [`False`] through [`ToBool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolConstant<const B: bool>;

impl<const B: bool> BoolConstant<B> {
    pub const VALUE: bool = B;
}

/// Convert a const bool wrapper to a type-level [`Bool`].
pub trait ToBool {
    type Out: Bool;
}

impl ToBool for BoolConstant<true> {
    type Out = True;
}

impl ToBool for BoolConstant<false> {
    type Out = False;
}

/// Conditional type alias over a type-level [`Bool`].
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

/// Conditional type alias over a const bool.
pub type IfConst<const C: bool, Then, Else> =
    <<BoolConstant<C> as ToBool>::Out as Bool>::If<Then, Else>;

/// Implemented only by [`True`]; used to turn a type-level answer into a bound.
#[diagnostic::on_unimplemented(
    message = "capability requirement evaluated to false",
    label = "expected `True`, found `{Self}`",
    note = "the iterator category does not provide the required capability"
)]
pub trait IsTrue: Bool {}

impl IsTrue for True {}

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert!(True::VALUE);
        assert!(!False::VALUE);
        assert!(!<<True as Bool>::Not as Bool>::VALUE);
        assert!(<<False as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_logic() {
        assert!(<<True as Bool>::And<True> as Bool>::VALUE);
        assert!(!<<True as Bool>::And<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Or<True> as Bool>::VALUE);
        assert!(!<<False as Bool>::Or<False> as Bool>::VALUE);
    }

    #[test]
    fn test_const_bridge() {
        assert!(<<BoolConstant<true> as ToBool>::Out as Bool>::VALUE);
        assert!(!<<BoolConstant<false> as ToBool>::Out as Bool>::VALUE);
        assert!(BoolConstant::<true>::VALUE);
        let picked: IfConst<true, u8, u16> = 7u8;
        assert_eq!(picked, 7);
        let other: If<False, u8, u16> = 300u16;
        assert_eq!(other, 300);
    }
}
