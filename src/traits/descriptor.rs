//! The iterator descriptor.
//!
//! Any handle type that wants to take part in dispatch states five facts
//! about itself: its category marker, element type, difference type,
//! pointer-like type and reference-like type. User types implement
//! [`IteratorTraits`] directly (or derive it); raw addresses get it for free.

use crate::category::Category;
use crate::primitives::Difference;

/// Associated facts of an iterator handle.
///
/// ```
/// use itertag::{Forward, IteratorTraits};
///
/// struct Countdown(u32);
///
/// impl IteratorTraits for Countdown {
///     type Category = Forward;
///     type Value = u32;
///     type Difference = i64;
///     type Pointer = *const u32;
///     type Reference<'a> = u32;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an iterator handle",
    label = "`{Self}` declares no iterator category",
    note = "implement `IteratorTraits` for it or use `#[derive(IteratorTraits)]`; `*const T` and `*mut T` are covered already"
)]
pub trait IteratorTraits {
    /// Capability marker.
    type Category: Category;
    /// What kind of value the handle designates, independent of access mutability.
    type Value;
    /// Signed step count between two handles.
    type Difference: Difference;
    /// Pointer-like access type.
    type Pointer;
    /// Reference-like access type, borrowed for `'a`.
    type Reference<'a>
    where
        Self: 'a;
}

/// The category marker of `I`.
pub type CategoryOf<I> = <I as IteratorTraits>::Category;

/// The element type of `I`.
pub type ValueOf<I> = <I as IteratorTraits>::Value;

/// The difference type of `I`.
pub type DifferenceOf<I> = <I as IteratorTraits>::Difference;

/// The pointer-like type of `I`.
pub type PointerOf<I> = <I as IteratorTraits>::Pointer;

/// The reference-like type of `I` for the borrow `'a`.
pub type ReferenceOf<'a, I> = <I as IteratorTraits>::Reference<'a>;
