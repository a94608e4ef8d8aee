#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables BackInserter in no_std
// - derive: re-exports #[derive(IteratorTraits)]
// - log: trace records from the dispatch entry points

//! # itertag
//!
//! Iterator categories and compile-time dispatched iterator algorithms.
//!
//! **Capability tags for iterator handles, resolved entirely at compile time.**
//!
//! ## Architecture
//!
//! Every iterator handle declares (or is assigned) one category marker.
//! Generic algorithms read the marker through [`IteratorTraits`] and pick the
//! variant whose guaranteed operations fit best.
//!
//! ```text
//! Input ⊂ Forward ⊂ Bidirectional ⊂ RandomAccess        Output (disjoint)
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), BoolConstant, Difference integers           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Categories + Trait Extraction                           |
//! |  - Input/Forward/Bidirectional/RandomAccess/Output, Satisfies     |
//! |  - IteratorTraits (declared types, *const T, *mut T)              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch                                                |
//! |  - distance / advance / next / prev, strategy selection by Pick   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Zero Runtime Dispatch**: the variant is a type chosen by `Bool::If`
//! - **Raw Addresses Included**: `*const T` and `*mut T` are random-access handles
//! - **Compile-time Rejection**: non-iterators and `Output` handles fail to build
//!
//! ## Quick Start
//!
//! ```
//! use itertag::{advance, distance};
//!
//! let arr = [1, 2, 3, 4, 5];
//! let first = arr.as_ptr();
//! let last = first.wrapping_add(arr.len());
//! assert_eq!(distance(first, last), 5);
//!
//! let mut p = first;
//! advance(&mut p, 3);
//! assert_eq!(unsafe { *p }, 4);
//! ```
//!
//! ## Deriving
//!
//! `#[derive(IteratorTraits)]` (feature `derive`) reads `#[iterator(...)]`.
//! `category` and `value` are required; `difference`, `pointer` and
//! `reference` default to `isize`, `*const V` and `&'iter V`.
//!
//! ```
//! use itertag::{DifferenceOf, Forward, IteratorTraits};
//!
//! #[derive(IteratorTraits)]
//! #[iterator(category = Forward, value = u8)]
//! struct Bytes<'a> {
//!     data: &'a [u8],
//! }
//!
//! let zero: DifferenceOf<Bytes<'static>> = 0isize;
//! assert_eq!(zero, 0);
//! ```
//!
//! A missing `category`:
//!
//! ```compile_fail
//! #[derive(itertag::IteratorTraits)]
//! #[iterator(value = u8)]
//! struct Bytes;
//! ```
//!
//! A missing `value`:
//!
//! ```compile_fail
//! #[derive(itertag::IteratorTraits)]
//! #[iterator(category = itertag::Forward)]
//! struct Bytes;
//! ```
//!
//! An unknown key:
//!
//! ```compile_fail
//! #[derive(itertag::IteratorTraits)]
//! #[iterator(category = itertag::Forward, value = u8, element = u8)]
//! struct Bytes;
//! ```
//!
//! The same key twice:
//!
//! ```compile_fail
//! #[derive(itertag::IteratorTraits)]
//! #[iterator(category = itertag::Forward, value = u8, value = u16)]
//! struct Bytes;
//! ```
//!
//! A union:
//!
//! ```compile_fail
//! #[derive(itertag::IteratorTraits)]
//! #[iterator(category = itertag::Forward, value = u8)]
//! union Bits {
//!     byte: u8,
//!     word: u16,
//! }
//! ```
//!
//! A type that already uses the `'iter` lifetime:
//!
//! ```compile_fail
//! #[derive(itertag::IteratorTraits)]
//! #[iterator(category = itertag::Forward, value = u8)]
//! struct Bytes<'iter> {
//!     data: &'iter [u8],
//! }
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

mod trace;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Categories + Trait Extraction
// =============================================================================
pub mod category;
pub mod traits;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;

// Handle types over slices and vectors
pub mod cursor;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use category::{
    Bidirectional, Category, Forward, Input, Output, RandomAccess, Refines, Satisfies,
};
pub use dispatch::{Advance, Distance, advance, distance, next, prev};
pub use primitives::bool::{Bool, BoolConstant, False, IsTrue, ToBool, True};
pub use primitives::difference::Difference;
pub use traits::{
    BidirectionalIterator, CategoryOf, DifferenceOf, ForwardIterator, InputIterator,
    IteratorTraits, OutputIterator, PointerOf, RandomAccessIterator, Readable, ReferenceOf,
    ValueOf,
};

#[cfg(feature = "derive")]
pub use macros::IteratorTraits;

/// Common items for writing and consuming iterator handles.
pub mod prelude {
    pub use crate::category::{
        Bidirectional, Category, Forward, Input, Output, RandomAccess, Refines, Satisfies,
    };
    pub use crate::dispatch::{Advance, Distance, advance, distance, next, prev};
    pub use crate::traits::{
        BidirectionalIterator, ForwardIterator, InputIterator, IteratorTraits, OutputIterator,
        RandomAccessIterator, Readable,
    };
    #[cfg(feature = "derive")]
    pub use macros::IteratorTraits;
}
