//! # Trait Extraction
//!
//! Uniform access to what an iterator handle is and what it can do.
//!
//! - `descriptor.rs`: [`IteratorTraits`], the five associated facts, and projections.
//! - `ops.rs`: the primitive operations each category guarantees.
//! - `raw.rs`: `*const T` / `*mut T` as random-access handles.

pub mod descriptor;
pub mod ops;
mod raw;

pub use descriptor::{CategoryOf, DifferenceOf, IteratorTraits, PointerOf, ReferenceOf, ValueOf};
pub use ops::{
    BidirectionalIterator, ForwardIterator, InputIterator, OutputIterator, RandomAccessIterator,
    Readable,
};
