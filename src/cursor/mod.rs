//! Concrete handle types.
//!
//! - [`Cursor`]: random-access position in a slice.
//! - [`Restrict`]: the same handle seen through a weaker category.
//! - [`BackInserter`]: output handle appending to a `Vec` (feature `alloc`).

#[cfg(feature = "alloc")]
mod inserter;
mod restrict;
mod slice;

#[cfg(feature = "alloc")]
pub use inserter::BackInserter;
pub use restrict::Restrict;
pub use slice::{Cursor, cursors};
