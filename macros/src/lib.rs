//! Procedural macros for the itertag iterator-category system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(IteratorTraits)]` | struct/enum | Declare the five iterator facts |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(IteratorTraits)]
//! #[iterator(category = Bidirectional, value = u8)]
//! struct Bytes<'a> { data: &'a [u8], pos: usize }
//!
//! // Difference = isize, Pointer = *const u8, Reference<'iter> = &'iter u8
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod common;
mod user;

/// Derive `IteratorTraits` from an `#[iterator(...)]` attribute.
///
/// Keys:
/// - `category` (required): one of the category markers.
/// - `value` (required): the element type.
/// - `difference`: signed integer, defaults to `isize`.
/// - `pointer`: defaults to `*const <value>`.
/// - `reference`: may borrow for `'iter`, defaults to `&'iter <value>`.
#[proc_macro_derive(IteratorTraits, attributes(iterator))]
pub fn derive_iterator_traits(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::iterator_traits::expand_derive_iterator_traits(input).into()
}
