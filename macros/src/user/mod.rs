//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(IteratorTraits)]` | on struct/enum | Declare iterator facts |

pub mod iterator_traits;
