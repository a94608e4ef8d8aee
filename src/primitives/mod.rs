//! # Layer 0: Primitives
//!
//! Basic building blocks for the category system:
//! - `bool.rs`: Type-level boolean logic (True/False) and the const bridge.
//! - `difference.rs`: Signed integers used as iterator difference types.

pub mod bool;
pub mod difference;

// Re-export key types at this level
pub use bool::{Bool, BoolConstant, False, If, IfConst, IsTrue, ToBool, True};
pub use difference::Difference;
