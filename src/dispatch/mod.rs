//! # Capability-Dispatched Algorithms
//!
//! `distance` and `advance` each come as a family of variants. The public
//! entry point reads `I::Category`, asks [`Satisfies`](crate::Satisfies)
//! which variant fits, and calls it. The choice is a type, so there is no
//! branch left at runtime.
//!
//! ## Module Structure
//!
//! ```text
//! dispatch/
//! ├── select.rs   - Pick, strategy selection per category
//! ├── distance.rs - InputDistance, RandomAccessDistance, distance()
//! └── advance.rs  - InputAdvance, BidirectionalAdvance, RandomAccessAdvance,
//!                   advance(), next(), prev()
//! ```
//!
//! | Category        | distance               | advance                |
//! |-----------------|------------------------|------------------------|
//! | `Input`         | `InputDistance`        | `InputAdvance`         |
//! | `Forward`       | `InputDistance`        | `InputAdvance`         |
//! | `Bidirectional` | `InputDistance`        | `BidirectionalAdvance` |
//! | `RandomAccess`  | `RandomAccessDistance` | `RandomAccessAdvance`  |
//! | `Output`        | none                   | none                   |

pub mod advance;
pub mod distance;
pub mod select;

pub use advance::{
    Advance, AdvanceStrategy, BidirectionalAdvance, InputAdvance, RandomAccessAdvance, advance,
    next, prev,
};
pub use distance::{Distance, DistanceStrategy, InputDistance, RandomAccessDistance, distance};
pub use select::{AdvanceStrategyOf, DistanceStrategyOf, NoStrategy, Pick, Strategy};
