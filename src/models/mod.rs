//! Domain model types for closed-tour optimization.
//!
//! Provides the core abstractions: immutable places carrying the shared
//! distance/price metric, and finalized tours that make the closing leg
//! back to the starting place explicit.

mod place;
mod tour;

pub use place::Place;
pub use tour::Tour;
