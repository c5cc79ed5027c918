//! Pairwise price matrix.
//!
//! Provides a dense matrix of precomputed leg prices so solvers that
//! evaluate many candidate tours never recompute the metric per leg.

mod matrix;

pub use matrix::PriceMatrix;
