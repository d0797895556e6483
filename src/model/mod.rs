//! Spectral line forward model.
//!
//! The model is implemented as a small, pure evaluator so that posterior and
//! prediction-replay code can stay generic.

pub mod line;

pub use line::*;
