//! Posterior construction and evaluation.
//!
//! Responsibilities:
//!
//! - combine the forward model with an observation set into an unnormalized
//!   log-posterior (`posterior`)
//! - pluggable prior strategies, from the flat placeholder to informative
//!   width bounds (`prior`)
//! - the sampler-facing seam: a validated, infallible `theta -> f64`
//!   capability (`LogDensity`)

pub mod posterior;
pub mod prior;

pub use posterior::*;
pub use prior::*;
