//! `line-fit` library crate.
//!
//! Bayesian fitting of a two-peak spectral line model to noisy intensity
//! data. The crate owns the forward model (two Lorentzian profiles plus a
//! linear background) and the unnormalized log-posterior built on top of it.
//! The Markov-chain sampler and the density-estimation / highest-density
//! interval utilities that consume our outputs are external collaborators
//! reached through function seams, so:
//!
//! - core logic is testable without any sampler present
//! - modules are reusable (e.g., other line shapes, notebooks, services)
//! - code stays easy to navigate as the project grows

pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod model;
pub mod predict;
pub mod synth;
