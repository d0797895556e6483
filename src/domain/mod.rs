//! Shared domain types.
//!
//! This module defines:
//!
//! - the model parameter vector (`LineParams`) and its named components
//! - fixed peak centers (`PeakCenters`)
//! - the validated observation set (`SpectrumData`)
//! - dataset summary statistics (`DatasetStats`)

pub mod types;

pub use types::*;
