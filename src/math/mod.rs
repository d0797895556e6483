//! Mathematical utilities: line profiles and evaluation grids.

pub mod grid;
pub mod profile;

pub use grid::*;
pub use profile::*;
