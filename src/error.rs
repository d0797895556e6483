//! Crate-level error type.
//!
//! The error surface is deliberately narrow: the library does no I/O, so
//! everything here is either a precondition violation on input data or a
//! misuse of a forward-only posterior. Numeric degeneracies that the model
//! intentionally lets through (e.g. a zero peak width) are *not* errors; they
//! propagate as non-finite values for the caller's prior to police.

/// Errors produced when constructing or evaluating the model and posterior.
#[derive(Clone, PartialEq)]
pub enum LineFitError {
    /// The independent-variable axis is unusable: fewer than two points,
    /// non-finite values, or `min(x) == max(x)` (the background slope would
    /// divide by zero).
    DegenerateAxis { n: usize },
    /// `x`, `y`, and `sigma` must all have the same length.
    LengthMismatch { x: usize, y: usize, sigma: usize },
    /// Per-point standard errors must be finite and strictly positive.
    InvalidSigma { index: usize, value: f64 },
    /// `likelihood`/`log_posterior` was called on a posterior constructed
    /// without observations (forward-only mode).
    MissingObservations,
    /// A configuration value failed validation (synthetic generation, grids).
    InvalidConfig(String),
}

impl std::fmt::Display for LineFitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineFitError::DegenerateAxis { n } => write!(
                f,
                "Degenerate x axis: need >= 2 finite points with min(x) < max(x), got n={n}."
            ),
            LineFitError::LengthMismatch { x, y, sigma } => write!(
                f,
                "Mismatched array lengths: len(x)={x}, len(y)={y}, len(sigma)={sigma}."
            ),
            LineFitError::InvalidSigma { index, value } => write!(
                f,
                "Standard error at index {index} must be finite and > 0, got {value}."
            ),
            LineFitError::MissingObservations => write!(
                f,
                "Posterior was constructed forward-only; attach observations before \
                 calling likelihood or log_posterior."
            ),
            LineFitError::InvalidConfig(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::fmt::Debug for LineFitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LineFitError({self})")
    }
}

impl std::error::Error for LineFitError {}
