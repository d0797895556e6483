//! Scalar profile functions for the spectral line model.
//!
//! The model is a sum of two Lorentzian (Cauchy) peaks over a linear
//! background. Both primitives are implemented here as small, pure scalar
//! functions so that curve evaluation code can stay generic over the grid
//! representation.
//!
//! Numerical notes:
//! - `lorentzian` is *not* guarded against `w == 0`: the division produces a
//!   non-finite value that propagates into the curve. Rejecting such
//!   parameters is the prior's job (a flat prior lets them through, an
//!   informative one returns -inf), not the profile's.
//! - a negative `w` is mathematically valid but flips the profile's sign
//!   (the prefactor `a/(π·w)` is odd in `w`); it produces a well-defined,
//!   physically nonsensical curve.

use std::f64::consts::PI;

/// Lorentzian profile with integrated amplitude `a`, center `c`, half-width `w`:
///
/// `L(x) = (a / (π·w)) / (1 + ((x - c)/w)²)`
///
/// The peak value is `a / (π·w)` at `x = c`, and the profile falls to half of
/// that at `x = c ± w`.
pub fn lorentzian(x: f64, c: f64, a: f64, w: f64) -> f64 {
    let u = (x - c) / w;
    (a / (PI * w)) / (1.0 + u * u)
}

/// Straight line through `(x_min, b0)` and `(x_max, b1)`, evaluated at `x`.
///
/// # Preconditions
/// `x_max > x_min` (enforced upstream by `AxisSpan`); a zero span would make
/// the slope divide by zero.
pub fn linear_background(x: f64, x_min: f64, x_max: f64, b0: f64, b1: f64) -> f64 {
    let d = (b1 - b0) / (x_max - x_min);
    d * x + (b0 - d * x_min)
}
