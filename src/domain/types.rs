//! Shared domain types.
//!
//! These types are intentionally kept lightweight and (where useful)
//! serializable so they can be:
//!
//! - used in-memory during sampling and prediction replay
//! - exported to JSON by callers alongside sampler output
//! - reloaded later for plotting or comparisons

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::LineFitError;

/// Number of free model parameters.
pub const PARAM_COUNT: usize = 6;

/// Named component of the parameter vector.
///
/// Indices match the layout the sampler sees (`LineParams::to_array`), so the
/// same enum addresses both the typed struct and a raw marginal sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Param {
    Amp1,
    Width1,
    Amp2,
    Width2,
    Back0,
    Back1,
}

impl Param {
    pub const ALL: [Param; PARAM_COUNT] = [
        Param::Amp1,
        Param::Width1,
        Param::Amp2,
        Param::Width2,
        Param::Back0,
        Param::Back1,
    ];

    /// Position of this parameter in the flat vector layout.
    pub fn index(self) -> usize {
        match self {
            Param::Amp1 => 0,
            Param::Width1 => 1,
            Param::Amp2 => 2,
            Param::Width2 => 3,
            Param::Back0 => 4,
            Param::Back1 => 5,
        }
    }

    /// Human-readable label for terminal output and axis titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Param::Amp1 => "peak #1 amplitude",
            Param::Width1 => "peak #1 width",
            Param::Amp2 => "peak #2 amplitude",
            Param::Width2 => "peak #2 width",
            Param::Back0 => "background at x_min",
            Param::Back1 => "background at x_max",
        }
    }
}

/// Model parameter vector `(A1, w1, A2, w2, b0, b1)`.
///
/// Amplitude and width of each Lorentzian peak, plus the background level at
/// the two ends of the x range. No identifiability constraints are enforced
/// here: a negative width yields a valid (if physically meaningless) curve,
/// and keeping widths away from zero is the prior's job, not this type's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    /// Integrated amplitude of peak 1.
    pub a1: f64,
    /// Half-width of peak 1.
    pub w1: f64,
    /// Integrated amplitude of peak 2.
    pub a2: f64,
    /// Half-width of peak 2.
    pub w2: f64,
    /// Background level at `min(x)`.
    pub b0: f64,
    /// Background level at `max(x)`.
    pub b1: f64,
}

impl LineParams {
    pub fn new(a1: f64, w1: f64, a2: f64, w2: f64, b0: f64, b1: f64) -> Self {
        Self { a1, w1, a2, w2, b0, b1 }
    }

    /// Flat layout used at the sampler boundary.
    pub fn to_array(self) -> [f64; PARAM_COUNT] {
        [self.a1, self.w1, self.a2, self.w2, self.b0, self.b1]
    }

    pub fn from_array(v: [f64; PARAM_COUNT]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }

    /// Read one component by name.
    pub fn component(&self, p: Param) -> f64 {
        self.to_array()[p.index()]
    }

    /// Ratio of the two peak widths (`w1 / w2`).
    ///
    /// A common derived quantity: its marginal over a sample tells you whether
    /// the two lines share a broadening mechanism.
    pub fn width_ratio(&self) -> f64 {
        self.w1 / self.w2
    }
}

impl From<[f64; PARAM_COUNT]> for LineParams {
    fn from(v: [f64; PARAM_COUNT]) -> Self {
        Self::from_array(v)
    }
}

/// Fixed central locations of the two spectral lines.
///
/// These are known constants of the experiment (e.g. catalogued transition
/// wavelengths), set at construction and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakCenters {
    pub c1: f64,
    pub c2: f64,
}

impl PeakCenters {
    pub fn new(c1: f64, c2: f64) -> Self {
        Self { c1, c2 }
    }
}

/// Validated span of an independent-variable axis.
///
/// The background term normalizes by `max(x) - min(x)`, so every curve
/// evaluation needs a non-degenerate span. Validating once here keeps the hot
/// evaluation path infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpan {
    pub x_min: f64,
    pub x_max: f64,
}

impl AxisSpan {
    /// Compute and validate the span of `x`.
    ///
    /// Requires at least two finite points with `min(x) < max(x)`.
    pub fn of(x: &DVector<f64>) -> Result<Self, LineFitError> {
        let n = x.len();
        if n < 2 || x.iter().any(|v| !v.is_finite()) {
            return Err(LineFitError::DegenerateAxis { n });
        }
        let x_min = x.min();
        let x_max = x.max();
        if x_max <= x_min {
            return Err(LineFitError::DegenerateAxis { n });
        }
        Ok(Self { x_min, x_max })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

/// Dataset summary statistics (for reporting and sanity checks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// An immutable observation set: sample locations, observed intensities, and
/// per-point standard errors, all of equal length.
///
/// Invariants established at construction and relied on everywhere else:
/// `len(x) == len(y) == len(sigma)`, every `sigma[i]` finite and `> 0`, and
/// the x axis has a usable span (`AxisSpan`).
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumData {
    x: DVector<f64>,
    y: DVector<f64>,
    sigma: DVector<f64>,
    span: AxisSpan,
}

impl SpectrumData {
    pub fn new(
        x: DVector<f64>,
        y: DVector<f64>,
        sigma: DVector<f64>,
    ) -> Result<Self, LineFitError> {
        if x.len() != y.len() || x.len() != sigma.len() {
            return Err(LineFitError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                sigma: sigma.len(),
            });
        }
        let span = AxisSpan::of(&x)?;
        for (i, &s) in sigma.iter().enumerate() {
            if !(s.is_finite() && s > 0.0) {
                return Err(LineFitError::InvalidSigma { index: i, value: s });
            }
        }
        Ok(Self { x, y, sigma, span })
    }

    /// Convenience constructor from plain slices.
    pub fn from_slices(x: &[f64], y: &[f64], sigma: &[f64]) -> Result<Self, LineFitError> {
        Self::new(
            DVector::from_row_slice(x),
            DVector::from_row_slice(y),
            DVector::from_row_slice(sigma),
        )
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.len() == 0
    }

    pub fn x(&self) -> &DVector<f64> {
        &self.x
    }

    pub fn y(&self) -> &DVector<f64> {
        &self.y
    }

    pub fn sigma(&self) -> &DVector<f64> {
        &self.sigma
    }

    pub fn span(&self) -> AxisSpan {
        self.span
    }

    /// Decompose into the raw arrays (consumers keep the invariants by
    /// construction; the span can be recomputed from `x`).
    pub fn into_parts(self) -> (DVector<f64>, DVector<f64>, DVector<f64>) {
        (self.x, self.y, self.sigma)
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            n_points: self.len(),
            x_min: self.span.x_min,
            x_max: self.span.x_max,
            y_min: self.y.min(),
            y_max: self.y.max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_roundtrip_array_layout() {
        let theta = LineParams::new(1000.0, 2.0, 400.0, 1.5, 35.0, 25.0);
        let arr = theta.to_array();
        assert_eq!(LineParams::from_array(arr), theta);
        for p in Param::ALL {
            assert_eq!(theta.component(p), arr[p.index()]);
        }
    }

    #[test]
    fn spectrum_data_rejects_mismatched_lengths() {
        let err = SpectrumData::from_slices(&[1.0, 2.0, 3.0], &[1.0, 2.0], &[0.1, 0.1, 0.1])
            .unwrap_err();
        assert_eq!(err, LineFitError::LengthMismatch { x: 3, y: 2, sigma: 3 });
    }

    #[test]
    fn spectrum_data_rejects_nonpositive_sigma() {
        let err = SpectrumData::from_slices(&[1.0, 2.0], &[1.0, 2.0], &[0.1, 0.0]).unwrap_err();
        assert_eq!(err, LineFitError::InvalidSigma { index: 1, value: 0.0 });
    }

    #[test]
    fn axis_span_rejects_constant_x() {
        let x = DVector::from_row_slice(&[5.0, 5.0, 5.0]);
        assert_eq!(AxisSpan::of(&x).unwrap_err(), LineFitError::DegenerateAxis { n: 3 });
    }

    #[test]
    fn axis_span_rejects_single_point_and_nan() {
        let single = DVector::from_row_slice(&[5.0]);
        assert!(AxisSpan::of(&single).is_err());
        let with_nan = DVector::from_row_slice(&[1.0, f64::NAN, 3.0]);
        assert!(AxisSpan::of(&with_nan).is_err());
    }

    #[test]
    fn stats_report_ranges() {
        let data =
            SpectrumData::from_slices(&[410.0, 420.0, 440.0], &[30.0, 110.0, 25.0], &[5.0, 5.0, 5.0])
                .unwrap();
        let s = data.stats();
        assert_eq!(s.n_points, 3);
        assert_eq!(s.x_min, 410.0);
        assert_eq!(s.x_max, 440.0);
        assert_eq!(s.y_min, 25.0);
        assert_eq!(s.y_max, 110.0);
    }
}
