//! Forward model: two Lorentzian peaks over a linear background.
//!
//! The posterior and the prediction replay rely on two primitive operations:
//! - predict the curve on an arbitrary grid (validating the grid)
//! - predict on a pre-validated span (the hot path inside the likelihood)
//!
//! Both are deterministic, allocation-per-call only, and hold no mutable
//! state, so they are safe to evaluate from many sampler threads at once.

use nalgebra::DVector;

use crate::domain::{AxisSpan, LineParams, PeakCenters};
use crate::error::LineFitError;
use crate::math::{linear_background, lorentzian};

/// The forward model for a two-line spectrum.
///
/// Holds only the fixed, known peak centers; everything varying lives in
/// `LineParams`. Construct once per experiment and share freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    centers: PeakCenters,
}

impl LineModel {
    pub fn new(centers: PeakCenters) -> Self {
        Self { centers }
    }

    pub fn centers(&self) -> PeakCenters {
        self.centers
    }

    /// Predict the curve at each point of `x`.
    ///
    /// The background term is anchored at the ends of `x`, so the grid must
    /// have a usable span; a constant or single-point `x` is an error rather
    /// than a silent NaN curve. A zero peak width, by contrast, is let
    /// through and yields non-finite values (see `math::profile`).
    pub fn predict(
        &self,
        x: &DVector<f64>,
        theta: &LineParams,
    ) -> Result<DVector<f64>, LineFitError> {
        let span = AxisSpan::of(x)?;
        Ok(self.predict_on_span(x, span, theta))
    }

    /// Predict the curve on a grid whose span was validated up front.
    ///
    /// This is the per-proposal path: the posterior validates its data once at
    /// construction and then evaluates here with no fallible work left.
    pub fn predict_on_span(
        &self,
        x: &DVector<f64>,
        span: AxisSpan,
        theta: &LineParams,
    ) -> DVector<f64> {
        x.map(|xi| self.predict_at(xi, span, theta))
    }

    /// Predict a single point given the grid span.
    pub fn predict_at(&self, x: f64, span: AxisSpan, theta: &LineParams) -> f64 {
        let peak_1 = lorentzian(x, self.centers.c1, theta.a1, theta.w1);
        let peak_2 = lorentzian(x, self.centers.c2, theta.a2, theta.w2);
        let background = linear_background(x, span.x_min, span.x_max, theta.b0, theta.b1);
        peak_1 + peak_2 + background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linear_background;

    fn demo_model() -> LineModel {
        LineModel::new(PeakCenters::new(422.0, 428.0))
    }

    fn demo_theta() -> LineParams {
        LineParams::new(1000.0, 2.0, 400.0, 1.5, 35.0, 25.0)
    }

    #[test]
    fn predict_matches_hand_computed_scenario() {
        // Two Lorentzians at c1=422, c2=428 plus the line through
        // (410, 35) and (440, 25), evaluated by hand at four points.
        let x = DVector::from_row_slice(&[410.0, 420.0, 430.0, 440.0]);
        let expected = [
            39.886882440261864,
            114.12694472899584,
            68.25313788297109,
            28.24680065269395,
        ];

        let y = demo_model().predict(&x, &demo_theta()).unwrap();
        assert_eq!(y.len(), x.len());
        for (i, &e) in expected.iter().enumerate() {
            let rel = ((y[i] - e) / e).abs();
            assert!(rel < 1e-9, "point {i}: expected {e}, got {} (rel {rel:.2e})", y[i]);
        }
    }

    #[test]
    fn predict_preserves_grid_length() {
        let x = crate::math::linspace(400.0, 450.0, 137).unwrap();
        let y = demo_model().predict(&x, &demo_theta()).unwrap();
        assert_eq!(y.len(), 137);
    }

    #[test]
    fn zero_second_amplitude_reduces_to_one_peak() {
        let x = DVector::from_row_slice(&[410.0, 415.0, 422.0, 431.0, 440.0]);
        let mut theta = demo_theta();
        theta.a2 = 0.0;

        let y = demo_model().predict(&x, &theta).unwrap();
        for (i, &xi) in x.iter().enumerate() {
            let peak_1 = crate::math::lorentzian(xi, 422.0, theta.a1, theta.w1);
            let background = linear_background(xi, 410.0, 440.0, theta.b0, theta.b1);
            assert!((y[i] - (peak_1 + background)).abs() < 1e-12);
        }
    }

    #[test]
    fn background_endpoints_recover_b0_and_b1() {
        let x = DVector::from_row_slice(&[410.0, 418.0, 426.0, 434.0, 440.0]);
        let theta = demo_theta();
        let y = demo_model().predict(&x, &theta).unwrap();

        let peaks_at = |xi: f64| {
            crate::math::lorentzian(xi, 422.0, theta.a1, theta.w1)
                + crate::math::lorentzian(xi, 428.0, theta.a2, theta.w2)
        };
        assert!((y[0] - peaks_at(410.0) - theta.b0).abs() < 1e-9);
        assert!((y[4] - peaks_at(440.0) - theta.b1).abs() < 1e-9);
    }

    #[test]
    fn degenerate_grid_is_an_error() {
        let x = DVector::from_row_slice(&[425.0, 425.0, 425.0]);
        let err = demo_model().predict(&x, &demo_theta()).unwrap_err();
        assert_eq!(err, crate::error::LineFitError::DegenerateAxis { n: 3 });
    }

    #[test]
    fn zero_width_propagates_nonfinite_values() {
        // Deliberate: width degeneracies are policed by the prior, not here.
        let x = DVector::from_row_slice(&[410.0, 425.0, 440.0]);
        let mut theta = demo_theta();
        theta.w1 = 0.0;
        let y = demo_model().predict(&x, &theta).unwrap();
        assert!(y.iter().any(|v| !v.is_finite()));
    }
}
