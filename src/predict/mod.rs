//! Prediction replay: from a parameter sample to uncertainty bands.
//!
//! After an external sampler has produced a sample of parameter vectors, the
//! same forward model that drove the likelihood is replayed over an
//! evaluation grid, one curve per draw. The resulting ensemble is the raw
//! material for everything downstream:
//!
//! - per-point columns feed an external highest-density-interval utility
//! - `band` applies such a utility column-wise into an `N_points x 2` band
//! - the best-estimate (MAP) curve is just `LineModel::predict` at the
//!   sampler's mode, no separate code path
//!
//! Replay parallelizes over draws with rayon; each evaluation is independent
//! and read-only.

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::domain::{AxisSpan, LineParams, Param};
use crate::error::LineFitError;
use crate::model::LineModel;

/// One predicted curve per posterior draw, on a shared evaluation grid.
///
/// Stored as an `n_samples x n_points` matrix: row `i` is the curve for
/// draw `i`, column `j` is the predictive distribution at grid point `j`.
pub struct CurveEnsemble {
    x: DVector<f64>,
    curves: DMatrix<f64>,
}

impl CurveEnsemble {
    /// Replay `sample` through the forward model on the grid `x`.
    pub fn from_sample(
        model: &LineModel,
        x: DVector<f64>,
        sample: &[LineParams],
    ) -> Result<Self, LineFitError> {
        let span = AxisSpan::of(&x)?;
        if sample.is_empty() {
            return Err(LineFitError::InvalidConfig(
                "Parameter sample must be non-empty.".to_string(),
            ));
        }

        let rows: Vec<DVector<f64>> = sample
            .par_iter()
            .map(|theta| model.predict_on_span(&x, span, theta))
            .collect();

        let curves = DMatrix::from_fn(sample.len(), x.len(), |i, j| rows[i][j]);
        Ok(Self { x, curves })
    }

    pub fn n_samples(&self) -> usize {
        self.curves.nrows()
    }

    pub fn n_points(&self) -> usize {
        self.curves.ncols()
    }

    /// The evaluation grid shared by every curve.
    pub fn x(&self) -> &DVector<f64> {
        &self.x
    }

    /// The predicted curve for draw `i`.
    pub fn curve(&self, i: usize) -> DVector<f64> {
        self.curves.row(i).transpose()
    }

    /// The predictive sample at grid point `j`, across all draws.
    ///
    /// This is the sequence a density estimator or HDI utility consumes.
    pub fn point_values(&self, j: usize) -> Vec<f64> {
        self.curves.column(j).iter().copied().collect()
    }

    /// Pointwise mean of the ensemble.
    pub fn mean_curve(&self) -> DVector<f64> {
        let n = self.n_samples() as f64;
        DVector::from_iterator(
            self.n_points(),
            self.curves.column_iter().map(|col| col.sum() / n),
        )
    }

    /// Apply an external interval utility column-wise.
    ///
    /// `interval` receives the predictive sample at one grid point plus the
    /// requested probability mass and returns `(lo, hi)`; an HDI estimator is
    /// the intended implementation, but any interval rule fits the seam.
    pub fn band<F>(&self, mass: f64, interval: F) -> Result<Vec<(f64, f64)>, LineFitError>
    where
        F: Fn(&[f64], f64) -> (f64, f64),
    {
        if !(mass.is_finite() && mass > 0.0 && mass < 1.0) {
            return Err(LineFitError::InvalidConfig(format!(
                "Band probability mass must be in (0, 1), got {mass}."
            )));
        }
        Ok((0..self.n_points())
            .map(|j| interval(&self.point_values(j), mass))
            .collect())
    }
}

/// Extract one parameter's marginal sample sequence.
pub fn marginal(sample: &[LineParams], p: Param) -> Vec<f64> {
    sample.iter().map(|theta| theta.component(p)).collect()
}

/// Derived marginal: the ratio of the two peak widths per draw.
pub fn width_ratios(sample: &[LineParams]) -> Vec<f64> {
    sample.iter().map(LineParams::width_ratio).collect()
}
