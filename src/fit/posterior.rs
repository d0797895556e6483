//! The unnormalized log-posterior for a two-line spectrum.
//!
//! `LinePosterior` owns the observation set and the forward model; after
//! construction it is read-only, so a single instance can be evaluated from
//! many sampler threads concurrently.
//!
//! Two construction modes:
//!
//! - `new` / `with_prior`: the inference mode, with observations attached.
//! - `forward_only`: simulation mode, used to generate synthetic data before
//!   any observations exist. Calling `likelihood` or `log_posterior` in this
//!   mode fails loudly with `MissingObservations` instead of returning a
//!   meaningless value.
//!
//! The sampler boundary is `bind()`: it checks the missing-data state once
//! and hands back an infallible `theta -> f64` capability (`LogDensity`), so
//! an external sampler never has to thread `Result` through its proposal
//! loop.

use nalgebra::DVector;

use crate::domain::{AxisSpan, LineParams, SpectrumData};
use crate::error::LineFitError;
use crate::fit::prior::{FlatPrior, Prior};
use crate::model::LineModel;

/// A validated capability "parameter vector in, scalar log-density out".
///
/// This is the only interface an external Markov-chain sampler needs. Use
/// `density_fn` to hand a sampler an ad-hoc closure instead of a bound
/// posterior.
pub trait LogDensity: Sync {
    fn log_density(&self, theta: &LineParams) -> f64;
}

/// Adapter turning any `Fn(&LineParams) -> f64` closure into a `LogDensity`.
pub struct DensityFn<F>(F);

/// Wrap a closure as a `LogDensity`.
pub fn density_fn<F>(f: F) -> DensityFn<F>
where
    F: Fn(&LineParams) -> f64 + Sync,
{
    DensityFn(f)
}

impl<F> LogDensity for DensityFn<F>
where
    F: Fn(&LineParams) -> f64 + Sync,
{
    fn log_density(&self, theta: &LineParams) -> f64 {
        (self.0)(theta)
    }
}

struct Observations {
    y: DVector<f64>,
    sigma: DVector<f64>,
}

/// Forward model + observations + prior, evaluated as a scalar log-density.
pub struct LinePosterior<P: Prior = FlatPrior> {
    model: LineModel,
    x: DVector<f64>,
    span: AxisSpan,
    obs: Option<Observations>,
    prior: P,
}

impl LinePosterior<FlatPrior> {
    /// Inference-mode posterior with the flat placeholder prior.
    pub fn new(model: LineModel, data: SpectrumData) -> Self {
        Self::with_prior(model, data, FlatPrior)
    }
}

impl<P: Prior> LinePosterior<P> {
    /// Inference-mode posterior with an explicit prior strategy.
    pub fn with_prior(model: LineModel, data: SpectrumData, prior: P) -> Self {
        let span = data.span();
        let (x, y, sigma) = data.into_parts();
        Self {
            model,
            x,
            span,
            obs: Some(Observations { y, sigma }),
            prior,
        }
    }

    /// Simulation-mode posterior: grid only, no observations.
    ///
    /// Only `forward` is usable in this state; the likelihood methods return
    /// `MissingObservations`.
    pub fn forward_only(model: LineModel, x: DVector<f64>, prior: P) -> Result<Self, LineFitError> {
        let span = AxisSpan::of(&x)?;
        Ok(Self { model, x, span, obs: None, prior })
    }

    pub fn model(&self) -> &LineModel {
        &self.model
    }

    /// The grid the posterior evaluates the model on.
    pub fn x(&self) -> &DVector<f64> {
        &self.x
    }

    /// Predicted curve on the posterior's own grid.
    ///
    /// This is the simulation entry point: usable with or without
    /// observations attached.
    pub fn forward(&self, theta: &LineParams) -> DVector<f64> {
        self.model.predict_on_span(&self.x, self.span, theta)
    }

    /// Log-prior for a candidate parameter vector.
    pub fn log_prior(&self, theta: &LineParams) -> f64 {
        self.prior.log_prior(theta)
    }

    /// Gaussian log-likelihood, up to the constant normalization term:
    ///
    /// `-0.5 * sum(((y_i - model_i) / sigma_i)^2)`
    pub fn likelihood(&self, theta: &LineParams) -> Result<f64, LineFitError> {
        let obs = self.obs.as_ref().ok_or(LineFitError::MissingObservations)?;
        Ok(self.chi_squared_half(obs, theta))
    }

    /// `likelihood + prior`.
    ///
    /// A `-inf` prior short-circuits before the forward model runs, so an
    /// informative prior shields the likelihood from width singularities.
    pub fn log_posterior(&self, theta: &LineParams) -> Result<f64, LineFitError> {
        let obs = self.obs.as_ref().ok_or(LineFitError::MissingObservations)?;
        let lp = self.prior.log_prior(theta);
        if lp == f64::NEG_INFINITY {
            return Ok(lp);
        }
        Ok(lp + self.chi_squared_half(obs, theta))
    }

    /// Validate once, then evaluate infallibly.
    ///
    /// Fails now (loudly) if the posterior is forward-only; the returned
    /// binding can be handed to a sampler as a plain `theta -> f64`.
    pub fn bind(&self) -> Result<BoundDensity<'_, P>, LineFitError> {
        match self.obs.as_ref() {
            Some(obs) => Ok(BoundDensity { posterior: self, obs }),
            None => Err(LineFitError::MissingObservations),
        }
    }

    fn chi_squared_half(&self, obs: &Observations, theta: &LineParams) -> f64 {
        let predicted = self.forward(theta);
        let scaled = (&obs.y - predicted).component_div(&obs.sigma);
        -0.5 * scaled.norm_squared()
    }
}

/// A posterior binding with observations guaranteed present.
pub struct BoundDensity<'a, P: Prior> {
    posterior: &'a LinePosterior<P>,
    obs: &'a Observations,
}

impl<P: Prior> LogDensity for BoundDensity<'_, P> {
    fn log_density(&self, theta: &LineParams) -> f64 {
        let lp = self.posterior.prior.log_prior(theta);
        if lp == f64::NEG_INFINITY {
            return lp;
        }
        lp + self.posterior.chi_squared_half(self.obs, theta)
    }
}
