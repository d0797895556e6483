//! Prior strategies.
//!
//! A prior is anything that maps a parameter vector to a log-density,
//! including `-inf` for regions the sampler must never accept. The flat prior
//! is the permissive default; `WidthFloorPrior` is the informative variant
//! that keeps peak widths away from the `w = 0` singularity of the Lorentzian
//! profile.

use crate::domain::LineParams;

/// Log-prior over the model parameters.
///
/// Implementations must be cheap: the sampler evaluates the prior once per
/// proposal, before the forward model runs. Returning `f64::NEG_INFINITY`
/// rejects the proposal without a curve evaluation.
pub trait Prior: Sync {
    fn log_prior(&self, theta: &LineParams) -> f64;
}

/// Adapter turning any `Fn(&LineParams) -> f64` closure into a prior.
pub struct PriorFn<F>(F);

/// Wrap a closure as a `Prior`.
pub fn prior_fn<F>(f: F) -> PriorFn<F>
where
    F: Fn(&LineParams) -> f64 + Sync,
{
    PriorFn(f)
}

impl<F> Prior for PriorFn<F>
where
    F: Fn(&LineParams) -> f64 + Sync,
{
    fn log_prior(&self, theta: &LineParams) -> f64 {
        (self.0)(theta)
    }
}

/// Flat (improper) prior: every parameter vector is equally plausible.
///
/// This reproduces the permissive default where width and amplitude
/// degeneracies flow through as non-finite likelihood values instead of being
/// rejected up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatPrior;

impl Prior for FlatPrior {
    fn log_prior(&self, _theta: &LineParams) -> f64 {
        0.0
    }
}

/// Rejects any proposal whose peak widths are not strictly above `floor`.
///
/// Flat elsewhere. With `floor = 0.0` this is the textbook positivity
/// constraint that keeps the sampler out of the zero-width singularity and
/// out of the mirrored negative-width mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthFloorPrior {
    pub floor: f64,
}

impl WidthFloorPrior {
    pub fn new(floor: f64) -> Self {
        Self { floor }
    }
}

impl Prior for WidthFloorPrior {
    fn log_prior(&self, theta: &LineParams) -> f64 {
        if theta.w1 > self.floor && theta.w2 > self.floor {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theta(w1: f64, w2: f64) -> LineParams {
        LineParams::new(1000.0, w1, 400.0, w2, 35.0, 25.0)
    }

    #[test]
    fn flat_prior_is_zero_everywhere() {
        assert_eq!(FlatPrior.log_prior(&theta(2.0, 1.5)), 0.0);
        assert_eq!(FlatPrior.log_prior(&theta(-3.0, 0.0)), 0.0);
    }

    #[test]
    fn width_floor_rejects_degenerate_widths() {
        let prior = WidthFloorPrior::new(0.0);
        assert_eq!(prior.log_prior(&theta(2.0, 1.5)), 0.0);
        assert_eq!(prior.log_prior(&theta(0.0, 1.5)), f64::NEG_INFINITY);
        assert_eq!(prior.log_prior(&theta(2.0, -1.0)), f64::NEG_INFINITY);
    }

    #[test]
    fn closures_wrap_into_priors() {
        let prior = prior_fn(|t: &LineParams| {
            if t.a1 >= 0.0 { 0.0 } else { f64::NEG_INFINITY }
        });
        assert_eq!(prior.log_prior(&theta(2.0, 1.5)), 0.0);
    }
}
