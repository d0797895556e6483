//! Evaluation grid generation.
//!
//! Both synthetic data generation and prediction replay evaluate the model on
//! a regular grid; the helper here validates its inputs once so downstream
//! code can assume a usable axis.

use nalgebra::DVector;

use crate::error::LineFitError;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn linspace(min: f64, max: f64, steps: usize) -> Result<DVector<f64>, LineFitError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(LineFitError::InvalidConfig(format!(
            "Invalid grid range: min={min}, max={max} (must be finite and max>min)."
        )));
    }
    if steps < 2 {
        return Err(LineFitError::InvalidConfig(
            "Grid steps must be >= 2.".to_string(),
        ));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    Ok(DVector::from_iterator(
        steps,
        (0..steps).map(|i| min + step * i as f64),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(410.0, 440.0, 31).unwrap();
        assert_eq!(v.len(), 31);
        assert!((v[0] - 410.0).abs() < 1e-12);
        assert!((v[30] - 440.0).abs() < 1e-12);
        assert!((v[1] - 411.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_rejects_bad_ranges() {
        assert!(linspace(440.0, 410.0, 10).is_err());
        assert!(linspace(410.0, 440.0, 1).is_err());
        assert!(linspace(f64::NAN, 440.0, 10).is_err());
    }
}
