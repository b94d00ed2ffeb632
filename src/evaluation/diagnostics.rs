//! Goodness-of-fit diagnostics.
//!
//! ## Purpose
//!
//! This module computes the coefficient of determination for a fitted model.
//! R^2 is always computed in the original y-space, never in the transformed
//! space the family was solved in, so scores are comparable across model
//! kinds.
//!
//! ## Design notes
//!
//! * `r2 = 1 - SS_res / SS_tot` with `SS_res = sum (y_i - predict(x_i))^2`
//!   and `SS_tot = sum (y_i - mean(y))^2` over the original samples.
//! * R^2 is not clamped: pathological fits may score below 0.
//! * `SS_tot = 0` (all y identical) leaves R^2 undefined by the formula;
//!   this is signaled as `FitError::DegenerateTotalVariance` rather than
//!   silently producing NaN.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::primitives::errors::FitError;

/// Compute R^2 for the fitted coefficients over the original samples.
pub fn r_squared<T: Float>(
    kind: &ModelKind,
    coefficients: &[T],
    x: &[T],
    y: &[T],
) -> Result<T, FitError> {
    let n = T::from(y.len()).unwrap();

    let mut y_sum = T::zero();
    for &yi in y {
        y_sum = y_sum + yi;
    }
    let y_mean = y_sum / n;

    let mut ss_res = T::zero();
    let mut ss_tot = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let residual = yi - kind.evaluate(coefficients, xi);
        let deviation = yi - y_mean;
        ss_res = ss_res + residual * residual;
        ss_tot = ss_tot + deviation * deviation;
    }

    if ss_tot <= T::zero() {
        return Err(FitError::DegenerateTotalVariance);
    }

    Ok(T::one() - ss_res / ss_tot)
}
