//! Closed-form ordinary least squares for a straight line.
//!
//! ## Purpose
//!
//! All four two-parameter families reduce to fitting y = a + b*x, either on
//! the raw samples (linear, logarithmic after transforming x) or on
//! log-mapped samples (exponential, power). This module provides the
//! closed-form solution of that 2x2 system.
//!
//! ## Design notes
//!
//! * slope = cov(x, y) / var(x), intercept = mean(y) - slope * mean(x).
//! * Means are subtracted before forming products, which keeps the
//!   accumulations well-conditioned for offset-heavy data.
//! * A zero variance in x (all x identical) leaves the system singular;
//!   the function returns `None` and the engine reports
//!   `FitError::NumericInstability`.
//!
//! ## Invariants
//!
//! * Inputs have equal length >= 2 and contain only finite values
//!   (enforced upstream by the validator).

// External dependencies
use num_traits::Float;

/// Fit y = a + b*x by ordinary least squares.
///
/// Returns `(intercept, slope)`, or `None` when x carries no variance.
pub fn fit_line<T: Float>(x: &[T], y: &[T]) -> Option<(T, T)> {
    let n = T::from(x.len()).unwrap();

    let mut x_sum = T::zero();
    let mut y_sum = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        x_sum = x_sum + xi;
        y_sum = y_sum + yi;
    }
    let x_mean = x_sum / n;
    let y_mean = y_sum / n;

    let mut ss_xx = T::zero();
    let mut ss_xy = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        ss_xx = ss_xx + dx * dx;
        ss_xy = ss_xy + dx * (yi - y_mean);
    }

    if ss_xx <= T::zero() {
        return None;
    }

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;
    Some((intercept, slope))
}
