//! Execution engine for trend fitting.
//!
//! ## Purpose
//!
//! This module provides the engine that orchestrates one fit computation:
//! validate the inputs, linearize the family if needed, solve the
//! least-squares system, recover the family's coefficients, compute
//! diagnostics, and assemble the [`FitResult`].
//!
//! ## Design notes
//!
//! * The engine is stateless: each call is independent, allocates its own
//!   working storage, and produces a self-contained result. Concurrent
//!   calls need no coordination.
//! * Coefficients recovered from a solve are checked finite before they can
//!   reach a result; a singular system or non-finite recovery is reported
//!   as `FitError::NumericInstability`, never returned as NaN.
//! * Separates concerns: validation (`validator`), solving (`algorithms`),
//!   diagnostics and rendering (`evaluation`).
//!
//! ## Key concepts
//!
//! * **Linearization**: the exponential, logarithmic, and power families are
//!   solved as straight lines in log space, then mapped back.
//! * **Recompute contract**: the caller re-invokes the engine whenever the
//!   model kind or sample data changes; each result wholly supersedes the
//!   previous one.
//!
//! ## Invariants
//!
//! * Every result's `predict`, `r2`, and `equation` derive from the same
//!   coefficient vector, computed within a single call.
//! * Inputs reaching the solvers are finite, length-matched, and satisfy
//!   the family's domain preconditions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::algorithms::ols::fit_line;
use crate::algorithms::polynomial::fit_polynomial;
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::r_squared;
use crate::evaluation::equation::render;
use crate::math::linalg::FloatLinalg;
use crate::math::transform::ln_values;
use crate::primitives::errors::FitError;

// ============================================================================
// Fit Engine
// ============================================================================

/// Stateless engine computing one fit per call.
pub struct FitEngine;

impl FitEngine {
    /// Fit the given family to the samples and assemble the result.
    pub fn fit<T: FloatLinalg>(
        kind: ModelKind,
        x: &[T],
        y: &[T],
    ) -> Result<FitResult<T>, FitError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_model(&kind, y.len())?;
        Validator::validate_domain(&kind, x, y)?;

        let coefficients = Self::solve(&kind, x, y)?;
        let r2 = r_squared(&kind, &coefficients, x, y)?;
        let equation = render(&kind, &coefficients);

        Ok(FitResult {
            kind,
            coefficients,
            r2,
            equation,
            x_domain: Self::x_domain(x),
            n: y.len(),
        })
    }

    /// Solve for the family's coefficients, checking the recovery is finite.
    fn solve<T: FloatLinalg>(kind: &ModelKind, x: &[T], y: &[T]) -> Result<Vec<T>, FitError> {
        let solution = match kind {
            // Direct OLS on (x, y).
            ModelKind::Linear => fit_line(x, y).map(|(a, b)| vec![a, b]),

            // ln(y) = ln(a) + b*x; recover a = e^intercept.
            ModelKind::Exponential => {
                let ln_y = ln_values(y);
                fit_line(x, &ln_y).map(|(intercept, slope)| vec![intercept.exp(), slope])
            }

            // y = a + b*ln(x); OLS on (ln x, y) directly.
            ModelKind::Logarithmic => {
                let ln_x = ln_values(x);
                fit_line(&ln_x, y).map(|(a, b)| vec![a, b])
            }

            // ln(y) = ln(a) + b*ln(x); recover a = e^intercept.
            ModelKind::Power => {
                let ln_x = ln_values(x);
                let ln_y = ln_values(y);
                fit_line(&ln_x, &ln_y).map(|(intercept, slope)| vec![intercept.exp(), slope])
            }

            ModelKind::Polynomial { order } => fit_polynomial(x, y, *order),
        };

        let n_coeffs = kind.num_coefficients();
        match solution {
            Some(coefficients) if coefficients.iter().all(|c| c.is_finite()) => Ok(coefficients),
            _ => Err(FitError::NumericInstability { n_coeffs }),
        }
    }

    /// Minimum and maximum of the x values.
    fn x_domain<T: FloatLinalg>(x: &[T]) -> (T, T) {
        let mut min_x = x[0];
        let mut max_x = x[0];
        for &xi in &x[1..] {
            if xi < min_x {
                min_x = xi;
            }
            if xi > max_x {
                max_x = xi;
            }
        }
        (min_x, max_x)
    }
}
