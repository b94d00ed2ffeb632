//! Fit result output structure.
//!
//! ## Purpose
//!
//! This module defines [`FitResult`], the immutable value produced by one
//! fit computation: coefficients, goodness of fit, equation string, and the
//! x-domain needed to sample the curve for drawing.
//!
//! ## Key concepts
//!
//! * **Single-call derivation**: `predict`, `r2`, and `equation` are all
//!   derived from the same coefficients within one fit call; a result is
//!   never stitched together from two computations.
//! * **Wholesale replacement**: a recompute produces a fresh result that
//!   supersedes the previous one; nothing is updated in place.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::evaluation::sampler::CurveSampler;
use crate::primitives::errors::FitError;

// ============================================================================
// Fit Result
// ============================================================================

/// Result of one trend fit computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T: Float> {
    /// Model family that produced this fit.
    pub kind: ModelKind,

    /// Fitted coefficients: `[a, b]` for the two-parameter families,
    /// ascending powers `[c0..cN]` for polynomial.
    pub coefficients: Vec<T>,

    /// Coefficient of determination in original y-space (not clamped).
    pub r2: T,

    /// Human-readable equation with coefficients rounded for display.
    pub equation: String,

    /// Minimum and maximum x of the fitted samples.
    pub x_domain: (T, T),

    /// Number of samples the fit was computed over.
    pub n: usize,
}

impl<T: Float> FitResult<T> {
    /// Evaluate the fitted curve at `x`.
    ///
    /// Pure and deterministic: repeated calls with the same `x` on the same
    /// result return identical output. O(1) for the two-parameter families,
    /// O(order) for polynomial.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.kind.evaluate(&self.coefficients, x)
    }

    /// Sample `points` evenly spaced (x, predict(x)) pairs across the
    /// fitted x-domain for line drawing.
    pub fn curve_points(&self, points: usize) -> Result<Vec<(T, T)>, FitError> {
        let sampler = CurveSampler::new(points)?;
        Ok(sampler.sample(&self.kind, &self.coefficients, self.x_domain))
    }
}

impl<T: Float> fmt::Display for FitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trend Fit Summary:")?;
        writeln!(f, "  Model: {}", self.kind.name())?;
        writeln!(f, "  Points: {}", self.n)?;
        writeln!(f, "  Equation: {}", self.equation)?;
        write!(f, "  R^2: {:.6}", self.r2.to_f64().unwrap_or(f64::NAN))
    }
}
