//! Curve sampling for line drawing.
//!
//! ## Purpose
//!
//! A rendering consumer draws the fitted curve as a polyline. This module
//! produces that polyline: a fixed number of (x, predict(x)) pairs evenly
//! spaced across the fit's x-domain, endpoints included.
//!
//! ## Design notes
//!
//! * Sampling is pure and side-effect free; each call allocates its own
//!   output and evaluates the curve in O(points * order).
//! * The final sample lands exactly on the domain maximum rather than on
//!   `min + step * (points - 1)`, so the polyline always spans the full
//!   data range.
//!
//! ## Non-goals
//!
//! * This module does not clip, scale, or project points for screen space;
//!   that is the rendering consumer's job.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::primitives::errors::FitError;

// ============================================================================
// Curve Sampler
// ============================================================================

/// Samples a fitted curve at evenly spaced positions for line drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSampler {
    points: usize,
}

impl CurveSampler {
    /// Create a sampler producing `points` samples (at least 2).
    pub fn new(points: usize) -> Result<Self, FitError> {
        if points < 2 {
            return Err(FitError::InvalidCurvePoints(points));
        }
        Ok(Self { points })
    }

    /// Number of samples produced per curve.
    #[inline]
    pub const fn points(&self) -> usize {
        self.points
    }

    /// Evenly spaced x positions across `x_domain`, endpoints included.
    pub fn positions<T: Float>(&self, x_domain: (T, T)) -> Vec<T> {
        let (min_x, max_x) = x_domain;
        let count = T::from(self.points - 1).unwrap();
        let step = (max_x - min_x) / count;

        (0..self.points)
            .map(|i| {
                if i == self.points - 1 {
                    max_x
                } else {
                    min_x + step * T::from(i).unwrap()
                }
            })
            .collect()
    }

    /// Sample (x, predict(x)) pairs for the given family and coefficients.
    pub fn sample<T: Float>(
        &self,
        kind: &ModelKind,
        coefficients: &[T],
        x_domain: (T, T),
    ) -> Vec<(T, T)> {
        self.positions(x_domain)
            .into_iter()
            .map(|x| (x, kind.evaluate(coefficients, x)))
            .collect()
    }
}

impl Default for CurveSampler {
    /// 100 samples, matching the conventional polyline resolution.
    fn default() -> Self {
        Self { points: 100 }
    }
}
