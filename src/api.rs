//! High-level API for trend fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the model family and curve
//! sampling, producing a reusable [`TrendModel`] handle.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Fitting is generic over `Float` types for flexible
//!   precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `TrendFit::new()` → setters → `.build()` →
//!   `.fit(&x, &y)`.
//! * **Recompute contract**: `fit` borrows the model, so the caller re-invokes
//!   it whenever the configuration or sample data changes; each returned
//!   [`FitResult`] wholly replaces the prior one.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::FitEngine;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::model::{ModelKind, DEFAULT_POLYNOMIAL_ORDER};
pub use crate::engine::output::FitResult;
pub use crate::evaluation::sampler::CurveSampler;
pub use crate::primitives::errors::FitError;

// ============================================================================
// Trend Fit Builder
// ============================================================================

/// Fluent builder for configuring a trend fit.
#[derive(Debug, Clone, Default)]
pub struct TrendFitBuilder {
    /// Model family to fit.
    pub model: Option<ModelKind>,

    /// Number of curve samples for line drawing.
    pub curve_points: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl TrendFitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            model: None,
            curve_points: None,
            duplicate_param: None,
        }
    }

    /// Set the model family (default: `Linear`).
    pub fn model(mut self, kind: ModelKind) -> Self {
        if self.model.is_some() {
            self.duplicate_param = Some("model");
        }
        self.model = Some(kind);
        self
    }

    /// Set the number of curve samples for line drawing (default: 100).
    pub fn curve_points(mut self, points: usize) -> Self {
        if self.curve_points.is_some() {
            self.duplicate_param = Some("curve_points");
        }
        self.curve_points = Some(points);
        self
    }

    /// Build the configured model handle.
    pub fn build(self) -> Result<TrendModel, FitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate the polynomial order
        let model = self.model.unwrap_or_default();
        if let ModelKind::Polynomial { order } = model {
            Validator::validate_order(order)?;
        }

        // Validate the curve sample count
        let sampler = CurveSampler::new(self.curve_points.unwrap_or(100))?;

        Ok(TrendModel { model, sampler })
    }
}

// ============================================================================
// Trend Model
// ============================================================================

/// Configured trend model handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendModel {
    model: ModelKind,
    sampler: CurveSampler,
}

impl TrendModel {
    /// The configured model family.
    #[inline]
    pub const fn model(&self) -> ModelKind {
        self.model
    }

    /// The configured curve sample count.
    #[inline]
    pub const fn curve_points(&self) -> usize {
        self.sampler.points()
    }

    /// Fit the configured family to the samples.
    ///
    /// Each call is independent: the model is borrowed, not consumed, so the
    /// caller can refit on every configuration or data change.
    pub fn fit<T: FloatLinalg>(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, FitError> {
        FitEngine::fit(self.model, x, y)
    }

    /// Sample the fitted curve at the configured resolution for drawing.
    pub fn curve<T: FloatLinalg>(&self, fit: &FitResult<T>) -> Vec<(T, T)> {
        self.sampler.sample(&fit.kind, &fit.coefficients, fit.x_domain)
    }
}
