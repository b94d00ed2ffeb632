//! Model families for trend fitting.
//!
//! ## Purpose
//!
//! This module defines [`ModelKind`], the tagged union over the five
//! supported model families, together with the per-family metadata the
//! engine needs: coefficient counts, minimum sample counts, log-domain
//! requirements, and curve evaluation.
//!
//! ## Design notes
//!
//! * Dispatch is an explicit `match` on the variant; there is no string
//!   lookup anywhere in the crate.
//! * Only the polynomial variant carries a parameter (its order); the other
//!   families are fully determined by their two coefficients.
//! * `evaluate` is the single source of truth for prediction: the engine's
//!   diagnostics, the fit result's `predict`, and the curve sampler all go
//!   through it, so they can never disagree.

// External dependencies
use num_traits::Float;

// ============================================================================
// Model Kind
// ============================================================================

/// Model family for trend fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// y = a + b*x (default)
    #[default]
    Linear,

    /// y = a * e^(b*x)
    Exponential,

    /// y = a + b * ln(x)
    Logarithmic,

    /// y = a * x^b
    Power,

    /// y = c0 + c1*x + ... + cN*x^N, with N = `order`
    Polynomial {
        /// Degree of the polynomial (at least 2).
        order: usize,
    },
}

/// Conventional default order for polynomial fits.
pub const DEFAULT_POLYNOMIAL_ORDER: usize = 2;

impl ModelKind {
    /// Polynomial model of the conventional default order.
    #[inline]
    pub const fn polynomial() -> Self {
        ModelKind::Polynomial {
            order: DEFAULT_POLYNOMIAL_ORDER,
        }
    }

    /// Family name used in error reports and result summaries.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Exponential => "exponential",
            ModelKind::Logarithmic => "logarithmic",
            ModelKind::Power => "power",
            ModelKind::Polynomial { .. } => "polynomial",
        }
    }

    /// Number of coefficients the family solves for.
    #[inline]
    pub const fn num_coefficients(&self) -> usize {
        match self {
            ModelKind::Polynomial { order } => *order + 1,
            _ => 2,
        }
    }

    /// Minimum number of samples required for a determined system.
    #[inline]
    pub const fn min_points(&self) -> usize {
        self.num_coefficients()
    }

    /// Whether the family's transform requires every x to be positive.
    #[inline]
    pub const fn requires_positive_x(&self) -> bool {
        matches!(self, ModelKind::Logarithmic | ModelKind::Power)
    }

    /// Whether the family's transform requires every y to be positive.
    #[inline]
    pub const fn requires_positive_y(&self) -> bool {
        matches!(
            self,
            ModelKind::Exponential | ModelKind::Logarithmic | ModelKind::Power
        )
    }

    /// Evaluate the fitted curve at `x` for the given coefficients.
    ///
    /// Coefficient layout follows the fit: `[a, b]` for the two-parameter
    /// families, ascending powers `[c0..cN]` for polynomial.
    pub fn evaluate<T: Float>(&self, coefficients: &[T], x: T) -> T {
        match self {
            ModelKind::Linear => coefficients[0] + coefficients[1] * x,
            ModelKind::Exponential => coefficients[0] * (coefficients[1] * x).exp(),
            ModelKind::Logarithmic => coefficients[0] + coefficients[1] * x.ln(),
            ModelKind::Power => coefficients[0] * x.powf(coefficients[1]),
            ModelKind::Polynomial { .. } => {
                // Horner evaluation, highest power first.
                coefficients
                    .iter()
                    .rev()
                    .fold(T::zero(), |acc, &c| acc * x + c)
            }
        }
    }
}
