//! Error types for trend fitting.
//!
//! ## Purpose
//!
//! This module defines [`FitError`], the single error enum surfaced by every
//! fallible operation in the crate: input validation, model configuration,
//! the least-squares solve, and diagnostics.
//!
//! ## Design notes
//!
//! * **Values, not messages**: variants carry the offending values so callers
//!   can react programmatically; `Display` renders them for humans.
//! * **No silent fallback**: a failed fit produces no result. The caller
//!   decides whether to keep the previous fit or show an error indicator.
//! * **no_std compatible**: `std::error::Error` is implemented only when the
//!   `std` feature is enabled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// FitError
// ============================================================================

/// Errors produced while configuring or computing a trend fit.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Input arrays are empty.
    EmptyInput,

    /// Input arrays have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// Too few samples to determine the requested model's coefficients.
    InsufficientData {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        need: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input.
    InvalidNumericValue(String),

    /// Polynomial order below the supported minimum of 2.
    InvalidOrder(usize),

    /// A log-transformed model family received a non-positive value.
    DomainViolation {
        /// Model family name.
        model: &'static str,
        /// Which axis violated the domain ("x" or "y").
        axis: &'static str,
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// All y values are identical, so R^2 is undefined by SS_res/SS_tot.
    DegenerateTotalVariance,

    /// The normal-equations system is singular or produced non-finite
    /// coefficients (e.g., collinear x values or a near-singular
    /// Vandermonde matrix).
    NumericInstability {
        /// Number of coefficients the solve was attempting to recover.
        n_coeffs: usize,
    },

    /// Curve sample count below the minimum of 2.
    InvalidCurvePoints(usize),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyInput => write!(f, "Input arrays are empty"),
            FitError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            FitError::InsufficientData { got, need } => {
                write!(f, "Insufficient data: got {} points, need at least {}", got, need)
            }
            FitError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            FitError::InvalidOrder(order) => {
                write!(f, "Invalid polynomial order: {} (must be at least 2)", order)
            }
            FitError::DomainViolation {
                model,
                axis,
                index,
                value,
            } => {
                write!(
                    f,
                    "Domain violation for {} fit: {}[{}]={} (must be > 0)",
                    model, axis, index, value
                )
            }
            FitError::DegenerateTotalVariance => {
                write!(f, "Total variance is zero: all y values are identical, R^2 is undefined")
            }
            FitError::NumericInstability { n_coeffs } => {
                write!(
                    f,
                    "Numerically unstable system: could not solve for {} coefficients",
                    n_coeffs
                )
            }
            FitError::InvalidCurvePoints(points) => {
                write!(f, "Invalid curve points: {} (must be at least 2)", points)
            }
            FitError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}
