//! Input validation for trend fitting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for fit configuration and
//! input data. It checks requirements such as input lengths, finite values,
//! model-specific sample minimums, and log-domain preconditions.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Sample Minimums**: Every family needs at least as many samples as
//!   coefficients (2, or order + 1 for polynomial).
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Domain Preconditions**: Families fitted through a natural-log
//!   transform require the transformed axes to be strictly positive.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the least-squares solve itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::math::transform::first_nonpositive;
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods return `Result<(), FitError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for trend fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(FitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Model Validation
    // ========================================================================

    /// Validate the polynomial order parameter.
    pub fn validate_order(order: usize) -> Result<(), FitError> {
        if order < 2 {
            return Err(FitError::InvalidOrder(order));
        }
        Ok(())
    }

    /// Validate that the sample count determines the family's coefficients.
    pub fn validate_model(kind: &ModelKind, n_samples: usize) -> Result<(), FitError> {
        if let ModelKind::Polynomial { order } = kind {
            Self::validate_order(*order)?;
        }

        let need = kind.min_points();
        if n_samples < need {
            return Err(FitError::InsufficientData {
                got: n_samples,
                need,
            });
        }

        Ok(())
    }

    /// Validate the log-domain preconditions for the family's transform.
    pub fn validate_domain<T: Float>(kind: &ModelKind, x: &[T], y: &[T]) -> Result<(), FitError> {
        if kind.requires_positive_x() {
            if let Some((index, value)) = first_nonpositive(x) {
                return Err(FitError::DomainViolation {
                    model: kind.name(),
                    axis: "x",
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        if kind.requires_positive_y() {
            if let Some((index, value)) = first_nonpositive(y) {
                return Err(FitError::DomainViolation {
                    model: kind.name(),
                    axis: "y",
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
