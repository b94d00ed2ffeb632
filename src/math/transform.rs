//! Natural-log transforms for linearized model families.
//!
//! ## Purpose
//!
//! The exponential, logarithmic, and power families are fitted by ordinary
//! least squares after mapping one or both axes through the natural log.
//! This module provides the mapping and the precondition scan that guards it.
//!
//! ## Invariants
//!
//! * `ln_values` is only called on slices that passed `first_nonpositive`.
//! * Both functions are deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not decide which axes a model family transforms
//!   (see `algorithms::model`).
//! * This module does not report errors; the validator turns a
//!   `first_nonpositive` hit into a `FitError::DomainViolation`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Map every value through the natural log.
pub fn ln_values<T: Float>(values: &[T]) -> Vec<T> {
    values.iter().map(|&v| v.ln()).collect()
}

/// Find the first value that is not strictly positive.
///
/// Returns the index and the value, or `None` if the whole slice is
/// inside the log domain.
pub fn first_nonpositive<T: Float>(values: &[T]) -> Option<(usize, T)> {
    for (i, &v) in values.iter().enumerate() {
        if v <= T::zero() {
            return Some((i, v));
        }
    }
    None
}
