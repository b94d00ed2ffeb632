//! Equation string rendering.
//!
//! ## Purpose
//!
//! This module renders fitted coefficients as a human-readable equation,
//! one fixed shape per model family, for display next to the plotted curve.
//!
//! ## Design notes
//!
//! * Coefficients are rounded to 2 decimal places for display only; the
//!   full-precision values stay in the fit result.
//! * Rendering is deterministic: a given (kind, coefficients) pair always
//!   produces the same string. Zero coefficients are rendered, not omitted,
//!   so the string's shape does not depend on the data.
//! * A coefficient that rounds to zero is normalized to `0.00` (never
//!   `-0.00`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;

/// Render the fitted equation for the given family and coefficients.
pub fn render<T: Float>(kind: &ModelKind, coefficients: &[T]) -> String {
    match kind {
        ModelKind::Linear => format!(
            "y = {} + {}x",
            display_coeff(coefficients[0]),
            display_coeff(coefficients[1])
        ),
        ModelKind::Exponential => format!(
            "y = {}e^({}x)",
            display_coeff(coefficients[0]),
            display_coeff(coefficients[1])
        ),
        ModelKind::Logarithmic => format!(
            "y = {} + {}ln(x)",
            display_coeff(coefficients[0]),
            display_coeff(coefficients[1])
        ),
        ModelKind::Power => format!(
            "y = {}x^{}",
            display_coeff(coefficients[0]),
            display_coeff(coefficients[1])
        ),
        ModelKind::Polynomial { .. } => {
            let terms: Vec<String> = coefficients
                .iter()
                .enumerate()
                .map(|(power, &c)| match power {
                    0 => display_coeff(c),
                    1 => format!("{}x", display_coeff(c)),
                    _ => format!("{}x^{}", display_coeff(c), power),
                })
                .collect();
            format!("y = {}", terms.join(" + "))
        }
    }
}

/// Round a coefficient to 2 decimal places, normalizing negative zero.
fn display_coeff<T: Float>(c: T) -> String {
    let value = c.to_f64().unwrap_or(f64::NAN);
    let rounded = (value * 100.0).round() / 100.0;
    // -0.004 rounds to -0.0; render it as 0.00.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}
