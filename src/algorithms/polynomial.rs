//! Polynomial least squares via the Vandermonde normal equations.
//!
//! ## Purpose
//!
//! This module assembles the (order+1) x (order+1) normal-equations system
//! for a polynomial fit over the monomial basis 1, x, ..., x^N and solves
//! it through the linear algebra backend.
//!
//! ## Design notes
//!
//! * The system matrix entries are power sums: A[j][k] = sum_i x_i^(j+k),
//!   so only the moments sum_i x_i^p for p in 0..=2N are accumulated once.
//! * The matrix is symmetric; column-major and row-major layouts coincide.
//! * Solving is delegated to `FloatLinalg::solve_normal` (QR with SVD
//!   fallback). A `None` result means the Vandermonde system is singular,
//!   e.g., fewer distinct x values than coefficients.
//!
//! ## Invariants
//!
//! * Inputs have equal length >= order + 1 and contain only finite values
//!   (enforced upstream by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::FloatLinalg;

/// Fit y = c0 + c1*x + ... + cN*x^N by least squares.
///
/// Returns the coefficients in ascending powers `[c0..cN]`, or `None`
/// when the normal-equations system cannot be solved.
pub fn fit_polynomial<T: FloatLinalg>(x: &[T], y: &[T], order: usize) -> Option<Vec<T>> {
    let n_coeffs = order + 1;

    // Power sums sum_i x_i^p for p in 0..=2*order.
    let mut moments = vec![T::zero(); 2 * order + 1];
    for &xi in x {
        let mut power = T::one();
        for moment in moments.iter_mut() {
            *moment = *moment + power;
            power = power * xi;
        }
    }

    // Right-hand side b[j] = sum_i x_i^j * y_i.
    let mut rhs = vec![T::zero(); n_coeffs];
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let mut power = T::one();
        for b in rhs.iter_mut() {
            *b = *b + power * yi;
            power = power * xi;
        }
    }

    // Symmetric system matrix A[j][k] = moments[j + k].
    let mut matrix = vec![T::zero(); n_coeffs * n_coeffs];
    for j in 0..n_coeffs {
        for k in 0..n_coeffs {
            matrix[j * n_coeffs + k] = moments[j + k];
        }
    }

    T::solve_normal(&matrix, &rhs, n_coeffs)
}
