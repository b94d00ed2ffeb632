#![cfg(feature = "dev")]
//! White-box tests for the math layer: the normal-equations solver and the
//! log-domain helpers.

use approx::assert_relative_eq;

use trendline_rs::internals::math::linalg::FloatLinalg;
use trendline_rs::internals::math::transform::{first_nonpositive, ln_values};

// ============================================================================
// Normal-Equations Solver
// ============================================================================

#[test]
fn test_solve_identity_system() {
    // I * beta = b
    let a = vec![1.0, 0.0, 0.0, 1.0];
    let b = vec![3.0, -2.0];

    let beta = f64::solve_normal(&a, &b, 2).unwrap();
    assert_relative_eq!(beta[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(beta[1], -2.0, epsilon = 1e-12);
}

#[test]
fn test_solve_known_2x2_system() {
    // [2 1; 1 3] * beta = [5; 10] -> beta = [1; 3]
    let a = vec![2.0, 1.0, 1.0, 3.0];
    let b = vec![5.0, 10.0];

    let beta = f64::solve_normal(&a, &b, 2).unwrap();
    assert_relative_eq!(beta[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(beta[1], 3.0, epsilon = 1e-10);
}

#[test]
fn test_solve_known_3x3_system() {
    // Symmetric positive definite system with solution [1; 2; 3].
    // A = [4 1 0; 1 3 1; 0 1 2], b = A * [1; 2; 3] = [6; 10; 8]
    let a = vec![4.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0];
    let b = vec![6.0, 10.0, 8.0];

    let beta = f64::solve_normal(&a, &b, 3).unwrap();
    assert_relative_eq!(beta[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(beta[1], 2.0, epsilon = 1e-10);
    assert_relative_eq!(beta[2], 3.0, epsilon = 1e-10);
}

#[test]
fn test_solve_singular_system_falls_back_finite() {
    // Rank-1 matrix: QR cannot invert it, the SVD fallback returns the
    // minimum-norm least-squares solution, which must at least be finite.
    let a = vec![1.0, 2.0, 2.0, 4.0];
    let b = vec![3.0, 6.0];

    if let Some(beta) = f64::solve_normal(&a, &b, 2) {
        assert!(beta.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_solve_f32_precision() {
    let a = vec![2.0f32, 0.0, 0.0, 4.0];
    let b = vec![4.0f32, 8.0];

    let beta = f32::solve_normal(&a, &b, 2).unwrap();
    assert!((beta[0] - 2.0).abs() < 1e-5);
    assert!((beta[1] - 2.0).abs() < 1e-5);
}

// ============================================================================
// Log-Domain Helpers
// ============================================================================

#[test]
fn test_ln_values() {
    let values = vec![1.0, core::f64::consts::E, 10.0];
    let mapped = ln_values(&values);

    assert_relative_eq!(mapped[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(mapped[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(mapped[2], 10.0f64.ln(), epsilon = 1e-12);
}

#[test]
fn test_first_nonpositive() {
    assert_eq!(first_nonpositive(&[1.0, 2.0, 3.0]), None);
    assert_eq!(first_nonpositive(&[1.0, 0.0, 3.0]), Some((1, 0.0)));
    assert_eq!(first_nonpositive(&[-5.0, 1.0]), Some((0, -5.0)));
    assert_eq!(first_nonpositive::<f64>(&[]), None);
}
