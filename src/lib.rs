//! # Trendline — Parametric Trend-Curve Fitting for Rust
//!
//! A small, production-ready library for fitting a single 2-D trend curve to
//! a batch of (x, y) samples and exposing everything a plotting layer needs
//! to overlay it on a scatter plot: a predictive function, a goodness-of-fit
//! score, a display equation, and a sampled polyline.
//!
//! ## What does it fit?
//!
//! Five classic model families, each solved by least squares:
//!
//! | Family        | Form                          | Solved as                      |
//! |---------------|-------------------------------|--------------------------------|
//! | `Linear`      | y = a + b·x                   | OLS on (x, y)                  |
//! | `Exponential` | y = a·e^(b·x)                 | OLS on (x, ln y)               |
//! | `Logarithmic` | y = a + b·ln(x)               | OLS on (ln x, y)               |
//! | `Power`       | y = a·x^b                     | OLS on (ln x, ln y)            |
//! | `Polynomial`  | y = c0 + c1·x + ... + cN·x^N  | Vandermonde normal equations   |
//!
//! R² is always computed in the original y-space, never in the transformed
//! space, so scores are comparable across families.
//!
//! ## Quick Start
//!
//! ```rust
//! use trendline_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.1, 3.9, 6.1, 7.9, 10.1];
//!
//! // Build the model
//! let model = TrendFit::new()
//!     .model(Linear)
//!     .curve_points(100)
//!     .build()?;
//!
//! // Fit the model to the data
//! let fit = model.fit(&x, &y)?;
//!
//! println!("{}", fit);
//! assert!(fit.r2 > 0.99);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ```text
//! Trend Fit Summary:
//!   Model: linear
//!   Points: 5
//!   Equation: y = 0.02 + 2.00x
//!   R^2: 0.998801
//! ```
//!
//! ### Polynomial fits
//!
//! The polynomial family carries its order in the variant; every other
//! family is fully determined by its two coefficients:
//!
//! ```rust
//! use trendline_rs::prelude::*;
//!
//! let x: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
//! let y = vec![1.0, 4.0, 9.0, 16.0];
//!
//! let model = TrendFit::new()
//!     .model(Polynomial { order: 2 })
//!     .build()?;
//!
//! let fit = model.fit(&x, &y)?;
//! assert!((fit.predict(5.0) - 25.0).abs() < 1e-6);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Drawing the curve
//!
//! The rendering layer consumes the fit as a polyline across the data's
//! x-range:
//!
//! ```rust
//! use trendline_rs::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! # let y = vec![2.1, 3.9, 6.1, 7.9, 10.1];
//!
//! let model = TrendFit::new().build()?;
//! let fit = model.fit(&x, &y)?;
//!
//! let polyline = model.curve(&fit);       // configured resolution (default 100)
//! let coarse = fit.curve_points(25)?;     // explicit resolution
//! assert_eq!(polyline.len(), 100);
//! assert_eq!(coarse.len(), 25);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<FitResult<T>, FitError>`; nothing is coerced or
//! clamped behind your back:
//!
//! - too few samples for the family → [`FitError::InsufficientData`]
//! - non-positive values on a log-transformed axis → [`FitError::DomainViolation`]
//! - all y identical (R² undefined) → [`FitError::DegenerateTotalVariance`]
//! - singular or near-singular normal equations → [`FitError::NumericInstability`]
//!
//! The `?` operator is idiomatic, but you can also match:
//!
//! ```rust
//! use trendline_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0];
//! let y = vec![1.0, 2.0, 4.0];
//!
//! let model = TrendFit::new().model(Power).build()?;
//! match model.fit(&x, &y) {
//!     Ok(fit) => println!("{}", fit.equation),
//!     Err(e) => eprintln!("Fitting failed: {}", e),   // x[0]=0 violates the log domain
//! }
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Recompute contract
//!
//! The engine is stateless and owns no cache: re-invoke `fit` whenever the
//! model kind, order, or sample data changes, and treat each [`FitResult`]
//! as wholly replacing the prior one. Results are plain immutable values;
//! concurrent fits from different threads need no coordination.
//!
//! ## Parameters
//!
//! | Parameter        | Default  | Range           | Description                        |
//! |------------------|----------|-----------------|------------------------------------|
//! | **model**        | `Linear` | 5 families      | Model family to fit                |
//! | **order**        | 2        | [2, ∞)          | Polynomial degree (variant field)  |
//! | **curve_points** | 100      | [2, ∞)          | Polyline resolution for drawing    |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! trendline-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` samples to reduce the memory footprint on constrained targets.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - fundamental shared types.
//
// Contains the crate-wide error enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the nalgebra-backed normal-equations solver and the
// natural-log transform helpers for linearized families.
mod math;

// Layer 3: Algorithms - core fitting algorithms.
//
// Contains the model-family tagged union, closed-form OLS, and the
// Vandermonde normal-equations assembly for polynomial fits.
mod algorithms;

// Layer 4: Evaluation - post-processing for consumers.
//
// Contains R^2 diagnostics, equation rendering, and curve sampling.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains fail-fast validation, the fit executor, and result assembly.
mod engine;

// High-level fluent API for trend fitting.
//
// Provides the `TrendFit` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard trend-fitting prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use trendline_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CurveSampler, FitError, FitResult,
        ModelKind::{self, Exponential, Linear, Logarithmic, Polynomial, Power},
        TrendFitBuilder as TrendFit, TrendModel, DEFAULT_POLYNOMIAL_ORDER,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
