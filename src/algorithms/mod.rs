//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core fitting algorithms:
//! - The model-family tagged union and per-family evaluation
//! - Closed-form ordinary least squares for two-parameter families
//! - Vandermonde normal-equations assembly for polynomial fits
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Model families and per-family curve evaluation.
pub mod model;

/// Closed-form ordinary least squares for a straight line.
pub mod ols;

/// Polynomial least squares via the Vandermonde normal equations.
pub mod polynomial;
