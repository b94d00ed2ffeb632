//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns solved coefficients into consumer-facing artifacts:
//! - Goodness-of-fit diagnostics (R^2 in original y-space)
//! - Human-readable equation strings
//! - Sampled curve polylines for line drawing
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// R^2 diagnostics in original y-space.
pub mod diagnostics;

/// Equation string rendering.
pub mod equation;

/// Curve sampling for line drawing.
pub mod sampler;
