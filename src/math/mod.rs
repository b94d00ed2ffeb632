//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - The linear algebra backend for solving normal-equations systems
//! - Log-domain transform helpers for the linearized model families
//!
//! These are reusable mathematical building blocks with no model-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend for normal-equations solves.
pub mod linalg;

/// Natural-log transforms for linearized model families.
pub mod transform;
