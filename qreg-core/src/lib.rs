//! Core value types for the qreg quantum register simulator
//!
//! This crate provides the fundamental value types for describing
//! single-qubit unitaries:
//! - [`Qubit`]: normalized two-amplitude basis image
//! - [`Gate`]: single-qubit unitary descriptor (a pair of basis images)
//! - [`CGate`]: controlled wrapper around a [`Gate`]
//!
//! # Example
//! ```
//! use qreg_core::{Complex64, Gate, Qubit};
//!
//! // The Hadamard gate: both images are normalized at construction
//! let h = Gate::new(
//!     Qubit::new(Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)),
//!     Qubit::new(Complex64::new(1.0, 0.0), Complex64::new(-1.0, 0.0)),
//! );
//! assert!((h.image0().a0().re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//! ```

pub mod gate;
pub mod qubit;

// Re-exports for convenience
pub use gate::{CGate, Gate};
pub use num_complex::Complex64;
pub use qubit::Qubit;
