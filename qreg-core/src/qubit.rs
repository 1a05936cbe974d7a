//! Single-qubit state values

use num_complex::Complex64;
use std::ops::Add;

/// A normalized single-qubit state
///
/// Holds the complex amplitudes of |0⟩ and |1⟩. Construction divides both
/// components by their joint norm, so every `Qubit` value satisfies
/// |a0|² + |a1|² = 1. Values are immutable after construction.
///
/// # Example
/// ```
/// use qreg_core::{Complex64, Qubit};
///
/// // Amplitudes are normalized, not validated
/// let q = Qubit::new(Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0));
/// assert!((q.a0().norm() - 0.6).abs() < 1e-12);
/// assert!((q.a1().norm() - 0.8).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Qubit {
    a0: Complex64,
    a1: Complex64,
}

impl Qubit {
    /// Create a qubit from raw amplitudes, normalizing them
    ///
    /// The amplitudes must not both be zero.
    pub fn new(a0: Complex64, a1: Complex64) -> Self {
        let norm = (a0.norm_sqr() + a1.norm_sqr()).sqrt();
        debug_assert!(norm > 0.0, "qubit amplitudes must not both be zero");
        Self {
            a0: a0 / norm,
            a1: a1 / norm,
        }
    }

    /// The computational basis state |0⟩
    #[inline]
    pub fn zero() -> Self {
        Self {
            a0: Complex64::new(1.0, 0.0),
            a1: Complex64::new(0.0, 0.0),
        }
    }

    /// The computational basis state |1⟩
    #[inline]
    pub fn one() -> Self {
        Self {
            a0: Complex64::new(0.0, 0.0),
            a1: Complex64::new(1.0, 0.0),
        }
    }

    /// Amplitude of |0⟩
    #[inline]
    pub fn a0(&self) -> Complex64 {
        self.a0
    }

    /// Amplitude of |1⟩
    #[inline]
    pub fn a1(&self) -> Complex64 {
        self.a1
    }
}

/// Normalized superposition of two qubit states
impl Add for Qubit {
    type Output = Qubit;

    fn add(self, rhs: Qubit) -> Qubit {
        Qubit::new(self.a0 + rhs.a0, self.a1 + rhs.a1)
    }
}
