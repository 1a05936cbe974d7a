//! Single-qubit unitary descriptors

use crate::qubit::Qubit;

/// A single-qubit gate described by its basis images
///
/// `image0` is the state the gate produces when fed |0⟩, `image1` when fed
/// |1⟩. Together the two images fully encode a 2×2 linear map; there is no
/// separate matrix form. Construction only stores the images; no
/// unitarity check is performed, and a non-unitary pair will silently break
/// probability conservation when applied.
///
/// # Example
/// ```
/// use qreg_core::{Complex64, Gate, Qubit};
///
/// // The NOT gate swaps the basis states
/// let not = Gate::new(Qubit::one(), Qubit::zero());
/// assert_eq!(not.image0().a1(), Complex64::new(1.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gate {
    image0: Qubit,
    image1: Qubit,
}

impl Gate {
    /// Create a gate from the images of |0⟩ and |1⟩
    pub fn new(image0: Qubit, image1: Qubit) -> Self {
        Self { image0, image1 }
    }

    /// Image of the basis state |0⟩
    #[inline]
    pub fn image0(&self) -> Qubit {
        self.image0
    }

    /// Image of the basis state |1⟩
    #[inline]
    pub fn image1(&self) -> Qubit {
        self.image1
    }
}

/// A controlled single-qubit gate
///
/// Applies the wrapped transform to a target qubit exactly when a separate
/// control qubit is 1, and the identity otherwise. Which qubits play the
/// control and target roles is decided at application time, not here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CGate {
    transform: Gate,
}

impl CGate {
    /// Wrap a gate as the controlled transform
    pub fn new(transform: Gate) -> Self {
        Self { transform }
    }

    /// The transform applied when the control qubit is 1
    #[inline]
    pub fn transform(&self) -> Gate {
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_gate_stores_images() {
        let gate = Gate::new(Qubit::one(), Qubit::zero());
        assert_eq!(gate.image0(), Qubit::one());
        assert_eq!(gate.image1(), Qubit::zero());
    }

    #[test]
    fn test_gate_accepts_non_unitary_images() {
        // Both images map to |0⟩: not unitary, but accepted by design
        let gate = Gate::new(Qubit::zero(), Qubit::zero());
        assert_eq!(gate.image0(), gate.image1());
    }

    #[test]
    fn test_cgate_wraps_transform() {
        let not = Gate::new(Qubit::one(), Qubit::zero());
        let cnot = CGate::new(not);
        assert_eq!(cnot.transform(), not);
        assert_eq!(cnot.transform().image0().a1(), Complex64::new(1.0, 0.0));
    }
}
