//! Gate instructions and the amplitude-update algorithm

use crate::error::{Result, StateError};
use crate::register::QRegister;
use num_complex::Complex64;
use qreg_core::{CGate, Gate};

/// A single-qubit gate bound to a target qubit
///
/// Applying the instruction rewrites the register's full amplitude vector:
/// for every basis index, the old amplitude is routed into the two indices
/// that differ only in the target bit, weighted by the gate's basis images.
///
/// # Example
/// ```
/// use qreg_core::{Gate, Qubit};
/// use qreg_state::{GateInstruction, QRegister};
///
/// let mut register = QRegister::new(2).unwrap();
/// let not = Gate::new(Qubit::one(), Qubit::zero());
/// GateInstruction::new(not, 0).apply(&mut register).unwrap();
/// assert_eq!(register.amplitudes()[1].re, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct GateInstruction {
    gate: Gate,
    target: usize,
}

impl GateInstruction {
    /// Bind a gate to a target qubit index
    pub fn new(gate: Gate, target: usize) -> Self {
        Self { gate, target }
    }

    /// Target qubit index
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Minimum register size this instruction requires
    #[inline]
    pub fn required_size(&self) -> usize {
        self.target + 1
    }

    /// Apply the gate to the register
    ///
    /// # Errors
    /// Returns [`StateError::RegisterTooSmall`] if the target index lies
    /// beyond the register. The check precedes all mutation.
    pub fn apply(&self, register: &mut QRegister) -> Result<()> {
        if self.required_size() > register.size() {
            return Err(StateError::RegisterTooSmall {
                required: self.required_size(),
                actual: register.size(),
            });
        }

        let mask = 1usize << self.target;
        let old = register.amplitudes();
        // Each old amplitude feeds two destination cells, so the update
        // must go through a scratch vector: an in-place scan would read
        // cells it has already overwritten.
        let mut next = vec![Complex64::new(0.0, 0.0); old.len()];

        for (index, &amplitude) in old.iter().enumerate() {
            if index & mask != 0 {
                next[index] += amplitude * self.gate.image1().a1();
                next[index & !mask] += amplitude * self.gate.image1().a0();
            } else {
                next[index] += amplitude * self.gate.image0().a0();
                next[index | mask] += amplitude * self.gate.image0().a1();
            }
        }

        register.replace_amplitudes(next);
        Ok(())
    }
}

/// A controlled gate bound to control and target qubit indices
///
/// Basis indices whose control bit is 0 pass through unchanged; indices
/// whose control bit is 1 receive the wrapped transform on the target bit.
#[derive(Clone, Debug)]
pub struct CGateInstruction {
    gate: CGate,
    control: usize,
    target: usize,
}

impl CGateInstruction {
    /// Bind a controlled gate to control and target qubit indices
    pub fn new(gate: CGate, control: usize, target: usize) -> Self {
        Self {
            gate,
            control,
            target,
        }
    }

    /// Control qubit index
    #[inline]
    pub fn control(&self) -> usize {
        self.control
    }

    /// Target qubit index
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Minimum register size this instruction requires
    #[inline]
    pub fn required_size(&self) -> usize {
        self.control.max(self.target) + 1
    }

    /// Apply the controlled gate to the register
    ///
    /// # Errors
    /// Returns [`StateError::InvalidControl`] if control and target
    /// coincide, then [`StateError::RegisterTooSmall`] if either index lies
    /// beyond the register. Both checks precede all mutation.
    pub fn apply(&self, register: &mut QRegister) -> Result<()> {
        if self.control == self.target {
            return Err(StateError::InvalidControl {
                qubit: self.control,
            });
        }
        if self.required_size() > register.size() {
            return Err(StateError::RegisterTooSmall {
                required: self.required_size(),
                actual: register.size(),
            });
        }

        let control_mask = 1usize << self.control;
        let target_mask = 1usize << self.target;
        let transform = self.gate.transform();

        let old = register.amplitudes();
        let mut next = vec![Complex64::new(0.0, 0.0); old.len()];

        for (index, &amplitude) in old.iter().enumerate() {
            if index & control_mask == 0 {
                next[index] += amplitude;
            } else if index & target_mask != 0 {
                next[index] += amplitude * transform.image1().a1();
                next[index & !target_mask] += amplitude * transform.image1().a0();
            } else {
                next[index] += amplitude * transform.image0().a0();
                next[index | target_mask] += amplitude * transform.image0().a1();
            }
        }

        register.replace_amplitudes(next);
        Ok(())
    }
}

/// Either kind of register instruction
///
/// Routines hold these; each variant knows its minimum register size and
/// how to mutate a register.
#[derive(Clone, Debug)]
pub enum Instruction {
    /// A single-qubit gate application
    Gate(GateInstruction),
    /// A controlled gate application
    CGate(CGateInstruction),
}

impl Instruction {
    /// Minimum register size this instruction requires
    pub fn required_size(&self) -> usize {
        match self {
            Instruction::Gate(instruction) => instruction.required_size(),
            Instruction::CGate(instruction) => instruction.required_size(),
        }
    }

    /// Apply the instruction to the register
    pub fn apply(&self, register: &mut QRegister) -> Result<()> {
        match self {
            Instruction::Gate(instruction) => instruction.apply(register),
            Instruction::CGate(instruction) => instruction.apply(register),
        }
    }
}

impl From<GateInstruction> for Instruction {
    fn from(instruction: GateInstruction) -> Self {
        Instruction::Gate(instruction)
    }
}

impl From<CGateInstruction> for Instruction {
    fn from(instruction: CGateInstruction) -> Self {
        Instruction::CGate(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qreg_core::Qubit;

    fn not_gate() -> Gate {
        Gate::new(Qubit::one(), Qubit::zero())
    }

    fn hadamard_gate() -> Gate {
        Gate::new(
            Qubit::new(Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)),
            Qubit::new(Complex64::new(1.0, 0.0), Complex64::new(-1.0, 0.0)),
        )
    }

    #[test]
    fn test_not_flips_basis_state() {
        let mut register = QRegister::new(2).unwrap();
        GateInstruction::new(not_gate(), 0)
            .apply(&mut register)
            .unwrap();

        assert_eq!(register.amplitudes()[1], Complex64::new(1.0, 0.0));
        for index in [0, 2, 3] {
            assert_eq!(register.amplitudes()[index], Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_not_on_upper_qubit() {
        let mut register = QRegister::new(2).unwrap();
        GateInstruction::new(not_gate(), 1)
            .apply(&mut register)
            .unwrap();

        assert_eq!(register.amplitudes()[2], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_hadamard_creates_even_superposition() {
        let mut register = QRegister::new(2).unwrap();
        GateInstruction::new(hadamard_gate(), 0)
            .apply(&mut register)
            .unwrap();

        let sqrt_half = std::f64::consts::FRAC_1_SQRT_2;
        let amplitudes = register.amplitudes();
        assert_relative_eq!(amplitudes[0].re, sqrt_half, epsilon = 1e-12);
        assert_relative_eq!(amplitudes[1].re, sqrt_half, epsilon = 1e-12);
        assert_eq!(amplitudes[2], Complex64::new(0.0, 0.0));
        assert_eq!(amplitudes[3], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_hadamard_twice_is_identity() {
        let mut register = QRegister::new(2).unwrap();
        let instruction = GateInstruction::new(hadamard_gate(), 0);
        instruction.apply(&mut register).unwrap();
        instruction.apply(&mut register).unwrap();

        assert_relative_eq!(register.amplitudes()[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(register.amplitudes()[1].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gate_instruction_preserves_norm() {
        for size in crate::MIN_QUBITS..=crate::MAX_QUBITS {
            let mut register = QRegister::new(size).unwrap();
            for target in 0..size {
                GateInstruction::new(hadamard_gate(), target)
                    .apply(&mut register)
                    .unwrap();
                assert!(register.is_normalized(1e-10));
            }
        }
    }

    #[test]
    fn test_gate_instruction_register_too_small() {
        let mut register = QRegister::new(2).unwrap();
        let err = GateInstruction::new(not_gate(), 2)
            .apply(&mut register)
            .unwrap_err();

        assert_eq!(
            err,
            StateError::RegisterTooSmall {
                required: 3,
                actual: 2
            }
        );
        // Failure precedes mutation
        assert_eq!(register.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_cnot_entangles() {
        let mut register = QRegister::new(2).unwrap();
        GateInstruction::new(hadamard_gate(), 0)
            .apply(&mut register)
            .unwrap();
        CGateInstruction::new(CGate::new(not_gate()), 0, 1)
            .apply(&mut register)
            .unwrap();

        // Bell state: (|00⟩ + |11⟩)/√2
        let sqrt_half = std::f64::consts::FRAC_1_SQRT_2;
        let amplitudes = register.amplitudes();
        assert_relative_eq!(amplitudes[0].re, sqrt_half, epsilon = 1e-12);
        assert_relative_eq!(amplitudes[3].re, sqrt_half, epsilon = 1e-12);
        assert_relative_eq!(amplitudes[1].norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(amplitudes[2].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_identity_when_control_clear() {
        let mut register = QRegister::new(2).unwrap();
        CGateInstruction::new(CGate::new(not_gate()), 0, 1)
            .apply(&mut register)
            .unwrap();

        assert_eq!(register.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_cnot_flips_when_control_set() {
        let mut register = QRegister::new(2).unwrap();
        GateInstruction::new(not_gate(), 0)
            .apply(&mut register)
            .unwrap();
        CGateInstruction::new(CGate::new(not_gate()), 0, 1)
            .apply(&mut register)
            .unwrap();

        // |01⟩ -> |11⟩
        assert_eq!(register.amplitudes()[3], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_cgate_control_equals_target() {
        let mut register = QRegister::new(2).unwrap();
        let err = CGateInstruction::new(CGate::new(not_gate()), 1, 1)
            .apply(&mut register)
            .unwrap_err();

        assert_eq!(err, StateError::InvalidControl { qubit: 1 });
        assert_eq!(register.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_cgate_register_too_small() {
        let mut register = QRegister::new(2).unwrap();
        let err = CGateInstruction::new(CGate::new(not_gate()), 0, 2)
            .apply(&mut register)
            .unwrap_err();

        assert_eq!(
            err,
            StateError::RegisterTooSmall {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_required_size() {
        assert_eq!(GateInstruction::new(not_gate(), 4).required_size(), 5);
        assert_eq!(
            CGateInstruction::new(CGate::new(not_gate()), 6, 2).required_size(),
            7
        );
        assert_eq!(
            Instruction::from(GateInstruction::new(not_gate(), 0)).required_size(),
            1
        );
    }
}
