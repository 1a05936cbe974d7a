//! Built-in primitive gate definitions
//!
//! Each primitive translates directly into one [`GateInstruction`] or
//! [`CGateInstruction`] applied to the passed register. Parameterized
//! gates take their angles in radians.

use crate::error::Result;
use crate::gate::GateDef;
use num_complex::Complex64;
use qreg_core::{CGate, Gate, Qubit};
use qreg_state::{CGateInstruction, GateInstruction, QRegister};

fn apply_gate(gate: Gate, target: usize, register: &mut QRegister) -> Result<()> {
    GateInstruction::new(gate, target).apply(register)?;
    Ok(())
}

fn apply_cgate(gate: CGate, control: usize, target: usize, register: &mut QRegister) -> Result<()> {
    CGateInstruction::new(gate, control, target).apply(register)?;
    Ok(())
}

fn hadamard_images() -> Gate {
    Gate::new(
        Qubit::new(Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)),
        Qubit::new(Complex64::new(1.0, 0.0), Complex64::new(-1.0, 0.0)),
    )
}

fn not_images() -> Gate {
    Gate::new(Qubit::one(), Qubit::zero())
}

// ============================================================================
// Parameterized rotations
// ============================================================================

/// Rotation about the X axis by an angle θ
#[derive(Debug, Clone, Copy)]
pub struct RotationX;

impl GateDef for RotationX {
    fn param_count(&self) -> usize {
        1
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(params.len(), 1);
        debug_assert_eq!(args.len(), 1);

        let half = params[0] / 2.0;
        let gate = Gate::new(
            Qubit::new(
                Complex64::new(half.cos(), 0.0),
                Complex64::new(0.0, -half.sin()),
            ),
            Qubit::new(
                Complex64::new(0.0, -half.sin()),
                Complex64::new(half.cos(), 0.0),
            ),
        );
        apply_gate(gate, args[0], register)
    }
}

/// Rotation about the Y axis by an angle θ
#[derive(Debug, Clone, Copy)]
pub struct RotationY;

impl GateDef for RotationY {
    fn param_count(&self) -> usize {
        1
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(params.len(), 1);
        debug_assert_eq!(args.len(), 1);

        let half = params[0] / 2.0;
        let gate = Gate::new(
            Qubit::new(
                Complex64::new(half.cos(), 0.0),
                Complex64::new(half.sin(), 0.0),
            ),
            Qubit::new(
                Complex64::new(-half.sin(), 0.0),
                Complex64::new(half.cos(), 0.0),
            ),
        );
        apply_gate(gate, args[0], register)
    }
}

/// Rotation about the Z axis by an angle θ
#[derive(Debug, Clone, Copy)]
pub struct RotationZ;

impl GateDef for RotationZ {
    fn param_count(&self) -> usize {
        1
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(params.len(), 1);
        debug_assert_eq!(args.len(), 1);

        let half = params[0] / 2.0;
        let gate = Gate::new(
            Qubit::new(
                Complex64::new(half.cos(), -half.sin()),
                Complex64::new(0.0, 0.0),
            ),
            Qubit::new(
                Complex64::new(0.0, 0.0),
                Complex64::new(half.cos(), half.sin()),
            ),
        );
        apply_gate(gate, args[0], register)
    }
}

/// Phase shift: multiplies the |1⟩ amplitude by e^(iθ)
#[derive(Debug, Clone, Copy)]
pub struct PhaseShift;

impl GateDef for PhaseShift {
    fn param_count(&self) -> usize {
        1
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(params.len(), 1);
        debug_assert_eq!(args.len(), 1);

        let theta = params[0];
        let gate = Gate::new(
            Qubit::zero(),
            Qubit::new(
                Complex64::new(0.0, 0.0),
                Complex64::new(theta.cos(), theta.sin()),
            ),
        );
        apply_gate(gate, args[0], register)
    }
}

// ============================================================================
// Fixed single-qubit gates
// ============================================================================

/// T gate: a 45° phase on |1⟩
#[derive(Debug, Clone, Copy)]
pub struct TGate;

impl GateDef for TGate {
    fn param_count(&self) -> usize {
        0
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, _params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(args.len(), 1);

        const SQRT2_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
        let gate = Gate::new(
            Qubit::zero(),
            Qubit::new(Complex64::new(0.0, 0.0), Complex64::new(SQRT2_2, SQRT2_2)),
        );
        apply_gate(gate, args[0], register)
    }
}

/// T† gate: a -45° phase on |1⟩
#[derive(Debug, Clone, Copy)]
pub struct TDagger;

impl GateDef for TDagger {
    fn param_count(&self) -> usize {
        0
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, _params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(args.len(), 1);

        const SQRT2_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
        let gate = Gate::new(
            Qubit::zero(),
            Qubit::new(Complex64::new(0.0, 0.0), Complex64::new(SQRT2_2, -SQRT2_2)),
        );
        apply_gate(gate, args[0], register)
    }
}

/// Hadamard gate: creates an even superposition from a basis state
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl GateDef for Hadamard {
    fn param_count(&self) -> usize {
        0
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, _params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(args.len(), 1);
        apply_gate(hadamard_images(), args[0], register)
    }
}

/// Pauli-X (NOT) gate: swaps the |0⟩ and |1⟩ amplitudes
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl GateDef for PauliX {
    fn param_count(&self) -> usize {
        0
    }

    fn arg_count(&self) -> usize {
        1
    }

    fn apply(&self, register: &mut QRegister, _params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(args.len(), 1);
        apply_gate(not_images(), args[0], register)
    }
}

// ============================================================================
// Controlled gates
// ============================================================================

/// Controlled NOT: args are (control, target)
#[derive(Debug, Clone, Copy)]
pub struct CNot;

impl GateDef for CNot {
    fn param_count(&self) -> usize {
        0
    }

    fn arg_count(&self) -> usize {
        2
    }

    fn apply(&self, register: &mut QRegister, _params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(args.len(), 2);
        apply_cgate(CGate::new(not_images()), args[0], args[1], register)
    }
}

/// Controlled Hadamard: args are (control, target)
#[derive(Debug, Clone, Copy)]
pub struct CHadamard;

impl GateDef for CHadamard {
    fn param_count(&self) -> usize {
        0
    }

    fn arg_count(&self) -> usize {
        2
    }

    fn apply(&self, register: &mut QRegister, _params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(args.len(), 2);
        apply_cgate(CGate::new(hadamard_images()), args[0], args[1], register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_arities() {
        assert_eq!(RotationX.param_count(), 1);
        assert_eq!(RotationX.arg_count(), 1);
        assert_eq!(TGate.param_count(), 0);
        assert_eq!(CNot.arg_count(), 2);
        assert_eq!(CHadamard.arg_count(), 2);
    }

    #[test]
    fn test_pauli_x_flips() {
        let mut register = QRegister::new(2).unwrap();
        PauliX.apply(&mut register, &[], &[0]).unwrap();
        assert_relative_eq!(register.amplitudes()[1].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut register = QRegister::new(2).unwrap();
        Hadamard.apply(&mut register, &[], &[0]).unwrap();

        assert_relative_eq!(register.amplitudes()[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(register.amplitudes()[1].re, FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_x_pi_is_not_up_to_phase() {
        let mut register = QRegister::new(2).unwrap();
        RotationX.apply(&mut register, &[PI], &[0]).unwrap();

        // Rx(π)|0⟩ = -i|1⟩
        assert_relative_eq!(register.amplitudes()[1].im, -1.0, epsilon = 1e-12);
        assert_relative_eq!(register.amplitudes()[0].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_y_pi_half() {
        let mut register = QRegister::new(2).unwrap();
        RotationY.apply(&mut register, &[PI / 2.0], &[0]).unwrap();

        assert_relative_eq!(register.amplitudes()[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(register.amplitudes()[1].re, FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_z_phases_basis_state() {
        let mut register = QRegister::new(2).unwrap();
        RotationZ.apply(&mut register, &[PI], &[0]).unwrap();

        // Rz(π)|0⟩ = e^(-iπ/2)|0⟩ = -i|0⟩
        assert_relative_eq!(register.amplitudes()[0].im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_shift_leaves_zero_alone() {
        let mut register = QRegister::new(2).unwrap();
        PhaseShift.apply(&mut register, &[PI / 3.0], &[0]).unwrap();
        assert_relative_eq!(register.amplitudes()[0].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_shift_rotates_one() {
        let mut register = QRegister::new(2).unwrap();
        PauliX.apply(&mut register, &[], &[0]).unwrap();
        PhaseShift.apply(&mut register, &[PI / 2.0], &[0]).unwrap();

        // e^(iπ/2) = i
        assert_relative_eq!(register.amplitudes()[1].im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_t_and_t_dagger_cancel() {
        let mut register = QRegister::new(2).unwrap();
        Hadamard.apply(&mut register, &[], &[0]).unwrap();
        TGate.apply(&mut register, &[], &[0]).unwrap();
        TDagger.apply(&mut register, &[], &[0]).unwrap();
        Hadamard.apply(&mut register, &[], &[0]).unwrap();

        assert_relative_eq!(register.amplitudes()[0].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_produces_bell_state() {
        let mut register = QRegister::new(2).unwrap();
        Hadamard.apply(&mut register, &[], &[0]).unwrap();
        CNot.apply(&mut register, &[], &[0, 1]).unwrap();

        assert_relative_eq!(register.amplitudes()[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(register.amplitudes()[3].re, FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_controlled_hadamard_acts_only_when_control_set() {
        let mut register = QRegister::new(2).unwrap();
        CHadamard.apply(&mut register, &[], &[0, 1]).unwrap();
        assert_relative_eq!(register.amplitudes()[0].re, 1.0, epsilon = 1e-12);

        PauliX.apply(&mut register, &[], &[0]).unwrap();
        CHadamard.apply(&mut register, &[], &[0, 1]).unwrap();
        assert_relative_eq!(register.amplitudes()[1].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(register.amplitudes()[3].re, FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_rotations_preserve_norm() {
        let mut register = QRegister::new(3).unwrap();
        for (angle, qubit) in [(0.3, 0), (1.7, 1), (2.9, 2)] {
            RotationX.apply(&mut register, &[angle], &[qubit]).unwrap();
            RotationY.apply(&mut register, &[angle], &[qubit]).unwrap();
            RotationZ.apply(&mut register, &[angle], &[qubit]).unwrap();
            assert!(register.is_normalized(1e-10));
        }
    }
}
