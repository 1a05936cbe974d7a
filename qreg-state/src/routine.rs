//! Ordered instruction sequences with a register-size bound

use crate::error::{Result, StateError};
use crate::instruction::Instruction;
use crate::register::QRegister;

/// An ordered sequence of instructions for a register of a given size
///
/// The bound is fixed at construction; appending validates each instruction
/// against it, so a built routine is guaranteed to fit any register at
/// least that large.
///
/// # Example
/// ```
/// use qreg_core::{Gate, Qubit};
/// use qreg_state::{GateInstruction, QRegister, Routine};
///
/// let mut routine = Routine::new(2);
/// let not = Gate::new(Qubit::one(), Qubit::zero());
/// routine.append(GateInstruction::new(not, 0).into()).unwrap();
///
/// let mut register = QRegister::new(2).unwrap();
/// routine.apply(&mut register).unwrap();
/// assert_eq!(register.amplitudes()[1].re, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Routine {
    size: usize,
    instructions: Vec<Instruction>,
}

impl Routine {
    /// Create an empty routine bounded to registers of `size` qubits
    pub fn new(size: usize) -> Self {
        Self {
            size,
            instructions: Vec::new(),
        }
    }

    /// The register-size bound
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of appended instructions
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the routine holds no instructions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Append an instruction to the end of the routine
    ///
    /// # Errors
    /// Returns [`StateError::RoutineTooLarge`] if the instruction requires
    /// more qubits than the bound allows; the instruction is not added.
    pub fn append(&mut self, instruction: Instruction) -> Result<()> {
        if instruction.required_size() > self.size {
            return Err(StateError::RoutineTooLarge {
                required: instruction.required_size(),
                bound: self.size,
            });
        }
        self.instructions.push(instruction);
        Ok(())
    }

    /// Replay the instructions, strictly in order, against the register
    ///
    /// The first failing instruction stops the replay and its error
    /// propagates. There is no rollback: instructions before the failure
    /// stay applied, the failing one and all after it are not.
    ///
    /// # Errors
    /// Returns [`StateError::RegisterTooSmall`], before any mutation, if
    /// the register is smaller than the routine's bound.
    pub fn apply(&self, register: &mut QRegister) -> Result<()> {
        if register.size() < self.size {
            return Err(StateError::RegisterTooSmall {
                required: self.size,
                actual: register.size(),
            });
        }

        for instruction in &self.instructions {
            instruction.apply(register)?;
        }
        Ok(())
    }
}
