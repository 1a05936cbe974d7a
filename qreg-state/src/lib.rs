//! Quantum register state, instruction application, and measurement
//!
//! This crate owns the 2^n-length amplitude vector ([`QRegister`]) and
//! everything that mutates it: single-qubit and controlled gate
//! instructions, ordered instruction sequences ([`Routine`]), and
//! stochastic measurement with destructive collapse.
//!
//! Registers hold between 2 and 8 qubits; the amplitude vector is indexed
//! by the integer whose bit *q* equals the value of qubit *q*.
//!
//! # Example
//! ```
//! use qreg_core::{Gate, Qubit};
//! use qreg_state::{GateInstruction, QRegister};
//!
//! let mut register = QRegister::new(2).unwrap();
//! let not = Gate::new(Qubit::one(), Qubit::zero());
//! GateInstruction::new(not, 0).apply(&mut register).unwrap();
//! assert_eq!(register.amplitudes()[1].re, 1.0);
//! ```

pub mod error;
pub mod instruction;
pub mod register;
pub mod routine;

pub use error::{Result, StateError};
pub use instruction::{CGateInstruction, GateInstruction, Instruction};
pub use register::{QRegister, MAX_QUBITS, MIN_QUBITS};
pub use routine::Routine;
