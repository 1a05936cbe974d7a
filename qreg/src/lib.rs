//! State-vector simulator for small quantum registers
//!
//! `qreg` simulates a register of 2 to 8 qubits by maintaining the explicit
//! complex amplitude vector and applying unitary operations to it. The
//! workspace splits into three layers, re-exported here:
//!
//! - `qreg-core`: value types [`Qubit`], [`Gate`], [`CGate`]
//! - `qreg-state`: the register and its mutations, [`QRegister`],
//!   [`GateInstruction`], [`CGateInstruction`], [`Routine`], measurement
//! - `qreg-gates`: the polymorphic gate layer, [`GateDef`], the built-in
//!   gate set, [`CompositeGate`], [`GateTable`]
//!
//! # Example
//!
//! Prepare and measure a Bell pair:
//!
//! ```
//! use qreg::{GateDef, GateTable, QRegister};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let table = GateTable::with_standard_gates();
//! let mut register = QRegister::new(2).unwrap();
//!
//! table.get("H").unwrap().apply(&mut register, &[], &[0]).unwrap();
//! table.get("CNOT").unwrap().apply(&mut register, &[], &[0, 1]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let outcome = register.measure_all(&mut rng);
//! assert!(outcome == 0b00 || outcome == 0b11);
//! ```

pub use qreg_core::{CGate, Complex64, Gate, Qubit};
pub use qreg_gates::{
    CHadamard, CNot, CompositeGate, GateDef, GateError, GateTable, Hadamard, ParamSpec, PauliX,
    PhaseShift, RotationX, RotationY, RotationZ, TDagger, TGate,
};
pub use qreg_state::{
    CGateInstruction, GateInstruction, Instruction, QRegister, Routine, StateError, MAX_QUBITS,
    MIN_QUBITS,
};
