//! Gate definitions for the qreg quantum register simulator
//!
//! This crate provides the polymorphic gate layer on top of `qreg-state`:
//!
//! - [`GateDef`]: the uniform `apply(register, params, args)` contract over
//!   primitive and composite gates
//! - [`standard`]: the built-in primitive gate set (rotations, phase gates,
//!   Hadamard, NOT, and their controlled variants)
//! - [`CompositeGate`]: parameterized macro-gates built from sequences of
//!   other gates, with call-time value binding through indexed slots
//! - [`GateTable`]: name-to-gate resolution for an interpreter or front end
//!
//! # Example
//!
//! ```
//! use qreg_gates::{GateDef, GateTable};
//! use qreg_state::QRegister;
//!
//! let table = GateTable::with_standard_gates();
//! let mut register = QRegister::new(2).unwrap();
//!
//! let h = table.get("H").unwrap();
//! h.apply(&mut register, &[], &[0]).unwrap();
//!
//! let cnot = table.get("CNOT").unwrap();
//! cnot.apply(&mut register, &[], &[0, 1]).unwrap();
//! ```

pub mod composite;
pub mod error;
pub mod gate;
pub mod standard;
pub mod table;

// Re-export commonly used items
pub use composite::{CompositeGate, ParamSpec};
pub use error::{GateError, Result};
pub use gate::GateDef;
pub use standard::{
    CHadamard, CNot, Hadamard, PauliX, PhaseShift, RotationX, RotationY, RotationZ, TDagger, TGate,
};
pub use table::GateTable;
