//! The polymorphic gate interface

use crate::error::Result;
use qreg_state::QRegister;
use std::fmt;

/// Uniform contract over primitive and composite gates
///
/// A gate definition is invoked with a register, a list of numeric
/// parameters (rotation angles, phases) and a list of qubit indices. The
/// caller, typically a front end that resolved the gate by name from a
/// [`GateTable`](crate::GateTable), is responsible for having validated
/// `params.len() == param_count()` and `args.len() == arg_count()`; the
/// gate layer asserts these only in debug builds.
///
/// Gate values are shared as `Arc<dyn GateDef>`. Composite instruction
/// records hold the same shared handles, so a built-in registered in a
/// table and a gate created for one definition are owned the same way and
/// neither can be destroyed out from under the other.
///
/// The simulator is single-threaded; gate definitions are not required to
/// be `Send` or `Sync`.
pub trait GateDef: fmt::Debug {
    /// Number of numeric parameters the gate expects
    fn param_count(&self) -> usize;

    /// Number of qubit arguments the gate expects
    fn arg_count(&self) -> usize;

    /// Apply the gate to the register
    fn apply(&self, register: &mut QRegister, params: &[f64], args: &[usize]) -> Result<()>;
}
