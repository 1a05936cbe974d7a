//! Name-to-gate resolution

use crate::composite::CompositeGate;
use crate::gate::GateDef;
use crate::standard::{
    CHadamard, CNot, Hadamard, PauliX, PhaseShift, RotationX, RotationY, RotationZ, TDagger, TGate,
};
use std::collections::HashMap;
use std::sync::Arc;

/// A table resolving gate names to shared gate definitions
///
/// A front end owns one of these and threads it (with the register)
/// through its calls; there is no process-wide table. Once a composite is
/// registered it is indistinguishable from a built-in to callers: both
/// come back as `Arc<dyn GateDef>`.
///
/// # Example
/// ```
/// use qreg_gates::{GateDef, GateTable};
///
/// let table = GateTable::with_standard_gates();
/// assert!(table.contains("H"));
/// assert_eq!(table.get("CNOT").unwrap().arg_count(), 2);
/// ```
#[derive(Debug)]
pub struct GateTable {
    gates: HashMap<String, Arc<dyn GateDef>>,
}

impl GateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            gates: HashMap::new(),
        }
    }

    /// Create a table holding the built-in gate set under its canonical
    /// names: Rx, Ry, Rz, Ph, T, Tdag, H, X, CNOT, CH
    pub fn with_standard_gates() -> Self {
        let mut table = Self::new();
        table.register("Rx", Arc::new(RotationX));
        table.register("Ry", Arc::new(RotationY));
        table.register("Rz", Arc::new(RotationZ));
        table.register("Ph", Arc::new(PhaseShift));
        table.register("T", Arc::new(TGate));
        table.register("Tdag", Arc::new(TDagger));
        table.register("H", Arc::new(Hadamard));
        table.register("X", Arc::new(PauliX));
        table.register("CNOT", Arc::new(CNot));
        table.register("CH", Arc::new(CHadamard));
        table
    }

    /// Register a gate under a name, replacing any previous holder
    pub fn register(&mut self, name: impl Into<String>, gate: Arc<dyn GateDef>) {
        self.gates.insert(name.into(), gate);
    }

    /// Register a finished composite definition
    pub fn register_composite(&mut self, name: impl Into<String>, gate: CompositeGate) {
        self.gates.insert(name.into(), Arc::new(gate));
    }

    /// Resolve a name to a shared gate handle
    pub fn get(&self, name: &str) -> Option<Arc<dyn GateDef>> {
        self.gates.get(name).cloned()
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains_key(name)
    }

    /// All registered names
    pub fn names(&self) -> Vec<&str> {
        self.gates.keys().map(|name| name.as_str()).collect()
    }

    /// Number of registered gates
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl Default for GateTable {
    fn default() -> Self {
        Self::new()
    }
}
