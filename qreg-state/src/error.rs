//! Error types for register and instruction operations

use thiserror::Error;

/// Errors raised while constructing or mutating a quantum register
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Register size outside the supported range
    #[error(
        "invalid register size {size}: must be between {min} and {max} qubits",
        min = crate::MIN_QUBITS,
        max = crate::MAX_QUBITS
    )]
    InvalidSize { size: usize },

    /// An instruction references a qubit index beyond the register
    #[error("register too small: {required} qubits required, register has {actual}")]
    RegisterTooSmall { required: usize, actual: usize },

    /// A controlled instruction uses the same qubit as control and target
    #[error("control qubit {qubit} must be different from target qubit")]
    InvalidControl { qubit: usize },

    /// An appended instruction exceeds the routine's register-size bound
    #[error("instruction requires {required} qubits, routine is bounded at {bound}")]
    RoutineTooLarge { required: usize, bound: usize },
}

/// Result type for register operations
pub type Result<T> = std::result::Result<T, StateError>;
