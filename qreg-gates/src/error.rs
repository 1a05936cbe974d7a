//! Error types for gate definition and application

use qreg_state::StateError;
use thiserror::Error;

/// Errors raised while defining or applying gates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// A composite gate was declared with zero argument slots
    #[error("composite gate must declare at least one argument slot")]
    NoArguments,

    /// A sub-instruction binds a parameter slot the composite does not own
    #[error("parameter slot {index} out of range: composite declares {count} parameter slots")]
    ParamSlotOutOfRange { index: usize, count: usize },

    /// A sub-instruction binds an argument slot the composite does not own
    #[error("argument slot {index} out of range: composite declares {count} argument slots")]
    ArgSlotOutOfRange { index: usize, count: usize },

    /// A register operation failed while applying the gate
    #[error(transparent)]
    State(#[from] StateError),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_errors_pass_through() {
        let err = GateError::from(StateError::InvalidControl { qubit: 3 });
        assert_eq!(
            format!("{}", err),
            format!("{}", StateError::InvalidControl { qubit: 3 })
        );
    }

    #[test]
    fn test_slot_errors_carry_context() {
        let err = GateError::ParamSlotOutOfRange { index: 4, count: 2 };
        let msg = format!("{}", err);
        assert!(msg.contains("4"));
        assert!(msg.contains("2"));
    }
}
