//! Composite gates: parameterized macro-gates with call-time binding
//!
//! A composite gate records a sequence of sub-instructions during a
//! definition phase and replays them on every call. Sub-instructions do
//! not capture call values; they hold *slot indices* into the composite's
//! own parameter and argument arrays, and resolve them against the slots'
//! current contents at replay time. Overwriting the slots at the start of
//! each call is what lets every record, including nested composites,
//! observe the live values of the outermost call.

use crate::error::{GateError, Result};
use crate::gate::GateDef;
use qreg_state::QRegister;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::sync::Arc;

/// How a sub-instruction obtains one of its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamSpec {
    /// An independent value captured at definition time
    Literal(f64),
    /// The composite's own parameter slot, read at call time
    Slot(usize),
}

/// One recorded sub-instruction: a shared gate handle plus its bindings
#[derive(Debug, Clone)]
struct CompositeInstruction {
    gate: Arc<dyn GateDef>,
    params: Vec<ParamSpec>,
    args: Vec<usize>,
}

/// The slot arrays a call writes and a replay reads
#[derive(Debug, Clone)]
struct Frame {
    params: Vec<f64>,
    args: Vec<usize>,
}

/// A gate defined as a bound sequence of other gates
///
/// Built once with repeated [`add_instruction`](CompositeGate::add_instruction)
/// calls, then used repeatedly through the [`GateDef`] interface. Sub-gates
/// are shared `Arc` handles, so registering a composite in a
/// [`GateTable`](crate::GateTable) and reusing built-ins inside further
/// definitions are both safe.
///
/// There is exactly one slot frame per instance: a composite gate is *not
/// reentrant*. Invoking it recursively during its own replay overwrites the
/// in-flight call's slots and corrupts its remaining sub-instructions.
///
/// # Example
/// ```
/// use qreg_gates::{CompositeGate, GateDef, Hadamard, CNot};
/// use qreg_state::QRegister;
/// use std::sync::Arc;
///
/// // An entangling macro: H on the first argument, then CNOT
/// let mut bell = CompositeGate::new(0, 2).unwrap();
/// bell.add_instruction(Arc::new(Hadamard), &[], &[0]).unwrap();
/// bell.add_instruction(Arc::new(CNot), &[], &[0, 1]).unwrap();
///
/// let mut register = QRegister::new(2).unwrap();
/// bell.apply(&mut register, &[], &[0, 1]).unwrap();
/// ```
#[derive(Debug)]
pub struct CompositeGate {
    param_count: usize,
    arg_count: usize,
    frame: RefCell<Frame>,
    instructions: Vec<CompositeInstruction>,
}

impl CompositeGate {
    /// Create an empty composite with `param_count` parameter slots and
    /// `arg_count` argument slots, all initialized to zero
    ///
    /// # Errors
    /// Returns [`GateError::NoArguments`] if `arg_count` is zero: a gate
    /// that touches no qubit cannot do anything.
    pub fn new(param_count: usize, arg_count: usize) -> Result<Self> {
        if arg_count == 0 {
            return Err(GateError::NoArguments);
        }

        Ok(Self {
            param_count,
            arg_count,
            frame: RefCell::new(Frame {
                params: vec![0.0; param_count],
                args: vec![0; arg_count],
            }),
            instructions: Vec::new(),
        })
    }

    /// Append a sub-instruction to the end of the definition
    ///
    /// Each entry of `params` either captures a literal or binds one of
    /// this composite's parameter slots; each entry of `args` binds one of
    /// its argument slots (arguments always denote qubit indices resolved
    /// by the eventual caller). `params.len()` and `args.len()` must match
    /// the sub-gate's arity; this is the definer's responsibility and is
    /// asserted only in debug builds.
    ///
    /// # Errors
    /// Returns [`GateError::ParamSlotOutOfRange`] or
    /// [`GateError::ArgSlotOutOfRange`] for a binding this composite does
    /// not own; the record is not added.
    pub fn add_instruction(
        &mut self,
        gate: Arc<dyn GateDef>,
        params: &[ParamSpec],
        args: &[usize],
    ) -> Result<()> {
        debug_assert_eq!(params.len(), gate.param_count());
        debug_assert_eq!(args.len(), gate.arg_count());

        for spec in params {
            if let ParamSpec::Slot(index) = *spec {
                if index >= self.param_count {
                    return Err(GateError::ParamSlotOutOfRange {
                        index,
                        count: self.param_count,
                    });
                }
            }
        }
        for &slot in args {
            if slot >= self.arg_count {
                return Err(GateError::ArgSlotOutOfRange {
                    index: slot,
                    count: self.arg_count,
                });
            }
        }

        self.instructions.push(CompositeInstruction {
            gate,
            params: params.to_vec(),
            args: args.to_vec(),
        });
        Ok(())
    }

    /// Number of recorded sub-instructions
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the definition is still empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl GateDef for CompositeGate {
    fn param_count(&self) -> usize {
        self.param_count
    }

    fn arg_count(&self) -> usize {
        self.arg_count
    }

    /// Overwrite the slot frame with the call's values, then replay every
    /// sub-instruction in insertion order, resolving its bindings against
    /// the slots' current contents
    fn apply(&self, register: &mut QRegister, params: &[f64], args: &[usize]) -> Result<()> {
        debug_assert_eq!(params.len(), self.param_count);
        debug_assert_eq!(args.len(), self.arg_count);

        {
            let mut frame = self.frame.borrow_mut();
            frame.params.copy_from_slice(params);
            frame.args.copy_from_slice(args);
        }

        for instruction in &self.instructions {
            // The borrow is released before the sub-gate runs, so nested
            // composites resolve their own frames without conflict.
            let (params, args) = {
                let frame = self.frame.borrow();
                let params: SmallVec<[f64; 4]> = instruction
                    .params
                    .iter()
                    .map(|spec| match *spec {
                        ParamSpec::Literal(value) => value,
                        ParamSpec::Slot(slot) => frame.params[slot],
                    })
                    .collect();
                let args: SmallVec<[usize; 2]> =
                    instruction.args.iter().map(|&slot| frame.args[slot]).collect();
                (params, args)
            };

            instruction.gate.apply(register, &params, &args)?;
        }
        Ok(())
    }
}
