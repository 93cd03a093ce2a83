use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::types::Op;

/// Internal storage for a single scalar node of the computation graph.
///
/// This struct holds the forward value, the accumulated gradient and the
/// autograd record linking the node to its operands.
/// It is wrapped in `Rc<RefCell<ValueData>>` by `Value` to allow shared
/// ownership (a node can feed several consumers) and interior mutability
/// (only `grad`, and `data` on leaves, ever change).
pub struct ValueData {
    /// Forward-computed result.
    pub(crate) data: f64,
    /// Gradient of the last backward root with respect to this node.
    /// Starts at 0.0 and is accumulated (`+=`) during backward passes.
    pub(crate) grad: f64,
    /// Provenance tag, diagnostic only.
    pub(crate) op: Op,
    /// Optional user label.
    pub(crate) label: Option<String>,
    /// Backward record of the operation that produced this node.
    /// Leaves (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates leaf data with zero gradient.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            label: None,
            grad_fn: None,
        }
    }

    /// Creates the data of an operation node.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            label: None,
            grad_fn: Some(grad_fn),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

// Unlinks uniquely owned ancestors one at a time; the default recursive drop
// would use one stack frame per node of a long chain.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<dyn BackwardOp>> = self.grad_fn.take().into_iter().collect();
        while let Some(grad_fn) = pending.pop() {
            let inputs = grad_fn.inputs();
            drop(grad_fn);
            for input in inputs {
                if Rc::strong_count(&input.data) == 1 {
                    if let Some(next) = input.write_data().grad_fn.take() {
                        pending.push(next);
                    }
                }
            }
        }
    }
}

// Manual implementation of Debug because of the dyn BackwardOp field
impl Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("label", &self.label)
            .field("grad_fn_defined", &self.grad_fn.is_some())
            .finish()
    }
}
