// scalarust-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::{Operand, Value};
use std::rc::Rc;

// --- Backward Operation ---

/// Backward record for addition: both operands receive the output gradient unchanged.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two operands. Literals on either side are promoted to leaves.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = a.into().into_value();
    let b = b.into().into_value();
    let result = a.data() + b.data();

    let grad_fn = AddBackward { a, b };
    Value::from_op(result, Op::Add, Rc::new(grad_fn))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
