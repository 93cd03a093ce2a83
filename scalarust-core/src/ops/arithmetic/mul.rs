use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::{Operand, Value};
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward record for multiplication.
/// Forward values are captured so later leaf updates cannot leak into this graph.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
    a_data: f64,
    b_data: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        vec![self.b_data * grad_output, self.a_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two operands. Literals on either side are promoted to leaves.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = a.into().into_value();
    let b = b.into().into_value();
    let a_data = a.data();
    let b_data = b.data();

    let backward_context = MulBackward {
        a,
        b,
        a_data,
        b_data,
    };
    Value::from_op(a_data * b_data, Op::Mul, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
