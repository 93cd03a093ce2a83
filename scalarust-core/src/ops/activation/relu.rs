use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // Gated on the output: an input of exactly 0 gets no gradient.
        let local_gradient = if self.output_data > 0.0 { grad_output } else { 0.0 };
        vec![local_gradient]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, x)`.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let output_data = if x < 0.0 { 0.0 } else { x };
    let grad_fn = ReluBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Op::Relu, Rc::new(grad_fn))
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
