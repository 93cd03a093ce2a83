use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

#[derive(Debug)]
struct SigmoidBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for SigmoidBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // dsig/dx = sig * (1 - sig)
        let s = self.output_data;
        vec![s * (1.0 - s) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

/// Applies the logistic sigmoid `1 / (1 + e^-x)`.
pub fn sigmoid_op(input: &Value) -> Value {
    let output_data = 1.0 / ((-input.data()).exp() + 1.0);
    let grad_fn = SigmoidBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Op::Sigmoid, Rc::new(grad_fn))
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
