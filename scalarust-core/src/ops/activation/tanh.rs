use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d tanh(x)/dx = 1 - tanh(x)^2
        let t = self.output_data;
        vec![(1.0 - t * t) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

/// Applies the hyperbolic tangent.
pub fn tanh_op(input: &Value) -> Value {
    let output_data = input.data().tanh();
    let grad_fn = TanhBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Op::Tanh, Rc::new(grad_fn))
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
