use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

/// Backward record for `exp`. The derivative is the output itself.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.output_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

/// Computes `e^input`. Overflow yields `inf`, as `f64::exp` does.
pub fn exp_op(input: &Value) -> Value {
    let output_data = input.data().exp();
    let grad_fn = ExpBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Op::Exp, Rc::new(grad_fn))
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
