// src/value/traits.rs

use crate::value::Value;
use std::fmt;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: both handles refer to the same graph node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data={}, grad={}, op={:?}, has_grad_fn={})",
            guard.data,
            guard.grad,
            guard.op,
            guard.grad_fn.is_some()
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => write!(f, "Value({}: data={})", label, guard.data),
            None => write!(f, "Value(data={})", guard.data),
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
