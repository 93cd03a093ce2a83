use crate::autograd::{graph, BackwardOp};
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient. Used to seed the backward root.
    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds a downstream contribution to the gradient.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.write_data().grad += contribution;
    }

    /// Resets the gradient of this node to 0.0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Returns a clone of the `Rc` pointing to the backward record (`grad_fn`).
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Performs the backward pass starting from this node.
    ///
    /// After the call, every node reachable from `self` holds the derivative of
    /// `self` with respect to it in `grad()`. Gradients **accumulate** across
    /// calls; reset them with [`Value::zero_grad_graph`] (or `Module::zero_grad`
    /// for parameters) before a fresh pass.
    pub fn backward(&self) {
        if self.is_leaf() {
            log::warn!("backward() called on a leaf value. Only its own gradient is seeded.");
        }
        graph::backward(self);
    }

    /// Resets the gradient of this node and of every node it depends on.
    pub fn zero_grad_graph(&self) {
        graph::zero_grad_graph(self);
    }
}
