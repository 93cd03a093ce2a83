// src/value/mod.rs
//! The public scalar node handle, `Value`.
//!
//! A `Value` is a cheap, clonable handle (`Rc<RefCell<ValueData>>`) to one node of
//! the computation graph. Cloning shares the node; it never copies it.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::autograd::{BackwardOp, NodeId};
use crate::error::ScalarustError;
use crate::types::Op;
use crate::value_data::ValueData;

pub mod autograd_methods;
pub mod operand;
pub mod traits;

pub use operand::Operand;

/// Handle to a scalar node of the computation graph.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with zero gradient and no operands.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a labelled leaf node. The label only shows up in diagnostics.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.write_data().label = Some(label.into());
        value
    }

    /// Wraps the result of an operation. Called by the `xxx_op` functions only,
    /// once the forward value and the backward record are both known.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, op, grad_fn))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Replaces the value of a leaf node (e.g. a parameter update).
    ///
    /// Operation nodes are immutable once built.
    ///
    /// # Errors
    /// `ScalarustError::NonLeafMutation` if this node was produced by an operation.
    pub fn set_data(&self, data: f64) -> Result<(), ScalarustError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(ScalarustError::NonLeafMutation);
        }
        guard.data = data;
        Ok(())
    }

    /// Returns the provenance tag of this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// `true` for nodes created from a literal rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the direct inputs of the operation that produced this node, in
    /// argument order. Empty for leaves.
    pub fn operands(&self) -> Vec<Value> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }

    /// Identity of the underlying node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
