use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every operation that creates a non-leaf `Value` has an associated `BackwardOp`
/// record. It is stored in the output node's `grad_fn` field and holds everything
/// the local derivative needs: handles to the operands and the forward values
/// captured when the node was built. Nothing is recomputed from the operands'
/// current state, so a leaf updated through `Value::set_data` after the forward
/// pass does not change the gradient of an already-built graph.
pub trait BackwardOp: Debug {
    /// Computes the contribution of this node's gradient to each of its operands.
    ///
    /// For an operation \( out = f(in_1, ..., in_n) \) this returns
    /// \( \frac{\partial f}{\partial in_i} \cdot grad\_output \) for every `i`.
    ///
    /// # Arguments
    /// * `grad_output`: The fully accumulated gradient of the output node.
    ///
    /// # Returns
    /// One contribution per operand. The order **must** match `inputs()`;
    /// the backward engine adds each entry into the corresponding operand.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns the operands that participated in the forward operation, in
    /// argument order. An operand used twice (`a + a`) appears twice.
    fn inputs(&self) -> Vec<Value>;
}
