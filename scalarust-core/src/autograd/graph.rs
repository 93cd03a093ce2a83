use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node: the address of its shared `RefCell<ValueData>`.
///
/// Cloning a `Value` handle does not change its `NodeId`, which makes it suitable
/// as a key for the visited-set during traversal. The pointer is never
/// dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first post-order: a node is appended only after all of its operands,
/// so every node appears after everything it depends on and `root` comes last.
/// Nodes reached through several paths appear exactly once.
///
/// The traversal keeps its own stack instead of recursing, so the depth of the
/// graph is bounded by heap memory rather than by the thread's call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_pushed)) = stack.pop() {
        if operands_pushed {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reverse so operands are visited in argument order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("topological_sort: {} nodes reachable from root", sorted_list.len());
    sorted_list
}

/// Computes the gradient of `root` with respect to every node it depends on.
///
/// Seeds `root.grad` with 1.0, then walks the topological order in reverse. When
/// a node is processed, all of its consumers (which come later in the order)
/// have already contributed to its gradient, so its backward record sees the
/// fully accumulated value.
///
/// Gradients are accumulated, never overwritten: calling `backward` again
/// without resetting (see [`zero_grad_graph`]) adds to the previous results.
pub fn backward(root: &Value) {
    let sorted_nodes = topological_sort(root);
    log::debug!(
        "backward: {} nodes, root data={}",
        sorted_nodes.len(),
        root.data()
    );

    root.set_grad(1.0);

    for node in sorted_nodes.iter().rev() {
        // Rc clone: no borrow of `node` may be held while operands are updated.
        let grad_fn = match node.grad_fn() {
            Some(op) => op,
            None => continue,
        };
        let grad_output = node.grad();
        let contributions = grad_fn.backward(grad_output);
        let inputs = grad_fn.inputs();
        debug_assert_eq!(
            contributions.len(),
            inputs.len(),
            "BackwardOp returned {} gradients for {} inputs ({:?})",
            contributions.len(),
            inputs.len(),
            grad_fn
        );
        log::trace!(
            "backward: node op={} grad={} -> {:?}",
            node.op(),
            grad_output,
            contributions
        );
        for (input, contribution) in inputs.iter().zip(contributions) {
            input.accumulate_grad(contribution);
        }
    }
}

/// Resets the gradient of every node reachable from `root` (root included) to 0.0.
///
/// Use this before re-running [`backward`] on the same graph; resetting only the
/// leaves would leave stale gradients on intermediate nodes.
pub fn zero_grad_graph(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
