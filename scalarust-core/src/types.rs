use std::fmt;

/// Provenance tag recording which operation produced a `Value`.
///
/// The tag is diagnostic only: gradients are computed by the node's
/// `BackwardOp` record, never by matching on this enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Leaf created directly from a literal (inputs, parameters, constants).
    Leaf,
    Add,
    Mul,
    /// Power with a fixed real exponent.
    Pow(f64),
    Exp,
    Sqrt,
    Tanh,
    Relu,
    Sigmoid,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "**{}", exponent),
            Op::Exp => write!(f, "exp"),
            Op::Sqrt => write!(f, "sqrt"),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "ReLU"),
            Op::Sigmoid => write!(f, "sigmoid"),
        }
    }
}
