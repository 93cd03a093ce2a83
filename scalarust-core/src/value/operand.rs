use crate::error::ScalarustError;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Either side of a binary operation: an existing node, or a literal that is
/// promoted to a fresh leaf when the operation is built.
///
/// Every binary `xxx_op` takes `impl Into<Operand>`; promotion happens in one
/// place, [`Operand::into_value`], and never implicitly elsewhere.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Literal(f64),
}

impl Operand {
    /// Promotes any numeric type convertible to `f64`.
    ///
    /// # Errors
    /// `ScalarustError::TypeMismatch` when `value` has no `f64` representation.
    pub fn from_numeric<N: ToPrimitive + Debug>(value: N) -> Result<Self, ScalarustError> {
        value
            .to_f64()
            .map(Operand::Literal)
            .ok_or_else(|| ScalarustError::TypeMismatch {
                operation: "operand promotion".to_string(),
                found: format!("{:?}", value),
            })
    }

    /// Returns the node, creating a leaf for a literal.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Node(value) => value,
            Operand::Literal(literal) => Value::new(literal),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(literal: f64) -> Self {
        Operand::Literal(literal)
    }
}

impl From<f32> for Operand {
    fn from(literal: f32) -> Self {
        Operand::Literal(f64::from(literal))
    }
}

impl From<i32> for Operand {
    fn from(literal: i32) -> Self {
        Operand::Literal(f64::from(literal))
    }
}
