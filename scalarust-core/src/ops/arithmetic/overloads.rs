//! `std::ops` operators for `Value`, in every owned/borrowed combination and with
//! `f64` literals on either side. All of them forward to the `xxx_op` functions.

use crate::ops::arithmetic::div::rdiv_op;
use crate::ops::arithmetic::sub::rsub_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn radd_op(lhs: f64, rhs: &Value) -> Value {
    add_op(rhs, lhs)
}

fn rmul_op(lhs: f64, rhs: &Value) -> Value {
    mul_op(rhs, lhs)
}

macro_rules! impl_bin_ops {
    ($Trait:ident, $method:ident, $op:ident, $reflected:ident) => {
        impl $Trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op(self, rhs)
            }
        }
        impl $Trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op(self, rhs)
            }
        }
        impl $Trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op(self, rhs)
            }
        }
        impl $Trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op(self, rhs)
            }
        }
        impl $Trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op(self, rhs)
            }
        }
        impl $Trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op(self, rhs)
            }
        }
        impl $Trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $reflected(self, rhs)
            }
        }
        impl $Trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $reflected(self, &rhs)
            }
        }
    };
}

impl_bin_ops!(Add, add, add_op, radd_op);
impl_bin_ops!(Sub, sub, sub_op, rsub_op);
impl_bin_ops!(Mul, mul, mul_op, rmul_op);
impl_bin_ops!(Div, div, div_op, rdiv_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}
