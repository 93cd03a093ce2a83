use crate::autograd::grad_check::check_grad;
use crate::ops::arithmetic::neg_op;
use crate::types::Op;
use crate::value::Value;

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Value::new(2.5);
    let b = neg_op(&a);
    assert_eq!(b.data(), -2.5);
    assert_eq!(b.op(), Op::Mul);
    let ops = b.operands();
    assert!(ops[0].ptr_eq(&a));
    assert_eq!(ops[1].data(), -1.0);
}

#[test]
fn test_neg_backward() {
    let a = Value::new(4.0);
    let b = -&a;
    b.backward();
    assert_eq!(a.grad(), -1.0);

    let c = Value::new(-1.0);
    let d = -c.clone();
    d.backward();
    assert_eq!(d.data(), 1.0);
    assert_eq!(c.grad(), -1.0);
}

#[test]
fn test_neg_grad_check() {
    for x in [-7.0, 0.0, 1e3] {
        check_grad(|v| Ok(neg_op(&v[0])), &[x], 1e-6, 1e-5)
            .unwrap_or_else(|e| panic!("neg grad check failed at {}: {}", x, e));
    }
}
