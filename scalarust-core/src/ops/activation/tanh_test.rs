use crate::autograd::grad_check::check_grad;
use crate::ops::activation::tanh_op;
use crate::types::Op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward() {
    let a = Value::new(0.5);
    let b = tanh_op(&a);
    assert_relative_eq!(b.data(), 0.5_f64.tanh());
    assert_eq!(b.op(), Op::Tanh);
    assert_eq!(b.op().to_string(), "tanh");
    assert_eq!(Value::new(0.0).tanh().data(), 0.0);
}

#[test]
fn test_tanh_backward() {
    let a = Value::new(0.8814);
    let b = a.tanh();
    b.backward();
    let t = 0.8814_f64.tanh();
    assert_relative_eq!(a.grad(), 1.0 - t * t);
}

#[test]
fn test_tanh_saturates() {
    let a = Value::new(40.0);
    let b = a.tanh();
    b.backward();
    assert_eq!(b.data(), 1.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_tanh_grad_check() {
    for x in [-10.0, -0.7, 0.0, 1.3, 10.0] {
        check_grad(|v| Ok(tanh_op(&v[0])), &[x], 1e-6, 1e-5)
            .unwrap_or_else(|e| panic!("tanh grad check failed at {}: {}", x, e));
    }
}
