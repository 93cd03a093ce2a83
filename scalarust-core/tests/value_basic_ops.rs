use approx::assert_relative_eq;
use scalarust_core::autograd::grad_check::check_grad;
use scalarust_core::ops::{pow_op, sqrt_op};
use scalarust_core::{Op, Value};

mod common;
use common::init_logger;

#[test]
fn test_expression_forward_and_backward() {
    init_logger();
    let a = Value::with_label(-4.0, "a");
    let b = Value::with_label(2.0, "b");
    let mut c = &a + &b;
    let mut d = &a * &b + b.pow(3.0);
    c = &c + (&c + 1.0);
    c = &c + (1.0 + &c + (-&a));
    d = &d + (&d * 2.0 + (&b + &a).relu());
    d = &d + (3.0 * &d + (&b - &a).relu());
    let e = &c - &d;
    let f = e.pow(2.0);
    let mut g = &f / 2.0;
    g = &g + 10.0 / &f;
    g.backward();

    assert_relative_eq!(g.data(), 24.704081632653061, epsilon = 1e-9);
    assert_relative_eq!(a.grad(), 138.83381924198252, epsilon = 1e-9);
    assert_relative_eq!(b.grad(), 645.5772594752186, epsilon = 1e-9);
}

#[test]
fn test_sanity_expression() {
    let x = Value::new(-4.0);
    let z = 2.0 * &x + 2.0 + &x;
    let q = z.relu() + &z * &x;
    let h = (&z * &z).relu();
    let y = &h + &q + &q * &x;
    y.backward();

    assert_eq!(y.data(), -20.0);
    assert_eq!(x.grad(), 46.0);
}

#[test]
fn test_zero_grad_graph_then_rerun() {
    let x = Value::new(1.5);
    let y = (&x * &x + x.sigmoid()).tanh();
    y.backward();
    let first = x.grad();

    y.zero_grad_graph();
    assert_eq!(x.grad(), 0.0);
    assert_eq!(y.grad(), 0.0);
    y.backward();
    assert_eq!(x.grad(), first);
}

#[test]
fn test_mixed_expression_passes_grad_check() {
    let grads = check_grad(
        |v| {
            let (x, y, z) = (&v[0], &v[1], &v[2]);
            let r = sqrt_op(&(x * x + y * y + 1.0))?;
            Ok(pow_op(&r, 1.5)? * z.sigmoid() - (x / (y.exp() + 1.0)).tanh() + (z - x).relu())
        },
        &[0.7, -1.2, 2.5],
        1e-6,
        1e-5,
    );
    assert!(grads.is_ok(), "{:?}", grads);
}

#[test]
fn test_op_tags() {
    let a = Value::new(2.0);
    assert_eq!((&a + 1.0).op(), Op::Add);
    assert_eq!((&a * 1.0).op(), Op::Mul);
    assert_eq!((&a - 1.0).op(), Op::Add);
    assert_eq!((&a / 1.0).op(), Op::Mul);
    assert_eq!(a.pow(3.0).op().to_string(), "**3");
    assert_eq!(a.exp().op(), Op::Exp);
    assert_eq!(a.sqrt().op(), Op::Sqrt);
}
