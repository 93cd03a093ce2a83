use crate::error::ScalarustError;
use crate::optim::{Optimizer, Sgd};
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarustError> {
    let w = Value::new(1.0);
    let b = Value::new(-2.0);
    let loss = &w * 3.0 + &b;
    loss.backward();

    let mut optimizer = Sgd::new(vec![w.clone(), b.clone()], 0.1)?;
    optimizer.step()?;

    assert_relative_eq!(w.data(), 1.0 - 0.1 * 3.0);
    assert_relative_eq!(b.data(), -2.0 - 0.1 * 1.0);
    // step leaves gradients untouched
    assert_relative_eq!(w.grad(), 3.0);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarustError> {
    let w = Value::new(2.0);
    let loss = &w * &w;
    loss.backward();
    assert_relative_eq!(w.grad(), 4.0);

    let mut optimizer = Sgd::new(vec![w.clone()], 0.5)?;
    optimizer.zero_grad();
    assert_eq!(w.grad(), 0.0);

    optimizer.step()?;
    assert_eq!(w.data(), 2.0);
    Ok(())
}

#[test]
fn test_sgd_rejects_non_finite_lr() {
    let w = Value::new(0.0);
    let err = Sgd::new(vec![w.clone()], f64::NAN).unwrap_err();
    assert!(matches!(err, ScalarustError::InvalidHyperparameter { ref name, .. } if name == "lr"));
    assert!(Sgd::new(vec![w], f64::INFINITY).is_err());
}

#[test]
fn test_sgd_set_lr() -> Result<(), ScalarustError> {
    let mut optimizer = Sgd::new(Vec::new(), 0.1)?;
    optimizer.set_lr(0.01)?;
    assert_eq!(optimizer.lr(), 0.01);
    assert!(optimizer.set_lr(f64::NEG_INFINITY).is_err());
    assert_eq!(optimizer.lr(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_non_leaf_param_updates_nothing() -> Result<(), ScalarustError> {
    let w = Value::new(1.0);
    let derived = &w + 1.0;
    let loss = &derived * 2.0;
    loss.backward();

    let mut optimizer = Sgd::new(vec![w.clone(), derived.clone()], 0.1)?;
    assert_eq!(optimizer.step(), Err(ScalarustError::NonLeafMutation));
    assert_eq!(w.data(), 1.0);
    assert_eq!(derived.data(), 2.0);
    Ok(())
}

#[test]
fn test_sgd_descends_quadratic() -> Result<(), ScalarustError> {
    // minimise (x - 3)^2
    let x = Value::new(0.0);
    let mut optimizer = Sgd::new(vec![x.clone()], 0.1)?;
    for _ in 0..200 {
        optimizer.zero_grad();
        let loss = (&x - 3.0).pow(2.0);
        loss.backward();
        optimizer.step()?;
    }
    assert_relative_eq!(x.data(), 3.0, epsilon = 1e-6);
    Ok(())
}
