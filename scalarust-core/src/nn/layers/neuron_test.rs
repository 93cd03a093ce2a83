use crate::error::ScalarustError;
use crate::nn::init::{seeded_rng, Init};
use crate::nn::{Activation, Module, Neuron};
use crate::types::Op;
use crate::value::Value;
use approx::assert_relative_eq;

fn inputs(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_neuron_new_uses_init_and_zero_bias() -> Result<(), ScalarustError> {
    let neuron = Neuron::new(3, Activation::Tanh, &Init::Constant(0.3), &mut seeded_rng(0))?;
    assert_eq!(neuron.nin(), 3);
    assert!(neuron.weights().iter().all(|w| w.data() == 0.3));
    assert_eq!(neuron.bias().data(), 0.0);
    assert_eq!(neuron.activation(), Activation::Tanh);
    assert!(neuron.parameters().iter().all(Value::is_leaf));
    Ok(())
}

#[test]
fn test_neuron_linear_forward() -> Result<(), ScalarustError> {
    let neuron = Neuron::from_weights(vec![2.0, -1.0], 0.5, Activation::Linear);
    let out = neuron.activate(&inputs(&[1.0, 3.0]))?;
    assert_relative_eq!(out.data(), 0.5 + 2.0 - 3.0);
    Ok(())
}

#[test]
fn test_neuron_activations() -> Result<(), ScalarustError> {
    let x = inputs(&[1.0, 3.0]);
    let relu = Neuron::from_weights(vec![2.0, -1.0], 0.5, Activation::Relu).activate(&x)?;
    assert_eq!(relu.data(), 0.0);
    assert_eq!(relu.op(), Op::Relu);

    let tanh = Neuron::from_weights(vec![2.0, -1.0], 0.5, Activation::Tanh).activate(&x)?;
    assert_relative_eq!(tanh.data(), (-0.5_f64).tanh());

    let sigmoid = Neuron::from_weights(vec![2.0, -1.0], 0.5, Activation::Sigmoid).activate(&x)?;
    assert_relative_eq!(sigmoid.data(), 1.0 / (1.0 + 0.5_f64.exp()));
    Ok(())
}

#[test]
fn test_neuron_sum_starts_from_bias() -> Result<(), ScalarustError> {
    let neuron = Neuron::from_weights(vec![2.0, 3.0], 1.0, Activation::Linear);
    let x = inputs(&[4.0, 5.0]);
    let out = neuron.activate(&x)?;

    // ((b + x0*w0) + x1*w1)
    let outer = out.operands();
    assert_eq!(out.op(), Op::Add);
    assert_eq!(outer[1].op(), Op::Mul);
    assert!(outer[1].operands()[0].ptr_eq(&x[1]));
    assert!(outer[1].operands()[1].ptr_eq(&neuron.weights()[1]));
    let inner = outer[0].operands();
    assert!(inner[0].ptr_eq(neuron.bias()));
    assert!(inner[1].operands()[0].ptr_eq(&x[0]));
    Ok(())
}

#[test]
fn test_neuron_backward() -> Result<(), ScalarustError> {
    let neuron = Neuron::from_weights(vec![0.5, -0.25], 0.1, Activation::Linear);
    let x = inputs(&[2.0, -4.0]);
    neuron.activate(&x)?.backward();

    assert_eq!(neuron.weights()[0].grad(), 2.0);
    assert_eq!(neuron.weights()[1].grad(), -4.0);
    assert_eq!(neuron.bias().grad(), 1.0);
    assert_eq!(x[0].grad(), 0.5);
    assert_eq!(x[1].grad(), -0.25);
    Ok(())
}

#[test]
fn test_neuron_dimension_mismatch() {
    let neuron = Neuron::from_weights(vec![1.0, 1.0], 0.0, Activation::Relu);
    let err = neuron.activate(&inputs(&[1.0])).unwrap_err();
    assert_eq!(err, ScalarustError::DimensionMismatch { expected: 2, actual: 1 });
    assert!(neuron.forward(&inputs(&[1.0, 2.0, 3.0])).is_err());
}

#[test]
fn test_neuron_parameters_and_names() {
    let neuron = Neuron::from_weights(vec![1.0, 2.0], 3.0, Activation::Relu);
    let params = neuron.parameters();
    assert_eq!(params.len(), 3);
    assert!(params[2].ptr_eq(neuron.bias()));

    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["w0", "w1", "b"]);
}

#[test]
fn test_neuron_display() {
    assert_eq!(Neuron::from_weights(vec![0.0; 2], 0.0, Activation::Relu).to_string(), "relu.2");
    assert_eq!(Neuron::from_weights(vec![0.0; 5], 0.0, Activation::Linear).to_string(), "lin.5");
}
