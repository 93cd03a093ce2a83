use crate::error::ScalarustError;
use crate::nn::init::{seeded_rng, Init};
use crate::nn::{Activation, Layer, Module, Neuron};
use crate::value::Value;

#[test]
fn test_layer_new() -> Result<(), ScalarustError> {
    let layer = Layer::new(2, 3, Activation::Tanh, &Init::default(), &mut seeded_rng(3))?;
    assert_eq!(layer.nin(), 2);
    assert_eq!(layer.nout(), 3);
    assert_eq!(layer.num_parameters(), 9);
    assert_eq!(layer.to_string(), "Layer of [tanh.2, tanh.2, tanh.2]");
    Ok(())
}

#[test]
fn test_layer_rejects_zero_width() {
    let err = Layer::new(2, 0, Activation::Relu, &Init::default(), &mut seeded_rng(0)).unwrap_err();
    assert!(matches!(err, ScalarustError::InvalidHyperparameter { .. }));
    assert!(Layer::from_neurons(Vec::new()).is_err());
}

#[test]
fn test_layer_forward() -> Result<(), ScalarustError> {
    let layer = Layer::from_neurons(vec![
        Neuron::from_weights(vec![1.0, 1.0], 0.0, Activation::Linear),
        Neuron::from_weights(vec![1.0, -1.0], 1.0, Activation::Linear),
    ])?;
    let out = layer.forward(&[Value::new(2.0), Value::new(5.0)])?;
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].data(), 7.0);
    assert_eq!(out[1].data(), -2.0);

    let err = layer.forward(&[Value::new(2.0)]).unwrap_err();
    assert_eq!(err, ScalarustError::DimensionMismatch { expected: 2, actual: 1 });
    Ok(())
}

#[test]
fn test_layer_from_neurons_width_mismatch() {
    let err = Layer::from_neurons(vec![
        Neuron::from_weights(vec![1.0, 1.0], 0.0, Activation::Relu),
        Neuron::from_weights(vec![1.0], 0.0, Activation::Relu),
    ])
    .unwrap_err();
    assert_eq!(err, ScalarustError::DimensionMismatch { expected: 2, actual: 1 });
}

#[test]
fn test_layer_named_parameters() -> Result<(), ScalarustError> {
    let layer = Layer::new(1, 2, Activation::Relu, &Init::Constant(0.5), &mut seeded_rng(0))?;
    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["neuron0.w0", "neuron0.b", "neuron1.w0", "neuron1.b"]);
    Ok(())
}
