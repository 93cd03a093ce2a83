//! # Training a small MLP on four samples
//!
//! Fits a 3-4-4-1 tanh network to a toy binary target with a hand-written
//! mean-squared-error loss and plain SGD.
//!
//! Demonstrates:
//! 1.  Seeded construction of an `Mlp` through `MlpConfig`.
//! 2.  Building the loss from `Value` arithmetic.
//! 3.  The `zero_grad` / `backward` / `step` cycle on reused parameters.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example train_mlp`

use scalarust_core::nn::init::seeded_rng;
use scalarust_core::nn::{Activation, Mlp, MlpConfig, Module};
use scalarust_core::optim::{Optimizer, Sgd};
use scalarust_core::{ScalarustError, Value};

fn mse(predictions: &[Value], targets: &[f64]) -> Value {
    let total = predictions
        .iter()
        .zip(targets)
        .fold(Value::new(0.0), |acc, (p, &y)| acc + (p - y).pow(2.0));
    total / predictions.len() as f64
}

fn main() -> Result<(), ScalarustError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let config = MlpConfig::default().with_activation(Activation::Tanh);
    let model = Mlp::new(3, &[4, 4, 1], &config, &mut seeded_rng(1337))?;
    println!("{}", model);
    println!("number of parameters: {}", model.num_parameters());

    let mut optimizer = Sgd::new(model.parameters(), 0.05)?;

    for epoch in 0..100 {
        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let input: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            predictions.push(model.forward(&input)?.remove(0));
        }
        let loss = mse(&predictions, &ys);

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 10 == 0 || epoch == 99 {
            println!("epoch {:3} loss {:.6}", epoch, loss.data());
        }
    }

    for (x, y) in xs.iter().zip(&ys) {
        let input: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        let prediction = model.forward(&input)?.remove(0);
        println!("target {:+.1} prediction {:+.4}", y, prediction.data());
    }
    Ok(())
}
