//! Compute a saliency map for a randomly initialized classifier.
//!
//! ```sh
//! cargo run --example saliency
//! ```

use burn::prelude::*;
use burn::tensor::Distribution;
use burn_autodiff::Autodiff;
use burn_ndarray::NdArray;

use burnscope::prelude::*;

type B = Autodiff<NdArray>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let device: <B as Backend>::Device = Default::default();
    Seed::new(42).apply::<B>();

    let model: SimpleCnn<B> = SimpleCnnConfig::new(3, 32, 10).init(&device);
    let extractor = SaliencyExtractor::new(model, device.clone())?;
    println!("intercepting layer: {}", extractor.input_layer().name);

    let image = Tensor::<B, 4>::random([1, 3, 32, 32], Distribution::Normal(0.0, 1.0), &device);

    let map = extractor.saliency(image, 7)?;
    println!("saliency map shape: {:?}", map.shape());

    let heat = map.abs().normalize().channel_max();
    let values: Vec<f32> = heat.into_data().to_vec().unwrap();
    let peak = values.iter().cloned().fold(f32::MIN, f32::max);
    let mean = values.iter().sum::<f32>() / values.len() as f32;
    println!("heat map peak {peak:.4}, mean {mean:.4}");

    Ok(())
}
