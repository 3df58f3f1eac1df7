//! A small single-block CNN classifier.
//!
//! Architecture:
//! - Conv2d(in_channels, n_filters, kernel, same padding) -> ReLU
//! - Flatten
//! - Linear(n_filters * H * W, n_classes)
//!
//! Same padding keeps the spatial dimensions, so the flatten width is
//! independent of the kernel size.

use burn::nn::{
    conv::{Conv2d, Conv2dConfig},
    Linear, LinearConfig, PaddingConfig2d, Relu,
};
use burn::prelude::*;
use burn::tensor::backend::AutodiffBackend;
use serde::{Deserialize, Serialize};

use burnscope_core::{ImageClassifier, LayerKind, LayerSpec};

/// Configuration for the [`SimpleCnn`] model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleCnnConfig {
    /// Number of input channels (3 for RGB).
    pub in_channels: usize,
    /// Input height and width (square images).
    pub image_size: usize,
    /// Number of output classes.
    pub n_classes: usize,
    /// Number of convolution filters.
    pub n_filters: usize,
    /// Convolution kernel size.
    pub kernel_size: usize,
}

impl Default for SimpleCnnConfig {
    fn default() -> Self {
        Self {
            in_channels: 3,
            image_size: 32,
            n_classes: 10,
            n_filters: 16,
            kernel_size: 3,
        }
    }
}

impl SimpleCnnConfig {
    /// Create a new config with specified dimensions.
    pub fn new(in_channels: usize, image_size: usize, n_classes: usize) -> Self {
        Self {
            in_channels,
            image_size,
            n_classes,
            ..Default::default()
        }
    }

    /// Set the number of convolution filters.
    #[must_use]
    pub fn with_filters(mut self, n_filters: usize) -> Self {
        self.n_filters = n_filters;
        self
    }

    /// Set the convolution kernel size.
    #[must_use]
    pub fn with_kernel_size(mut self, kernel_size: usize) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    /// Initialize the model.
    pub fn init<B: Backend>(&self, device: &B::Device) -> SimpleCnn<B> {
        SimpleCnn::new(self.clone(), device)
    }
}

/// A single-block CNN classifier.
///
/// # Example
///
/// ```rust,ignore
/// use burnscope_models::SimpleCnnConfig;
///
/// let config = SimpleCnnConfig::new(3, 32, 10);
/// let model = config.init::<NdArray>(&device);
///
/// let x = Tensor::random([1, 3, 32, 32], Distribution::Normal(0.0, 1.0), &device);
/// let logits = model.forward(x);
/// // logits shape: [1, 10]
/// ```
#[derive(Module, Debug)]
pub struct SimpleCnn<B: Backend> {
    conv: Conv2d<B>,
    fc: Linear<B>,
    #[module(skip)]
    in_channels: usize,
    #[module(skip)]
    n_classes: usize,
}

impl<B: Backend> SimpleCnn<B> {
    /// Create a new model from its configuration.
    pub fn new(config: SimpleCnnConfig, device: &B::Device) -> Self {
        let conv = Conv2dConfig::new(
            [config.in_channels, config.n_filters],
            [config.kernel_size, config.kernel_size],
        )
        .with_padding(PaddingConfig2d::Same)
        .init(device);

        let flat = config.n_filters * config.image_size * config.image_size;
        let fc = LinearConfig::new(flat, config.n_classes).init(device);

        Self {
            conv,
            fc,
            in_channels: config.in_channels,
            n_classes: config.n_classes,
        }
    }

    /// Forward pass.
    ///
    /// # Arguments
    ///
    /// * `images` - Input tensor of shape (batch, in_channels, H, W)
    ///
    /// # Returns
    ///
    /// Logits tensor of shape (batch, n_classes)
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let out = self.conv.forward(images);
        let out = Relu::new().forward(out);

        let [batch, channels, height, width] = out.dims();
        let out = out.reshape([batch, channels * height * width]);
        self.fc.forward(out)
    }
}

impl<B: AutodiffBackend> ImageClassifier<B> for SimpleCnn<B> {
    fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        SimpleCnn::forward(self, images)
    }

    fn num_classes(&self) -> usize {
        self.n_classes
    }

    fn layers(&self) -> Vec<LayerSpec> {
        vec![
            LayerSpec::conv2d("conv", self.in_channels),
            LayerSpec::new("relu", LayerKind::Activation),
            LayerSpec::linear("fc"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnscope_core::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_config_default() {
        let config = SimpleCnnConfig::default();
        assert_eq!(config.in_channels, 3);
        assert_eq!(config.n_filters, 16);
        assert_eq!(config.kernel_size, 3);
    }

    #[test]
    fn test_config_builder() {
        let config = SimpleCnnConfig::new(3, 16, 5)
            .with_filters(8)
            .with_kernel_size(5);
        assert_eq!(config.n_filters, 8);
        assert_eq!(config.kernel_size, 5);
    }

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model: SimpleCnn<TestBackend> = SimpleCnnConfig::new(3, 16, 5).init(&device);

        let x = Tensor::zeros([2, 3, 16, 16], &device);
        let logits = model.forward(x);
        assert_eq!(logits.dims(), [2, 5]);
    }

    #[test]
    fn test_grayscale_forward_shape() {
        let device = Default::default();
        let model: SimpleCnn<TestBackend> = SimpleCnnConfig::new(1, 8, 2).init(&device);

        let x = Tensor::zeros([1, 1, 8, 8], &device);
        let logits = model.forward(x);
        assert_eq!(logits.dims(), [1, 2]);
    }

    #[test]
    fn test_config_serde() {
        let config = SimpleCnnConfig::new(3, 32, 10);
        let json = serde_json::to_string(&config).unwrap();
        let decoded: SimpleCnnConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.image_size, 32);
        assert_eq!(decoded.n_classes, 10);
    }
}
