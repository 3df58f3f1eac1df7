//! A minimal CNN with an analytically tractable gradient.
//!
//! Architecture:
//! - Conv2d(3, 1, kernel, valid padding)
//! - Flatten
//! - Linear((H - k + 1)^2, n_classes)
//!
//! With one convolution filter and one linear layer, the gradient of a class
//! score with respect to the input image reduces to a short chain-rule sum
//! over the two weight tensors, which the saliency integration tests compute
//! by hand and compare against the extractor's output.

use burn::nn::{
    conv::{Conv2d, Conv2dConfig},
    Linear, LinearConfig,
};
use burn::prelude::*;
use burn::tensor::backend::AutodiffBackend;
use serde::{Deserialize, Serialize};

use burnscope_core::{ImageClassifier, LayerSpec};

/// Configuration for the [`TinyCnn`] model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinyCnnConfig {
    /// Input height and width (square images).
    pub image_size: usize,
    /// Convolution kernel size.
    pub kernel_size: usize,
    /// Number of output classes.
    pub n_classes: usize,
}

impl Default for TinyCnnConfig {
    fn default() -> Self {
        Self {
            image_size: 8,
            kernel_size: 3,
            n_classes: 2,
        }
    }
}

impl TinyCnnConfig {
    /// Create a new config with specified dimensions.
    pub fn new(image_size: usize, kernel_size: usize, n_classes: usize) -> Self {
        Self {
            image_size,
            kernel_size,
            n_classes,
        }
    }

    /// Spatial size of the convolution output (valid padding, stride 1).
    #[must_use]
    pub fn conv_out_size(&self) -> usize {
        self.image_size - self.kernel_size + 1
    }

    /// Initialize the model.
    pub fn init<B: Backend>(&self, device: &B::Device) -> TinyCnn<B> {
        TinyCnn::new(self.clone(), device)
    }
}

/// Minimal conv → flatten → linear classifier.
#[derive(Module, Debug)]
pub struct TinyCnn<B: Backend> {
    conv: Conv2d<B>,
    fc: Linear<B>,
    #[module(skip)]
    n_classes: usize,
}

impl<B: Backend> TinyCnn<B> {
    /// Create a new model from its configuration.
    pub fn new(config: TinyCnnConfig, device: &B::Device) -> Self {
        let conv = Conv2dConfig::new([3, 1], [config.kernel_size, config.kernel_size])
            .init(device);

        let out = config.conv_out_size();
        let fc = LinearConfig::new(out * out, config.n_classes).init(device);

        Self {
            conv,
            fc,
            n_classes: config.n_classes,
        }
    }

    /// Forward pass.
    ///
    /// # Arguments
    ///
    /// * `images` - Input tensor of shape (batch, 3, H, W)
    ///
    /// # Returns
    ///
    /// Logits tensor of shape (batch, n_classes)
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let out = self.conv.forward(images);

        let [batch, channels, height, width] = out.dims();
        let out = out.reshape([batch, channels * height * width]);
        self.fc.forward(out)
    }

    /// Convolution weight, shape (1, 3, k, k).
    pub fn conv_weight(&self) -> Tensor<B, 4> {
        self.conv.weight.val()
    }

    /// Linear weight, shape ((H - k + 1)^2, n_classes).
    pub fn fc_weight(&self) -> Tensor<B, 2> {
        self.fc.weight.val()
    }
}

impl<B: AutodiffBackend> ImageClassifier<B> for TinyCnn<B> {
    fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        TinyCnn::forward(self, images)
    }

    fn num_classes(&self) -> usize {
        self.n_classes
    }

    fn layers(&self) -> Vec<LayerSpec> {
        vec![LayerSpec::conv2d("conv", 3), LayerSpec::linear("fc")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnscope_core::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_conv_out_size() {
        let config = TinyCnnConfig::default();
        assert_eq!(config.conv_out_size(), 6);

        let config = TinyCnnConfig::new(10, 5, 2);
        assert_eq!(config.conv_out_size(), 6);
    }

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model: TinyCnn<TestBackend> = TinyCnnConfig::default().init(&device);

        let x = Tensor::zeros([1, 3, 8, 8], &device);
        let logits = model.forward(x);
        assert_eq!(logits.dims(), [1, 2]);
    }

    #[test]
    fn test_weight_shapes() {
        let device = Default::default();
        let model: TinyCnn<TestBackend> = TinyCnnConfig::default().init(&device);

        assert_eq!(model.conv_weight().dims(), [1, 3, 3, 3]);
        assert_eq!(model.fc_weight().dims(), [36, 2]);
    }
}
