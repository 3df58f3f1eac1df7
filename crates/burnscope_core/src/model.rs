//! Model capability trait for saliency extraction.
//!
//! The extractor does not care what a classifier looks like inside; it needs
//! a logits forward pass plus a structural self-description precise enough
//! to locate the convolution adjacent to the input image.

use burn::module::AutodiffModule;
use burn::prelude::*;
use burn::tensor::backend::AutodiffBackend;

use crate::layer::LayerSpec;

/// Trait for image classification models that support saliency extraction.
///
/// `forward` must be inference behaviour: burn modules carry no mutable
/// training/evaluation mode bit, so implementations are responsible for not
/// routing through training-only paths (e.g. skip dropout) when describing
/// themselves here.
pub trait ImageClassifier<B: AutodiffBackend>: AutodiffModule<B> + Clone + Send {
    /// Forward pass returning logits.
    ///
    /// # Arguments
    ///
    /// * `images` - Input tensor of shape (batch, channels, height, width)
    ///
    /// # Returns
    ///
    /// Logits tensor of shape (batch, n_classes)
    fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2>;

    /// Number of output classes.
    fn num_classes(&self) -> usize;

    /// Structural description of the model's layers, in declaration order.
    ///
    /// Every layer the forward pass routes through should appear here, with
    /// input-channel counts filled in for convolutions; this is what the
    /// extractor scans to find the layer consuming the input image.
    fn layers(&self) -> Vec<LayerSpec>;

    /// Forward pass returning probabilities.
    fn forward_probs(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let logits = self.forward(images);
        burn::tensor::activation::softmax(logits, 1)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_trait_definitions() {
        // Trait is defined; implementations are exercised in the models crate.
    }
}
