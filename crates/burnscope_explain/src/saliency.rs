//! Class-saliency gradient extraction.

use burn::module::Module;
use burn::prelude::*;
use burn::tensor::backend::AutodiffBackend;

use burnscope_core::{
    one_hot_target, CoreError, ImageClassifier, LayerPredicate, LayerSelection, LayerSpec,
};

use crate::capture::CaptureContext;
use crate::error::Result;

/// Image-specific class-saliency map.
///
/// Holds the gradient of one class score with respect to one input image,
/// shape `(channels, height, width)`.
#[derive(Debug, Clone)]
pub struct SaliencyMap<B: Backend> {
    values: Tensor<B, 3>,
    target_class: usize,
}

impl<B: Backend> SaliencyMap<B> {
    /// Wrap raw gradient values for a target class.
    pub fn new(values: Tensor<B, 3>, target_class: usize) -> Self {
        Self {
            values,
            target_class,
        }
    }

    /// Shape of the map: `(channels, height, width)`.
    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        self.values.dims()
    }

    /// The class the gradient was computed for.
    #[must_use]
    pub fn target_class(&self) -> usize {
        self.target_class
    }

    /// Borrow the per-channel gradient values.
    #[must_use]
    pub fn values(&self) -> &Tensor<B, 3> {
        &self.values
    }

    /// Consume the map, yielding the per-channel gradient values.
    #[must_use]
    pub fn into_values(self) -> Tensor<B, 3> {
        self.values
    }

    /// Collapse across colour channels, keeping the maximum gradient at each
    /// spatial position. Result shape: `(1, height, width)`.
    #[must_use]
    pub fn channel_max(&self) -> Tensor<B, 3> {
        self.values.clone().max_dim(0)
    }

    /// Map with absolute gradient magnitudes.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            values: self.values.clone().abs(),
            target_class: self.target_class,
        }
    }

    /// Normalize the values to [0, 1].
    #[must_use]
    pub fn normalize(&self) -> Self {
        let min_val: f32 = self.values.clone().min().into_scalar().elem();
        let max_val: f32 = self.values.clone().max().into_scalar().elem();
        let range = max_val - min_val;

        let normalized = if range > 1e-8 {
            (self.values.clone() - min_val) / range
        } else {
            self.values.clone()
        };

        Self {
            values: normalized,
            target_class: self.target_class,
        }
    }
}

/// Computes gradients of a target class score w.r.t. an input image, by a
/// single class-seeded backward pass through a pretrained classifier.
///
/// At construction the model's layer description is scanned for the
/// convolution adjacent to the input image (a 2-D convolution with 3 input
/// channels); zero or ambiguous matches fail construction. Each
/// [`saliency`](SaliencyExtractor::saliency) call is an independent
/// transaction: all gradient state lives in the call, so one extractor can
/// serve calls from several threads.
#[derive(Debug)]
pub struct SaliencyExtractor<B, M>
where
    B: AutodiffBackend,
    M: ImageClassifier<B>,
{
    model: M,
    device: B::Device,
    input_layer: LayerSpec,
}

impl<B, M> SaliencyExtractor<B, M>
where
    B: AutodiffBackend,
    M: ImageClassifier<B>,
{
    /// Wrap a classifier, requiring a unique input-adjacent convolution.
    ///
    /// # Errors
    ///
    /// [`CoreError::NoInputLayer`] when the model declares no 2-D
    /// convolution with 3 input channels, [`CoreError::AmbiguousInputLayer`]
    /// when it declares several.
    pub fn new(model: M, device: B::Device) -> Result<Self> {
        Self::with_selection(model, device, LayerSelection::Unique)
    }

    /// Wrap a classifier with an explicit layer-selection policy.
    ///
    /// [`LayerSelection::FirstMatch`] accepts models with several
    /// qualifying convolutions, intercepting the earliest in declaration
    /// order.
    pub fn with_selection(model: M, device: B::Device, selection: LayerSelection) -> Result<Self> {
        let layers = model.layers();
        let input_layer = selection
            .select(&LayerPredicate::input_conv(), &layers)?
            .clone();

        tracing::debug!(
            layer = %input_layer.name,
            ?selection,
            "input layer selected for gradient interception"
        );

        let model = model.fork(&device);

        Ok(Self {
            model,
            device,
            input_layer,
        })
    }

    /// The layer whose incoming gradient is intercepted.
    #[must_use]
    pub fn input_layer(&self) -> &LayerSpec {
        &self.input_layer
    }

    /// Compute the saliency map of `target_class` for one input image.
    ///
    /// Runs a forward pass, seeds the backward pass with a one-hot vector at
    /// `target_class` (differentiating exactly that class's score), and
    /// returns the gradient that reaches the input boundary, detached from
    /// the autodiff graph and stripped of the batch dimension.
    ///
    /// # Arguments
    ///
    /// * `input` - Image tensor of shape (1, channels, height, width), in
    ///   the normalization the model expects
    /// * `target_class` - Class index in `0..num_classes`
    ///
    /// # Errors
    ///
    /// [`CoreError::ShapeMismatch`] when the channel count does not match
    /// the intercepted layer, [`CoreError::ClassOutOfRange`] for a bad class
    /// index, [`ExplainError::GradientNotCaptured`] when no input-shaped
    /// gradient arrives. Spatial-dimension mismatches deeper in the model
    /// surface as panics from the backend's forward pass.
    ///
    /// [`ExplainError::GradientNotCaptured`]: crate::ExplainError::GradientNotCaptured
    pub fn saliency(
        &self,
        input: Tensor<B, 4>,
        target_class: usize,
    ) -> Result<SaliencyMap<B::InnerBackend>> {
        let dims = input.dims();
        if Some(dims[1]) != self.input_layer.in_channels {
            return Err(CoreError::ShapeMismatch {
                expected: format!(
                    "(batch, {}, height, width)",
                    self.input_layer.in_channels.unwrap_or(0)
                ),
                got: format!("{dims:?}"),
            }
            .into());
        }

        let input = input.to_device(&self.device).require_grad();

        let output = self.model.forward(input.clone());
        let [batch, n_classes] = output.dims();

        let seed = one_hot_target::<B>(batch, n_classes, target_class, &self.device)?;

        // Vector-Jacobian product: differentiating sum(logits * seed) seeds
        // the backward pass with the one-hot vector, so only the target
        // class's score contributes.
        let grads = (output * seed).sum().backward();

        let mut context = CaptureContext::new(&self.input_layer.name, dims);
        if let Some(gradient) = input.grad(&grads) {
            context.observe(gradient);
        }
        let gradient = context.into_gradient()?;

        tracing::trace!(
            class = target_class,
            layer = %self.input_layer.name,
            "input gradient captured"
        );

        let values = gradient.narrow(0, 0, 1).squeeze::<3>(0);
        Ok(SaliencyMap::new(values, target_class))
    }

    /// Compute the raw gradient tensor, optionally collapsed across colour
    /// channels.
    ///
    /// Returns shape `(channels, height, width)`, or `(1, height, width)`
    /// with the per-position channel maximum when `take_max` is set.
    pub fn calculate_gradient(
        &self,
        input: Tensor<B, 4>,
        target_class: usize,
        take_max: bool,
    ) -> Result<Tensor<B::InnerBackend, 3>> {
        let map = self.saliency(input, target_class)?;
        Ok(if take_max {
            map.channel_max()
        } else {
            map.into_values()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnscope_core::backend::NdArray;

    type TestBackend = NdArray;

    fn map_from(values: Vec<f32>, shape: [usize; 3]) -> SaliencyMap<TestBackend> {
        let device = Default::default();
        let values = Tensor::<TestBackend, 1>::from_floats(values.as_slice(), &device)
            .reshape(shape);
        SaliencyMap::new(values, 0)
    }

    #[test]
    fn test_channel_max() {
        // Two channels over a 1x2 grid.
        let map = map_from(vec![1.0, -2.0, 0.5, 3.0], [2, 1, 2]);

        let collapsed = map.channel_max();
        assert_eq!(collapsed.dims(), [1, 1, 2]);

        let values: Vec<f32> = collapsed.into_data().to_vec().unwrap();
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_abs() {
        let map = map_from(vec![-1.0, 2.0], [1, 1, 2]);
        let values: Vec<f32> = map.abs().into_values().into_data().to_vec().unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_normalize_range() {
        let map = map_from(vec![-4.0, 0.0, 2.0, 6.0], [1, 2, 2]);
        let normalized = map.normalize();

        let values: Vec<f32> = normalized.into_values().into_data().to_vec().unwrap();
        assert!((values[0] - 0.0).abs() < 1e-6);
        assert!((values[3] - 1.0).abs() < 1e-6);
        assert!((values[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_constant_map_unchanged() {
        let map = map_from(vec![2.0; 4], [1, 2, 2]);
        let values: Vec<f32> = map.normalize().into_values().into_data().to_vec().unwrap();
        assert_eq!(values, vec![2.0; 4]);
    }

    #[test]
    fn test_target_class_carried() {
        let map = map_from(vec![0.0], [1, 1, 1]);
        assert_eq!(map.target_class(), 0);
        assert_eq!(map.shape(), [1, 1, 1]);
    }
}
