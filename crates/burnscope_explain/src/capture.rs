//! Per-call gradient capture.

use burn::prelude::*;

use crate::error::{ExplainError, Result};

/// Observation slot for the gradient arriving at the intercepted layer
/// during one backward pass.
///
/// A context is created fresh for every saliency call and consumed when the
/// call completes, so nothing is shared between calls. The expected shape is
/// the *input image* shape `(batch, channels, height, width)`; a gradient is
/// accepted only if its dims match, which rejects parameter gradients and
/// anything else the backward pass might surface for the same layer.
#[derive(Debug, Clone)]
pub struct CaptureContext<B: Backend> {
    layer: String,
    expected: [usize; 4],
    captured: Option<Tensor<B, 4>>,
}

impl<B: Backend> CaptureContext<B> {
    /// Create a context expecting an input-shaped gradient at `layer`.
    pub fn new(layer: impl Into<String>, expected: [usize; 4]) -> Self {
        Self {
            layer: layer.into(),
            expected,
            captured: None,
        }
    }

    /// Name of the layer this context observes.
    #[must_use]
    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Offer a gradient to the context.
    ///
    /// Stores it and returns `true` when its dims equal the expected input
    /// shape; otherwise leaves the context untouched and returns `false`.
    /// A later matching gradient overwrites an earlier one, mirroring
    /// last-write-wins hook semantics.
    pub fn observe(&mut self, gradient: Tensor<B, 4>) -> bool {
        if gradient.dims() == self.expected {
            self.captured = Some(gradient);
            true
        } else {
            false
        }
    }

    /// Whether a matching gradient has been observed.
    #[must_use]
    pub fn observed(&self) -> bool {
        self.captured.is_some()
    }

    /// Consume the context, yielding the captured gradient.
    ///
    /// # Errors
    ///
    /// [`ExplainError::GradientNotCaptured`] when the backward pass never
    /// delivered an input-shaped gradient.
    pub fn into_gradient(self) -> Result<Tensor<B, 4>> {
        self.captured
            .ok_or(ExplainError::GradientNotCaptured { layer: self.layer })
    }
}
