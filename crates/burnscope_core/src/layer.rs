//! Structural layer metadata and input-layer selection.
//!
//! Saliency extraction needs to know which layer sits directly on the input
//! image. Models describe their layers as a flat list of [`LayerSpec`]s in
//! declaration order; a [`LayerPredicate`] identifies candidate layers by
//! structure (kind + input-channel count), and a [`LayerSelection`] policy
//! decides what to do when the predicate matches zero or several layers.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Kind of a model layer, as far as structural matching cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// 2-D convolution.
    Conv2d,
    /// 1-D convolution.
    Conv1d,
    /// Fully connected layer.
    Linear,
    /// Pooling layer.
    Pool,
    /// Activation function.
    Activation,
    /// Normalization layer.
    Norm,
    /// Anything else.
    Other,
}

/// Structural description of one model layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Layer name, unique within the model.
    pub name: String,
    /// Layer kind.
    pub kind: LayerKind,
    /// Input-channel count, for convolutions.
    pub in_channels: Option<usize>,
}

impl LayerSpec {
    /// Describe a layer with no input-channel count.
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            in_channels: None,
        }
    }

    /// Describe a 2-D convolution with the given input-channel count.
    pub fn conv2d(name: impl Into<String>, in_channels: usize) -> Self {
        Self {
            name: name.into(),
            kind: LayerKind::Conv2d,
            in_channels: Some(in_channels),
        }
    }

    /// Describe a 1-D convolution with the given input-channel count.
    pub fn conv1d(name: impl Into<String>, in_channels: usize) -> Self {
        Self {
            name: name.into(),
            kind: LayerKind::Conv1d,
            in_channels: Some(in_channels),
        }
    }

    /// Describe a fully connected layer.
    pub fn linear(name: impl Into<String>) -> Self {
        Self::new(name, LayerKind::Linear)
    }
}

/// Structural predicate identifying candidate interception layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPredicate {
    /// Required layer kind.
    pub kind: LayerKind,
    /// Required input-channel count.
    pub in_channels: usize,
}

impl LayerPredicate {
    /// The predicate for the layer adjacent to an RGB input image:
    /// a 2-D convolution with exactly 3 input channels.
    #[must_use]
    pub const fn input_conv() -> Self {
        Self {
            kind: LayerKind::Conv2d,
            in_channels: 3,
        }
    }

    /// Override the required input-channel count.
    #[must_use]
    pub const fn with_in_channels(mut self, in_channels: usize) -> Self {
        self.in_channels = in_channels;
        self
    }

    /// Whether a layer satisfies this predicate.
    #[must_use]
    pub fn matches(&self, layer: &LayerSpec) -> bool {
        layer.kind == self.kind && layer.in_channels == Some(self.in_channels)
    }
}

impl Default for LayerPredicate {
    fn default() -> Self {
        Self::input_conv()
    }
}

/// Policy for resolving the predicate against a model's layer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerSelection {
    /// Require exactly one match; several matches are an error.
    #[default]
    Unique,
    /// Take the first match in declaration order, ignoring later ones.
    FirstMatch,
}

impl LayerSelection {
    /// Resolve the predicate against `layers`.
    ///
    /// # Errors
    ///
    /// [`CoreError::NoInputLayer`] when nothing matches, and
    /// [`CoreError::AmbiguousInputLayer`] when several layers match under
    /// [`LayerSelection::Unique`].
    pub fn select<'a>(
        &self,
        predicate: &LayerPredicate,
        layers: &'a [LayerSpec],
    ) -> Result<&'a LayerSpec> {
        let mut candidates = layers.iter().filter(|l| predicate.matches(l));

        let first = candidates.next().ok_or(CoreError::NoInputLayer {
            wanted_in_channels: predicate.in_channels,
        })?;

        if let LayerSelection::Unique = self {
            let extra = candidates.count();
            if extra > 0 {
                return Err(CoreError::AmbiguousInputLayer { matches: extra + 1 });
            }
        }

        Ok(first)
    }
}
