//! # burnscope_core
//!
//! Core types and traits for burnscope image-model explainability.
//!
//! This crate provides:
//! - [`ImageClassifier`] — the capability trait saliency extraction needs
//!   from a model (logits forward pass + structural layer description)
//! - [`LayerSpec`], [`LayerPredicate`], [`LayerSelection`] — structural
//!   identification of the convolution adjacent to the input image
//! - [`one_hot_target`] — one-hot seed vectors for class-directed backward
//!   passes
//! - [`Seed`] for deterministic random number generation
//! - Error types and common utilities
//!
//! ## Shape Convention
//!
//! Image data follows the convention `(B, C, H, W)`:
//! - `B`: Batch size (number of images)
//! - `C`: Colour channels (3 for RGB input)
//! - `H`, `W`: Spatial height and width

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod layer;
mod model;
mod seed;
mod target;

pub use error::{CoreError, Result};
pub use layer::{LayerKind, LayerPredicate, LayerSelection, LayerSpec};
pub use model::ImageClassifier;
pub use seed::Seed;
pub use target::one_hot_target;

/// Backend type aliases for convenience
pub mod backend {
    #[cfg(feature = "backend-ndarray")]
    pub use burn_ndarray::NdArray;

    #[cfg(feature = "backend-wgpu")]
    pub use burn_wgpu::Wgpu;
}
