//! # burnscope
//!
//! Gradient saliency maps for burn image classifiers.
//!
//! Given a pretrained convolutional classifier and a target class index,
//! burnscope computes the gradient of that class's score with respect to the
//! input image — an image-specific class saliency map showing which pixels
//! drive the prediction. One forward pass, one class-seeded backward pass.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use burnscope::prelude::*;
//!
//! type B = burn_autodiff::Autodiff<burn_ndarray::NdArray>;
//!
//! let device = Default::default();
//! let model: SimpleCnn<B> = SimpleCnnConfig::new(3, 32, 10).init(&device);
//!
//! let extractor = SaliencyExtractor::new(model, device)?;
//! let map = extractor.saliency(image, target_class)?;
//! let heat = map.channel_max(); // (1, H, W)
//! ```
//!
//! ## Feature Flags
//!
//! - `backend-ndarray` (default): CPU backend using ndarray
//! - `backend-wgpu`: GPU backend using WGPU

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all crates
pub use burnscope_core as core;
pub use burnscope_explain as explain;
pub use burnscope_models as models;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use burnscope::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use burnscope_core::{
        ImageClassifier, LayerKind, LayerPredicate, LayerSelection, LayerSpec, Seed,
    };

    // Models
    pub use burnscope_models::{SimpleCnn, SimpleCnnConfig, TinyCnn, TinyCnnConfig};

    // Explain
    pub use burnscope_explain::{SaliencyExtractor, SaliencyMap};
}
