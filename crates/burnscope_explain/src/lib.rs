//! # burnscope_explain
//!
//! Gradient saliency maps for burn image classifiers.
//!
//! Given a classifier and a target class, [`SaliencyExtractor`] runs one
//! forward pass and one class-seeded backward pass and returns the gradient
//! of the target class score with respect to the input image — a per-pixel
//! map of which regions drive that class's score.
//!
//! Reference: Simonyan et al., "Deep Inside Convolutional Networks:
//! Visualising Image Classification Models and Saliency Maps", 2014.
//!
//! ## Example
//!
//! ```rust,ignore
//! use burnscope_explain::SaliencyExtractor;
//! use burnscope_models::SimpleCnnConfig;
//!
//! let model = SimpleCnnConfig::new(3, 32, 10).init(&device);
//! let extractor = SaliencyExtractor::new(model, device)?;
//!
//! let map = extractor.saliency(image, 7)?;
//! let heat = map.channel_max(); // (1, H, W)
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod capture;
mod error;
mod saliency;

pub use capture::CaptureContext;
pub use error::{ExplainError, Result};
pub use saliency::{SaliencyExtractor, SaliencyMap};
