//! # burnscope_models
//!
//! Small reference CNN classifiers implementing
//! [`ImageClassifier`](burnscope_core::ImageClassifier).
//!
//! These serve as implementation templates for user models and as fixtures
//! for the saliency test suite:
//! - [`SimpleCnn`] — conv → ReLU → flatten → linear, with a configurable
//!   input-channel count
//! - [`TinyCnn`] — a minimal conv(3→1) → flatten → linear model whose
//!   gradients can be checked analytically

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cnn;

pub use cnn::{SimpleCnn, SimpleCnnConfig, TinyCnn, TinyCnnConfig};
