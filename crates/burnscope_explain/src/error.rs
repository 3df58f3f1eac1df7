//! Error types for burnscope_explain.

use thiserror::Error;

use burnscope_core::CoreError;

/// Result type alias using [`ExplainError`].
pub type Result<T> = std::result::Result<T, ExplainError>;

/// Errors that can occur during saliency extraction.
#[derive(Error, Debug)]
pub enum ExplainError {
    /// Error from core types (layer selection, seed construction, shapes).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backward pass produced no gradient matching the input shape at
    /// the intercepted layer.
    #[error("no gradient captured at layer '{layer}': backward pass never reached it with an input-shaped gradient")]
    GradientNotCaptured {
        /// Name of the intercepted layer.
        layer: String,
    },
}
