//! Error types for burnscope_core.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors that can occur in burnscope operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No layer in the model matched the input-layer predicate.
    #[error("no qualifying input layer: model declares no 2-D convolution with {wanted_in_channels} input channels")]
    NoInputLayer {
        /// Input-channel count the predicate asked for.
        wanted_in_channels: usize,
    },

    /// More than one layer matched the input-layer predicate under strict selection.
    #[error("ambiguous input layer: {matches} layers match the predicate; use first-match selection to pick the earliest")]
    AmbiguousInputLayer {
        /// Number of layers that matched.
        matches: usize,
    },

    /// Target class index outside the model's class range.
    #[error("target class {class} out of range for {n_classes} classes")]
    ClassOutOfRange {
        /// Requested class index.
        class: usize,
        /// Number of output classes.
        n_classes: usize,
    },

    /// Shape mismatch between tensors.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        got: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoInputLayer {
            wanted_in_channels: 3,
        };
        assert!(err.to_string().contains("3 input channels"));

        let err = CoreError::ClassOutOfRange {
            class: 10,
            n_classes: 10,
        };
        assert_eq!(
            err.to_string(),
            "target class 10 out of range for 10 classes"
        );
    }

    #[test]
    fn test_ambiguous_message_counts_matches() {
        let err = CoreError::AmbiguousInputLayer { matches: 2 };
        assert!(err.to_string().contains("2 layers"));
    }
}
