//! One-hot target seeds for class-directed backward passes.

use burn::prelude::*;

use crate::error::{CoreError, Result};

/// Build a one-hot seed tensor of shape `(batch, n_classes)` with 1.0 in the
/// `target_class` column of every row and 0.0 elsewhere.
///
/// Seeding a backward pass with this tensor differentiates the target
/// class's score alone: the vector-Jacobian product it induces is exactly
/// the gradient of `logits[.., target_class]` with respect to upstream
/// tensors.
///
/// # Errors
///
/// [`CoreError::ClassOutOfRange`] when `target_class >= n_classes`.
pub fn one_hot_target<B: Backend>(
    batch: usize,
    n_classes: usize,
    target_class: usize,
    device: &B::Device,
) -> Result<Tensor<B, 2>> {
    if target_class >= n_classes {
        return Err(CoreError::ClassOutOfRange {
            class: target_class,
            n_classes,
        });
    }

    let mut row = vec![0.0f32; n_classes];
    row[target_class] = 1.0;

    let seed = Tensor::<B, 1>::from_floats(row.as_slice(), device).reshape([1, n_classes]);
    Ok(seed.repeat_dim(0, batch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_one_hot_target_values() {
        let device = Default::default();
        let seed = one_hot_target::<TestBackend>(1, 4, 2, &device).unwrap();

        assert_eq!(seed.dims(), [1, 4]);
        let values: Vec<f32> = seed.into_data().to_vec().unwrap();
        assert_eq!(values, vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_one_hot_target_batched() {
        let device = Default::default();
        let seed = one_hot_target::<TestBackend>(3, 2, 1, &device).unwrap();

        assert_eq!(seed.dims(), [3, 2]);
        let values: Vec<f32> = seed.into_data().to_vec().unwrap();
        assert_eq!(values, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_boundary_classes() {
        let device = Default::default();
        assert!(one_hot_target::<TestBackend>(1, 10, 0, &device).is_ok());
        assert!(one_hot_target::<TestBackend>(1, 10, 9, &device).is_ok());
    }

    #[test]
    fn test_class_out_of_range() {
        let device = Default::default();
        let err = one_hot_target::<TestBackend>(1, 10, 10, &device).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ClassOutOfRange {
                class: 10,
                n_classes: 10
            }
        ));
    }
}
