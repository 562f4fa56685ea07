//! Loss function trait.

use ndarray::{Array3, Array4};

/// Trait for pixel-wise loss functions.
///
/// `y_true` and `y_pred` are `(batch, width, height, num_classes)` tensors,
/// `y_true` one-hot. The result is the per-pixel loss `(batch, width,
/// height)` after summing over the class axis; reducing over batch and
/// pixels is up to the caller.
pub trait LossFn {
    /// Compute the per-pixel loss surface.
    fn forward(&self, y_true: &Array4<f32>, y_pred: &Array4<f32>) -> Array3<f32>;

    /// Name of the loss function.
    fn name(&self) -> &str;
}
