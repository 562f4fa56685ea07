//! Batch data structure.

use ndarray::Array4;

/// One batch of preprocessed samples.
///
/// Shapes are uniform across members: `features` is
/// `(rows, width, height, depth)` and `labels` is
/// `(rows, width, height, num_classes)`. The last batch of an epoch may
/// carry fewer rows than the configured batch size.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Normalized input features.
    pub features: Array4<f32>,
    /// One-hot target labels.
    pub labels: Array4<f32>,
}

impl Batch {
    /// Create a new batch.
    pub fn new(features: Array4<f32>, labels: Array4<f32>) -> Self {
        Self { features, labels }
    }

    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.features.shape()[0]
    }

    /// Whether the batch holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
