//! Loss functions for pixel-wise classification.
//!
//! Every loss is a value implementing [`LossFn`] and holding an immutable
//! configuration (weights, alpha, gamma) fixed at construction — there is no
//! hidden captured state. Losses return the per-pixel loss surface
//! `(batch, width, height)`; batch-level reduction (mean, sum) is the
//! caller's responsibility.
//!
//! - [`WeightedCrossEntropy`] - categorical cross-entropy with per-class weights
//! - [`FocalLoss`] - focal loss with scalar alpha and focusing parameter gamma
//! - [`WeightedFocalLoss`] - focal loss with per-class alpha = 1 / weight

mod cross_entropy;
mod focal;
mod traits;

pub use cross_entropy::WeightedCrossEntropy;
pub use focal::{FocalLoss, WeightedFocalLoss};
pub use traits::LossFn;

use ndarray::{Array4, Axis};

/// Clipping bound keeping log arguments away from 0 and 1.
pub const EPSILON: f32 = 1e-7;

/// Renormalize predictions along the class axis to sum to 1 (defensive
/// against drift in the upstream softmax), then clip into `[ε, 1 - ε]`.
pub(crate) fn renormalize_and_clip(y_pred: &Array4<f32>) -> Array4<f32> {
    let sums = y_pred.sum_axis(Axis(3)).insert_axis(Axis(3));
    let mut probs = y_pred / &sums;
    probs.mapv_inplace(|p| p.clamp(EPSILON, 1.0 - EPSILON));
    probs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_names() {
        assert_eq!(
            WeightedCrossEntropy::new(vec![1.0, 1.0]).name(),
            "WeightedCrossEntropy"
        );
        assert_eq!(FocalLoss::new(0.25, 2.0).name(), "Focal");
        assert_eq!(
            WeightedFocalLoss::new(vec![1.0, 1.0], 2.0).name(),
            "WeightedFocal"
        );
    }

    #[test]
    fn renormalize_makes_class_axis_sum_to_one() {
        let y_pred = Array4::from_elem((1, 2, 2, 4), 0.5);
        let probs = renormalize_and_clip(&y_pred);
        for sum in probs.sum_axis(Axis(3)).iter() {
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn clip_keeps_probabilities_off_the_boundaries() {
        let mut y_pred = Array4::zeros((1, 1, 1, 2));
        y_pred[[0, 0, 0, 0]] = 1.0;
        let probs = renormalize_and_clip(&y_pred);
        assert!(probs[[0, 0, 0, 0]] <= 1.0 - EPSILON);
        assert!(probs[[0, 0, 0, 1]] >= EPSILON);
    }
}
