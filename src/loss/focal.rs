//! Focal loss variants.

use ndarray::{Array1, Array3, Array4, Axis, Zip};

use super::renormalize_and_clip;
use super::traits::LossFn;

/// Elementwise `pt`: the predicted probability of the true outcome.
///
/// `pt = p` where `y_true == 1`, else `1 - p`.
fn focal_pt(y_true: &Array4<f32>, probs: Array4<f32>) -> Array4<f32> {
    let mut pt = probs;
    Zip::from(&mut pt).and(y_true).for_each(|p, &t| {
        *p = t * *p + (1.0 - t) * (1.0 - *p);
    });
    pt
}

/// Focal loss (Lin et al. 2017) with scalar alpha.
///
/// Per pixel: `-sum_c alpha * (1 - pt)^gamma * ln(pt)`, with the same
/// class-axis renormalization and clipping as
/// [`WeightedCrossEntropy`](super::WeightedCrossEntropy). `gamma` focuses the
/// loss on hard, misclassified pixels; `gamma = 0` recovers a plain
/// cross-entropy over outcomes.
pub struct FocalLoss {
    alpha: f32,
    gamma: f32,
}

impl FocalLoss {
    pub fn new(alpha: f32, gamma: f32) -> Self {
        Self { alpha, gamma }
    }
}

impl LossFn for FocalLoss {
    fn forward(&self, y_true: &Array4<f32>, y_pred: &Array4<f32>) -> Array3<f32> {
        assert_eq!(
            y_true.shape(),
            y_pred.shape(),
            "y_true and y_pred must have the same shape"
        );

        let pt = focal_pt(y_true, renormalize_and_clip(y_pred));
        let term = pt.mapv(|pt| self.alpha * (1.0 - pt).powf(self.gamma) * pt.ln());
        -term.sum_axis(Axis(3))
    }

    fn name(&self) -> &'static str {
        "Focal"
    }
}

/// Focal loss with per-class alpha derived from class weights.
///
/// Identical to [`FocalLoss`] except `alpha_c = 1 / weight_c`, so classes
/// that already carry a large cross-entropy weight are damped here rather
/// than amplified twice.
pub struct WeightedFocalLoss {
    alpha: Array1<f32>,
    gamma: f32,
}

impl WeightedFocalLoss {
    /// Create the loss from per-class weights (inverted at construction).
    pub fn new(weights: Vec<f32>, gamma: f32) -> Self {
        Self {
            alpha: Array1::from(weights).mapv(|w| 1.0 / w),
            gamma,
        }
    }
}

impl LossFn for WeightedFocalLoss {
    fn forward(&self, y_true: &Array4<f32>, y_pred: &Array4<f32>) -> Array3<f32> {
        assert_eq!(
            y_true.shape(),
            y_pred.shape(),
            "y_true and y_pred must have the same shape"
        );
        assert_eq!(
            self.alpha.len(),
            y_true.shape()[3],
            "one weight per class required"
        );

        let pt = focal_pt(y_true, renormalize_and_clip(y_pred));
        let gamma = self.gamma;
        let mut term = pt.mapv(|pt| (1.0 - pt).powf(gamma) * pt.ln());
        term *= &self.alpha;
        -term.sum_axis(Axis(3))
    }

    fn name(&self) -> &'static str {
        "WeightedFocal"
    }
}
