//! Weighted categorical cross-entropy.

use ndarray::{Array1, Array3, Array4, Axis};

use super::renormalize_and_clip;
use super::traits::LossFn;

/// Categorical cross-entropy with per-class weights.
///
/// Per pixel: `-sum_c y_true_c * ln(y_pred_c) * weight_c`, after
/// renormalizing `y_pred` along the class axis and clipping. The weight
/// multiplies the per-class term directly: a larger weight for class *c*
/// increases the penalty for misclassifying class *c*. Use weights from
/// [`class_frequency_weights`](crate::data::class_frequency_weights) for
/// class balance.
///
/// # Example
///
/// ```
/// use ndarray::Array4;
/// use segmentar::loss::{LossFn, WeightedCrossEntropy};
///
/// let loss_fn = WeightedCrossEntropy::new(vec![1.0, 1.0]);
/// let mut y_true = Array4::zeros((1, 1, 1, 2));
/// y_true[[0, 0, 0, 0]] = 1.0;
/// let y_pred = Array4::from_elem((1, 1, 1, 2), 0.5);
///
/// let loss = loss_fn.forward(&y_true, &y_pred);
/// assert!(loss[[0, 0, 0]] > 0.0);
/// ```
pub struct WeightedCrossEntropy {
    weights: Array1<f32>,
}

impl WeightedCrossEntropy {
    /// Create the loss with one positive weight per class, in class order.
    pub fn new(weights: Vec<f32>) -> Self {
        Self {
            weights: Array1::from(weights),
        }
    }
}

impl LossFn for WeightedCrossEntropy {
    fn forward(&self, y_true: &Array4<f32>, y_pred: &Array4<f32>) -> Array3<f32> {
        assert_eq!(
            y_true.shape(),
            y_pred.shape(),
            "y_true and y_pred must have the same shape"
        );
        assert_eq!(
            self.weights.len(),
            y_true.shape()[3],
            "one weight per class required"
        );

        let probs = renormalize_and_clip(y_pred);
        let mut term = probs.mapv(f32::ln);
        term *= y_true;
        term *= &self.weights;
        -term.sum_axis(Axis(3))
    }

    fn name(&self) -> &'static str {
        "WeightedCrossEntropy"
    }
}
