//! Overlap metrics for one-hot segmentation tensors.
//!
//! Naming note: `intersection_over_union` keeps its historical name but
//! computes the *Dice coefficient* `2 * (I + eps) / (U + eps)` with
//! `U = sum(y_true + y_pred)`, not the classic IoU ratio `I / U`. The
//! formula is preserved literally so scores stay comparable with previously
//! recorded training results; renaming or "fixing" it would change numbers.

use ndarray::{Array4, Axis, Zip};

/// Smoothing term keeping empty classes away from 0 / 0.
pub const OVERLAP_EPSILON: f64 = 1e-6;

/// Dice-style overlap score for one class: `2 * (I + eps) / (U + eps)`.
///
/// `I = sum(y_true_c * y_pred_c)` and `U = sum(y_true_c + y_pred_c)` over
/// all pixels and batch members. 1.0 for a perfect one-hot prediction. A
/// class absent from both truth and prediction degenerates to
/// `2 * eps / eps = 2.0` — a quirk of the preserved formula, kept as-is.
pub fn intersection_over_union(
    y_true: &Array4<f32>,
    y_pred: &Array4<f32>,
    class_index: usize,
) -> f32 {
    assert_eq!(
        y_true.shape(),
        y_pred.shape(),
        "y_true and y_pred must have the same shape"
    );

    let truth = y_true.index_axis(Axis(3), class_index);
    let pred = y_pred.index_axis(Axis(3), class_index);

    let mut intersection = 0.0f64;
    let mut union = 0.0f64;
    Zip::from(&truth).and(&pred).for_each(|&t, &p| {
        intersection += f64::from(t * p);
        union += f64::from(t + p);
    });

    (2.0 * (intersection + OVERLAP_EPSILON) / (union + OVERLAP_EPSILON)) as f32
}

/// Arithmetic mean of [`intersection_over_union`] over all classes.
pub fn mean_intersection_over_union(
    y_true: &Array4<f32>,
    y_pred: &Array4<f32>,
    class_names: &[String],
) -> f32 {
    let total: f32 = (0..class_names.len())
        .map(|c| intersection_over_union(y_true, y_pred, c))
        .sum();
    total / class_names.len() as f32
}

/// Per-class scores paired with their class names, for report printing.
pub fn per_class_report(
    y_true: &Array4<f32>,
    y_pred: &Array4<f32>,
    class_names: &[String],
) -> Vec<(String, f32)> {
    class_names
        .iter()
        .enumerate()
        .map(|(c, name)| (name.clone(), intersection_over_union(y_true, y_pred, c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array4;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|c| format!("class{c}")).collect()
    }

    /// One-hot tensor over a 2x2 image, one sample, from per-pixel class ids.
    fn one_hot(ids: [usize; 4], num_classes: usize) -> Array4<f32> {
        let mut t = Array4::zeros((1, 2, 2, num_classes));
        for (i, &c) in ids.iter().enumerate() {
            t[[0, i / 2, i % 2, c]] = 1.0;
        }
        t
    }

    #[test]
    fn perfect_prediction_scores_one() {
        let y_true = one_hot([0, 1, 2, 1], 3);
        for c in 0..3 {
            assert_relative_eq!(
                intersection_over_union(&y_true, &y_true.clone(), c),
                1.0,
                epsilon = 1e-5
            );
        }
        assert_relative_eq!(
            mean_intersection_over_union(&y_true, &y_true.clone(), &names(3)),
            1.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn disjoint_prediction_scores_near_zero() {
        let y_true = one_hot([0, 0, 0, 0], 2);
        let y_pred = one_hot([1, 1, 1, 1], 2);
        // I = 0, U = 4 for class 0.
        let score = intersection_over_union(&y_true, &y_pred, 0);
        assert!(score < 1e-5);
    }

    #[test]
    fn formula_is_dice_not_classic_iou() {
        // Half overlap: I = 2, U = 8. Dice = 2*2/8 = 0.5; classic IoU
        // (I / (T + P - I)) would be 2/6. The historical name is kept but
        // the Dice value is the contract.
        let y_true = one_hot([0, 0, 0, 0], 2);
        let y_pred = one_hot([0, 0, 1, 1], 2);
        assert_relative_eq!(
            intersection_over_union(&y_true, &y_pred, 0),
            0.5,
            epsilon = 1e-5
        );
    }

    #[test]
    fn empty_class_degenerates_to_two() {
        // Class 2 appears in neither truth nor prediction: I = U = 0, so the
        // literal formula gives 2 * (0 + eps) / (0 + eps) = 2.0.
        let y_true = one_hot([0, 1, 0, 1], 3);
        let score = intersection_over_union(&y_true, &y_true.clone(), 2);
        assert_relative_eq!(score, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn mean_averages_over_classes() {
        let y_true = one_hot([0, 0, 1, 1], 2);
        let y_pred = one_hot([0, 1, 1, 1], 2);
        let per_class: Vec<f32> = (0..2)
            .map(|c| intersection_over_union(&y_true, &y_pred, c))
            .collect();
        let mean = mean_intersection_over_union(&y_true, &y_pred, &names(2));
        assert_relative_eq!(
            mean,
            (per_class[0] + per_class[1]) / 2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn report_pairs_names_with_scores() {
        let y_true = one_hot([0, 1, 0, 1], 2);
        let report = per_class_report(&y_true, &y_true.clone(), &names(2));
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].0, "class0");
        assert_relative_eq!(report[0].1, 1.0, epsilon = 1e-5);
    }
}
