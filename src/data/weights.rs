//! Class-frequency weight computation.

use crate::error::{Error, Result};

/// Compute per-class weights from observed label frequencies.
///
/// `weight_c = max(count) / count_c`, so the majority class gets weight 1.0
/// and rarer classes get proportionally larger weights. For three classes at
/// 10% / 50% / 40% the weights are `[5.0, 1.0, 1.25]`.
///
/// This is a one-shot, full-dataset computation: run it as a separate offline
/// pass over a split, never interleaved with per-batch serving of the same
/// files. Every class must be observed at least once; a class with zero
/// count has no defined weight.
pub fn class_frequency_weights(label_ids: &[u32], num_classes: usize) -> Result<Vec<f32>> {
    let mut counts = vec![0u64; num_classes];
    for &id in label_ids {
        if id as usize >= num_classes {
            return Err(Error::OutOfRangeClassId {
                class_id: id,
                num_classes,
            });
        }
        counts[id as usize] += 1;
    }

    let majority = counts.iter().copied().max().unwrap_or(0);
    if counts.iter().any(|&c| c == 0) {
        return Err(Error::ConfigError(format!(
            "class frequency weights need every class observed, counts were {counts:?}"
        )));
    }

    Ok(counts
        .iter()
        .map(|&c| majority as f32 / c as f32)
        .collect())
}
