//! Pure row-to-tensor transforms.
//!
//! Both transforms keep the flattened column order of the source file:
//! column `i` maps to pixel `(x, y) = (i / height, i % height)`. Downstream
//! event displays rely on this ordering, so it must not change.

use ndarray::Array3;

use crate::config::Geometry;
use crate::error::{Error, Result};

/// Scale a raw feature row into `[0, 1]` and reshape to `(width, height, depth)`.
///
/// Every element is divided by `max(vector)`, so the brightest pixel of each
/// sample is exactly 1.0. An all-zero row has no usable scale and is rejected
/// as [`Error::DegenerateSample`] instead of producing NaNs.
pub fn normalize_feature(vector: &[f32], geometry: &Geometry) -> Result<Array3<f32>> {
    let expected = geometry.feature_len();
    if vector.len() != expected {
        return Err(Error::FieldCount {
            row: 0,
            expected,
            found: vector.len(),
        });
    }

    let max = vector.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    if max == 0.0 {
        return Err(Error::DegenerateSample);
    }

    let scaled: Vec<f32> = vector.iter().map(|&v| v / max).collect();
    let tensor = Array3::from_shape_vec(
        (geometry.width, geometry.height, geometry.depth),
        scaled,
    )?;
    Ok(tensor)
}

/// One-hot encode a label row and reshape to `(width, height, num_classes)`.
///
/// Each pixel gets 1.0 at its class index and 0.0 elsewhere. Any class id
/// outside `[0, num_classes)` is fatal.
pub fn one_hot_label(vector: &[u32], geometry: &Geometry) -> Result<Array3<f32>> {
    let expected = geometry.label_len();
    if vector.len() != expected {
        return Err(Error::FieldCount {
            row: 0,
            expected,
            found: vector.len(),
        });
    }

    let mut tensor = Array3::zeros((geometry.width, geometry.height, geometry.num_classes));
    for (i, &class_id) in vector.iter().enumerate() {
        if class_id as usize >= geometry.num_classes {
            return Err(Error::OutOfRangeClassId {
                class_id,
                num_classes: geometry.num_classes,
            });
        }
        let x = i / geometry.height;
        let y = i % geometry.height;
        tensor[[x, y, class_id as usize]] = 1.0;
    }
    Ok(tensor)
}
