//! Epoch-scoped batch supply over a paired CSV stream.

use std::path::PathBuf;

use ndarray::{Array4, Axis};

use crate::config::Geometry;
use crate::error::{Error, Result};

use super::batch::Batch;
use super::preprocess::{normalize_feature, one_hot_label};
use super::reader::{PairedReader, RowPair, Side};

/// Where the engine stands in the epoch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochState {
    /// Freshly constructed or just reset; no batch served yet.
    Idle,
    /// Serving sequential batch requests.
    Streaming,
    /// The final batch of the epoch has been served; only
    /// [`BatchSequence::epoch_reset`] leaves this state.
    EpochBoundary,
}

/// Index-addressed batch provider over one split's feature/label file pair.
///
/// Despite the index-shaped API (kept for parity with step-counting training
/// drivers), the engine is *sequential-only*: each call serves the next
/// unread rows from its internal cursor. The `index` argument determines the
/// expected row count and marks the final short batch of the epoch; it never
/// seeks. Calling [`get_batch`](Self::get_batch) out of increasing order
/// therefore yields rows for the wrong logical position — the engine never
/// rewinds, so it cannot return stale or duplicated data, but row alignment
/// becomes the caller's problem.
///
/// The engine owns both file cursors exclusively and is not safe to share
/// across concurrent callers. The training driver must call
/// [`epoch_reset`](Self::epoch_reset) exactly once per epoch start; the
/// engine itself has no notion of epoch boundaries beyond the batch count.
pub struct BatchSequence {
    feature_path: PathBuf,
    label_path: PathBuf,
    geometry: Geometry,
    max_index: usize,
    batch_size: usize,
    reader: PairedReader,
    state: EpochState,
}

impl BatchSequence {
    /// Open both files (skipping headers) and start in [`EpochState::Idle`].
    pub fn new(
        feature_path: impl Into<PathBuf>,
        label_path: impl Into<PathBuf>,
        geometry: Geometry,
        max_index: usize,
        batch_size: usize,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::ConfigError("batch_size must be non-zero".to_string()));
        }
        if max_index == 0 {
            return Err(Error::ConfigError("max_index must be non-zero".to_string()));
        }

        let feature_path = feature_path.into();
        let label_path = label_path.into();
        let reader = PairedReader::open(&feature_path, &label_path, geometry)?;

        Ok(Self {
            feature_path,
            label_path,
            geometry,
            max_index,
            batch_size,
            reader,
            state: EpochState::Idle,
        })
    }

    /// Number of batches per epoch: `ceil(max_index / batch_size)`.
    pub fn len(&self) -> usize {
        self.max_index.div_ceil(self.batch_size)
    }

    /// Always at least one batch per epoch (`max_index > 0`).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EpochState {
        self.state
    }

    /// Serve the next batch of the epoch.
    ///
    /// `index` must increase by one per call, from 0 to `len() - 1`. The row
    /// count is `min(batch_size, max_index - index * batch_size)`, so the
    /// final batch of an epoch is short rather than padded. If either stream
    /// exhausts before the expected row count is reached, the batch is
    /// truncated and a diagnostic is emitted; this is not fatal. Requesting
    /// a batch past the epoch boundary is [`Error::EpochExhausted`].
    pub fn get_batch(&mut self, index: usize) -> Result<Batch> {
        if self.state == EpochState::EpochBoundary {
            return Err(Error::EpochExhausted);
        }

        let served = index.saturating_mul(self.batch_size);
        let expected = self.batch_size.min(self.max_index.saturating_sub(served));
        if expected == 0 {
            return Err(Error::EpochExhausted);
        }

        let mut features = Vec::with_capacity(expected);
        let mut labels = Vec::with_capacity(expected);

        for _ in 0..expected {
            match self.reader.next_pair()? {
                RowPair::Pair(feature_row, label_row) => {
                    features.push(normalize_feature(&feature_row, &self.geometry)?);
                    labels.push(one_hot_label(&label_row, &self.geometry)?);
                }
                RowPair::Exhausted(side) => {
                    let which = match side {
                        Side::Feature => "feature",
                        Side::Label => "label",
                    };
                    eprintln!(
                        "Warning: {which} stream exhausted after {} of {expected} rows in batch {index}; returning short batch",
                        features.len()
                    );
                    break;
                }
            }
        }

        self.state = if index + 1 >= self.len() {
            EpochState::EpochBoundary
        } else {
            EpochState::Streaming
        };

        self.assemble(features, labels)
    }

    /// Re-open both files, re-skip headers and return to [`EpochState::Idle`].
    ///
    /// Called by the training driver exactly once per epoch start. After a
    /// reset, `get_batch(0)` reproduces the tensors of the engine's very
    /// first `get_batch(0)` call.
    pub fn epoch_reset(&mut self) -> Result<()> {
        self.reader = PairedReader::open(&self.feature_path, &self.label_path, self.geometry)?;
        self.state = EpochState::Idle;
        Ok(())
    }

    fn assemble(
        &self,
        features: Vec<ndarray::Array3<f32>>,
        labels: Vec<ndarray::Array3<f32>>,
    ) -> Result<Batch> {
        let rows = features.len();
        let g = &self.geometry;

        let mut batch_features = Array4::zeros((rows, g.width, g.height, g.depth));
        let mut batch_labels = Array4::zeros((rows, g.width, g.height, g.num_classes));

        for (j, tensor) in features.iter().enumerate() {
            batch_features.index_axis_mut(Axis(0), j).assign(tensor);
        }
        for (j, tensor) in labels.iter().enumerate() {
            batch_labels.index_axis_mut(Axis(0), j).assign(tensor);
        }

        Ok(Batch::new(batch_features, batch_labels))
    }
}
