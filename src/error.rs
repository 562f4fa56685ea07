//! Error types for the batch supply pipeline.

use thiserror::Error;

/// Errors surfaced by the reader, preprocessor and batch engine.
///
/// None of these are retried internally; every fatal condition propagates to
/// the training driver, which decides whether to abort or skip.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure (quoting, record length drift, encoding).
    #[error("malformed row: {0}")]
    Csv(#[from] csv::Error),

    /// A data row did not have the field count the geometry requires.
    #[error("row {row}: expected {expected} fields, found {found}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A field could not be parsed as a number.
    #[error("row {row}: non-numeric token {token:?}")]
    NonNumeric { row: usize, token: String },

    /// An all-zero feature row cannot be max-normalized.
    #[error("all-zero feature row cannot be normalized")]
    DegenerateSample,

    /// A label carried a class id outside the configured class set.
    #[error("class id {class_id} outside [0, {num_classes})")]
    OutOfRangeClassId { class_id: u32, num_classes: usize },

    /// A batch was requested after the final batch of the epoch was served.
    #[error("epoch exhausted; call epoch_reset() before requesting more batches")]
    EpochExhausted,

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
