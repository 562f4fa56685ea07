//! Data pipeline: paired CSV streams, preprocessing and batch supply.
//!
//! The pipeline is layered leaf-to-root:
//! - [`PairedReader`] walks two delimited files in lock-step and yields raw
//!   numeric row pairs.
//! - [`preprocess`] turns raw rows into normalized feature tensors and
//!   one-hot label tensors.
//! - [`BatchSequence`] composes the two into an epoch-scoped batch provider.
//!
//! One [`BatchSequence`] owns its two file cursors exclusively; it is
//! single-owner mutable state and must not be shared across threads.

mod batch;
pub mod preprocess;
mod reader;
mod sequence;
mod weights;

pub use batch::Batch;
pub use preprocess::{normalize_feature, one_hot_label};
pub use reader::{PairedReader, RowPair, Side};
pub use sequence::{BatchSequence, EpochState};
pub use weights::class_frequency_weights;
