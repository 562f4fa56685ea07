//! # segmentar
//!
//! Batch supply engine and loss/metric library for training pixel-wise
//! classifiers over fixed-geometry detector images (wire/time maps).
//!
//! The crate covers the stateful core of the training pipeline:
//!
//! - [`data::PairedReader`] - lock-step reader over a feature/label CSV pair
//! - [`data::preprocess`] - max-normalization and one-hot encoding
//! - [`data::BatchSequence`] - epoch-scoped, sequential batch provider
//! - [`loss`] - weighted cross-entropy and focal loss variants
//! - [`metrics`] - Dice-style per-class and mean overlap scores
//! - [`config`] - declarative YAML configuration with validation
//!
//! Model topology, checkpointing, plotting and the training loop itself are
//! external collaborators: they consume batches and loss surfaces from this
//! crate and feed predictions back into the metrics.
//!
//! # Example
//!
//! ```no_run
//! use segmentar::config::TrainSpec;
//! use segmentar::data::BatchSequence;
//! use segmentar::loss::{LossFn, WeightedCrossEntropy};
//!
//! let spec = TrainSpec::from_yaml_file("config.yaml")?;
//! spec.validate()?;
//!
//! let mut sequence = BatchSequence::new(
//!     &spec.data.training.features,
//!     &spec.data.training.labels,
//!     spec.geometry(),
//!     spec.training.num_training,
//!     spec.data.batch_size,
//! )?;
//! let loss_fn = WeightedCrossEntropy::new(spec.classes.weights.clone());
//!
//! for epoch in 0..spec.training.epochs {
//!     sequence.epoch_reset()?;
//!     for index in 0..sequence.len() {
//!         let batch = sequence.get_batch(index)?;
//!         // feed batch.features to the model, score with loss_fn...
//!         let per_pixel = loss_fn.forward(&batch.labels, &batch.labels);
//!         let _ = (epoch, per_pixel);
//!     }
//! }
//! # Ok::<(), segmentar::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub mod metrics;

pub use config::{Geometry, TrainSpec};
pub use data::{Batch, BatchSequence, EpochState, PairedReader, RowPair, Side};
pub use error::{Error, Result};
pub use loss::{FocalLoss, LossFn, WeightedCrossEntropy, WeightedFocalLoss};
pub use metrics::{intersection_over_union, mean_intersection_over_union};
