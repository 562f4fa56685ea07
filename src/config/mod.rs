//! Declarative training configuration.
//!
//! A [`TrainSpec`] is loaded from a YAML file, validated once, and then
//! treated as opaque constructor input by the rest of the pipeline: the batch
//! engine never re-reads configuration at serving time.
//!
//! # Example
//!
//! ```no_run
//! use segmentar::config::TrainSpec;
//!
//! let spec = TrainSpec::from_yaml_file("config.yaml")?;
//! spec.validate()?;
//! let geometry = spec.geometry();
//! # Ok::<(), segmentar::Error>(())
//! ```

mod schema;
mod validate;

pub use schema::{ClassesSpec, DataSpec, Geometry, ImageSpec, SplitFiles, TrainSpec, TrainingSpec};

#[cfg(test)]
mod tests;
