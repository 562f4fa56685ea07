//! Configuration validation.
//!
//! Validates a [`TrainSpec`] for internal consistency before any file is
//! opened. Path existence is checked lazily by the reader, not here, since
//! the three splits may live on storage that is mounted after startup.

use crate::error::{Error, Result};

use super::schema::TrainSpec;

impl TrainSpec {
    /// Validate the spec for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.image.width == 0 || self.image.height == 0 || self.image.depth == 0 {
            return Err(Error::ConfigError(format!(
                "image dimensions must be non-zero, got {}x{}x{}",
                self.image.width, self.image.height, self.image.depth
            )));
        }

        if self.classes.names.is_empty() {
            return Err(Error::ConfigError("class name list is empty".to_string()));
        }

        if self.classes.weights.len() != self.classes.names.len() {
            return Err(Error::ConfigError(format!(
                "{} class weights for {} classes",
                self.classes.weights.len(),
                self.classes.names.len()
            )));
        }

        if let Some(w) = self.classes.weights.iter().find(|w| **w <= 0.0) {
            return Err(Error::ConfigError(format!(
                "class weights must be positive, got {w}"
            )));
        }

        if self.data.batch_size == 0 {
            return Err(Error::ConfigError("batch_size must be non-zero".to_string()));
        }

        if self.training.epochs == 0 {
            return Err(Error::ConfigError("epochs must be non-zero".to_string()));
        }

        if self.training.num_training == 0 {
            return Err(Error::ConfigError(
                "num_training must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
