//! Configuration schema structs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed image geometry shared by every sample in a dataset.
///
/// Invariants (enforced by the reader and preprocessor):
/// feature rows carry `width * height * depth` fields, label rows carry
/// `width * height` fields, and every label id lies in `[0, num_classes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub num_classes: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize, depth: usize, num_classes: usize) -> Self {
        Self {
            width,
            height,
            depth,
            num_classes,
        }
    }

    /// Field count of one feature row.
    pub fn feature_len(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Field count of one label row (one class id per pixel).
    pub fn label_len(&self) -> usize {
        self.width * self.height
    }
}

/// Image dimensions as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageSpec {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

/// Ordered class names and the per-class loss weights aligned with them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassesSpec {
    pub names: Vec<String>,
    pub weights: Vec<f32>,
}

/// Feature/label file pair for one split.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitFiles {
    pub features: PathBuf,
    pub labels: PathBuf,
}

/// Per-split file pairs and the batch size used for all of them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataSpec {
    pub training: SplitFiles,
    pub validation: SplitFiles,
    pub testing: SplitFiles,
    pub batch_size: usize,
}

/// Training loop parameters consumed by the external driver.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingSpec {
    pub epochs: usize,
    pub num_training: usize,
    pub num_validation: usize,
    pub num_testing: usize,
}

/// Root of the YAML configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainSpec {
    pub image: ImageSpec,
    pub classes: ClassesSpec,
    pub data: DataSpec,
    pub training: TrainingSpec,
}

impl TrainSpec {
    /// Load a spec from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigError(format!(
                "failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a spec from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| Error::ConfigError(format!("failed to parse YAML config: {e}")))
    }

    /// Geometry derived from the image dimensions and class list.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(
            self.image.width,
            self.image.height,
            self.image.depth,
            self.classes.names.len(),
        )
    }
}
