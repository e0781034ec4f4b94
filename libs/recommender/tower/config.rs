//! Configuration for the towers and the training loop

use burn::tensor::backend::Backend;
use serde::{Deserialize, Serialize};

use super::error::TowerError;
use super::network::Tower;
use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_EPOCHS, DEFAULT_LAYER_SIZES, DEFAULT_LEARNING_RATE, DEFAULT_SEED,
};

/// Architecture of one tower: the width of each dense layer, last one is the embedding width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerConfig {
    pub layer_sizes: Vec<usize>,
}

impl TowerConfig {
    pub fn new(layer_sizes: Vec<usize>) -> Self {
        Self { layer_sizes }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), TowerError> {
        if self.layer_sizes.is_empty() {
            return Err(TowerError::InvalidLayerSizes {
                sizes: self.layer_sizes.clone(),
                reason: "at least one layer is required",
            });
        }
        if self.layer_sizes.contains(&0) {
            return Err(TowerError::InvalidLayerSizes {
                sizes: self.layer_sizes.clone(),
                reason: "every layer must have at least one unit",
            });
        }
        Ok(())
    }

    /// Width of the embeddings this tower emits
    pub fn embedding_dim(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or_default()
    }

    /// Initialize a tower reading `input_dim` features, with fresh random weights
    pub fn init<B: Backend>(
        &self,
        input_dim: usize,
        device: &B::Device,
    ) -> Result<Tower<B>, TowerError> {
        self.validate()?;
        if input_dim == 0 {
            return Err(TowerError::DimensionMismatch {
                what: "tower input width",
                expected: 1,
                found: 0,
            });
        }
        Ok(Tower::new(input_dim, &self.layer_sizes, device))
    }
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_SIZES.to_vec())
    }
}

/// Optimizer and loop settings for [`Trainer`](super::Trainer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Adam learning rate
    pub learning_rate: f64,
    /// Passes over the training set
    pub epochs: usize,
    /// Rows per optimizer step
    pub batch_size: usize,
    /// Seed for weight initialization and batch shuffling
    pub seed: u64,
}

impl TrainingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), TowerError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(TowerError::Configuration {
                message: format!("learning_rate must be > 0, got {}", self.learning_rate),
            });
        }
        if self.epochs == 0 {
            return Err(TowerError::Configuration {
                message: "epochs must be > 0".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(TowerError::Configuration {
                message: "batch_size must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}
