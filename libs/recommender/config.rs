//! Run configuration
//!
//! Everything a training run reads besides the static schemas. Loadable from JSON;
//! any field left out keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_LAYER_SIZES, DEFAULT_TEST_FRACTION};
use crate::dataset::DatasetConfig;
use crate::scaler::ScalerKind;
use crate::tower::{TowerConfig, TowerError, TrainingConfig};

/// Error types for configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl From<TowerError> for ConfigError {
    fn from(error: TowerError) -> Self {
        ConfigError::Invalid {
            message: error.to_string(),
        }
    }
}

/// Configuration of one training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub dataset: DatasetConfig,

    /// Widths of the dense layers in each tower; the last is the embedding width
    pub layer_sizes: Vec<usize>,

    pub training: TrainingConfig,

    /// Share of interactions held out for evaluation, in `[0, 1)`
    pub test_fraction: f64,

    pub user_scaler: ScalerKind,
    pub item_scaler: ScalerKind,
    pub rating_scaler: ScalerKind,
}

impl RecommenderConfig {
    /// Read a JSON config file
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        TowerConfig::new(self.layer_sizes.clone()).validate()?;
        self.training.validate()?;

        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(ConfigError::Invalid {
                message: format!("test_fraction must be in [0, 1), got {}", self.test_fraction),
            });
        }
        Ok(())
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            layer_sizes: DEFAULT_LAYER_SIZES.to_vec(),
            training: TrainingConfig::default(),
            test_fraction: DEFAULT_TEST_FRACTION,
            user_scaler: ScalerKind::Standard,
            item_scaler: ScalerKind::Standard,
            rating_scaler: ScalerKind::MinMax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RecommenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layer_sizes, vec![64, 32, 16]);
        assert_eq!(config.rating_scaler, ScalerKind::MinMax);
    }

    #[test]
    fn test_partial_json() {
        let config: RecommenderConfig = serde_json::from_str(
            r#"{"layer_sizes": [8, 4], "training": {"epochs": 3}, "rating_scaler": "standard"}"#,
        )
        .unwrap();
        assert_eq!(config.layer_sizes, vec![8, 4]);
        assert_eq!(config.training.epochs, 3);
        assert_eq!(config.training.learning_rate, 0.01);
        assert_eq!(config.rating_scaler, ScalerKind::Standard);
        assert_eq!(config.user_scaler, ScalerKind::Standard);
    }

    #[test]
    fn test_invalid_values() {
        let config = RecommenderConfig {
            test_fraction: 1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let config = RecommenderConfig {
            layer_sizes: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(serde_json::from_str::<RecommenderConfig>(r#"{"user_scaler": "robust"}"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"dataset": {"data_dir": "/srv/data"}, "test_fraction": 0.1}"#)
            .unwrap();

        let config = RecommenderConfig::from_json_file(&path).unwrap();
        assert_eq!(config.dataset.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.dataset.users_file, "userprofile.csv");
        assert_eq!(config.test_fraction, 0.1);

        assert!(matches!(
            RecommenderConfig::from_json_file(&dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
