// Restaurant recommender library
pub mod catalog;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod encoder;
pub mod predictor;
pub mod scaler;
pub mod tower;
pub mod vocabulary;

use thiserror::Error;

pub use catalog::{LookupError, RestaurantCatalog};
pub use config::{ConfigError, RecommenderConfig};
pub use dataset::{AssembledDataset, DatasetAssembler, DatasetConfig, DatasetError};
pub use encoder::{encode, EncodeError, EncodedMatrix};
pub use predictor::{predict, FitSummary, PredictError, Recommendation, Recommender};
pub use scaler::{fit_scale, Scaler, ScalerError, ScalerKind};
pub use tower::{build_model, build_towers, TowerError, TwoTowerModel};
pub use vocabulary::{Schemas, VocabularyError};

/// Any failure of an end-to-end run
#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Scaler(#[from] ScalerError),

    #[error(transparent)]
    Tower(#[from] TowerError),

    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
