//! Two-tower scoring model
//!
//! Two feed-forward towers with identical widths map user and item features into a
//! shared embedding space. Embeddings are L2-normalized, so the score (their dot
//! product) is a cosine similarity in `[-1, 1]`.
//!
//! The model is generic over the burn backend. Training runs on [`TrainBackend`]
//! (autodiff over ndarray); the trained model is converted to [`InferenceBackend`]
//! for prediction.

pub mod builder;
pub mod config;
pub mod error;
pub mod network;
pub mod trainer;

use burn::backend::Autodiff;
use burn_ndarray::{NdArray, NdArrayDevice};

pub use builder::{build_model, build_towers};
pub use config::{TowerConfig, TrainingConfig};
pub use error::TowerError;
pub use network::{l2_normalize, to_array, to_tensor, Tower, TwoTowerModel};
pub use trainer::{Trainer, TrainingReport};

pub type InferenceBackend = NdArray<f32>;
pub type TrainBackend = Autodiff<InferenceBackend>;
pub type Device = NdArrayDevice;
