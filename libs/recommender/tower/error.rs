//! Error types for the two-tower model

use thiserror::Error;

/// Errors raised while building, training or running the two-tower model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TowerError {
    /// Layer sizes empty or containing a zero width
    #[error("invalid layer sizes {sizes:?}: {reason}")]
    InvalidLayerSizes {
        sizes: Vec<usize>,
        reason: &'static str,
    },

    /// Input width or row count does not match what the model expects
    #[error("{what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Training or evaluation called without any rows
    #[error("cannot train or evaluate on an empty batch")]
    EmptyBatch,

    /// Tensor data could not be read back into host memory
    #[error("tensor data error: {0}")]
    TensorData(String),

    /// Training configuration validation errors
    #[error("training configuration error: {message}")]
    Configuration { message: String },
}
