//! Error types for scaler operations

use thiserror::Error;

/// Errors raised by fitting or applying a scaler
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalerError {
    /// Selector is neither `standard` nor `minmax`
    #[error("invalid scaler kind '{0}' (must be 'standard' or 'minmax')")]
    InvalidScalerKind(String),

    /// Fit called on a matrix with no rows
    #[error("cannot fit a scaler on an empty matrix")]
    EmptyInput,

    /// Transform input width differs from the fitted width
    #[error("scaler fitted on {expected} columns, got {found}")]
    ShapeMismatch { expected: usize, found: usize },
}
