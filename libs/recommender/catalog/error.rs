use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors raised by the restaurant name/cuisine lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// No restaurant with this id
    #[error("restaurant {0} not found")]
    NotFound(i64),

    /// A lookup table could not be read
    #[error(transparent)]
    Source(#[from] DatasetError),
}
