//! Error types for prediction

use thiserror::Error;

use crate::scaler::ScalerError;
use crate::tower::TowerError;
use crate::vocabulary::EntityKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Tower(#[from] TowerError),

    #[error(transparent)]
    Scaler(#[from] ScalerError),

    /// User and item matrices do not describe the same number of pairs
    #[error("{users} user rows but {items} item rows")]
    RowMismatch { users: usize, items: usize },

    /// Candidate pool was encoded without its id column
    #[error("{0} candidates carry no id column")]
    MissingIds(EntityKind),

    /// Requested entity is not in the encoded pool
    #[error("{entity} {id} not found")]
    UnknownEntity { entity: EntityKind, id: i64 },
}
