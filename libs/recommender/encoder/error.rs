//! Error types for feature encoding

use thiserror::Error;

/// Errors raised by [`encode`](super::encode); any error aborts the whole call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// A categorical cell holds a value absent from its feature's vocabulary
    #[error("unknown category '{value}' for feature '{feature}' (row id {id})")]
    UnknownCategory {
        feature: String,
        value: String,
        id: i64,
    },

    /// A textual cell belongs to a feature with no vocabulary at all
    #[error("feature '{feature}' has no vocabulary (row id {id})")]
    UnknownFeature { feature: String, id: i64 },

    /// A record's cell count differs from the table's declared features
    #[error("row id {id} has {found} cells, expected {expected}")]
    RowWidth {
        id: i64,
        expected: usize,
        found: usize,
    },
}
