//! Error types for dataset loading and assembly

use std::path::PathBuf;

use thiserror::Error;

use crate::encoder::EncodeError;
use crate::vocabulary::EntityKind;

/// Errors raised while loading or joining the source tables
///
/// Any of these aborts the whole load; no partial dataset is returned.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A source file could not be opened
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A declared column is absent from a header row
    #[error("{table} table has no '{column}' column")]
    MissingColumn { table: &'static str, column: String },

    /// An identifier does not match its declared format
    #[error("invalid {entity} id '{raw}' on line {line}")]
    InvalidId {
        entity: EntityKind,
        raw: String,
        line: u64,
    },

    /// A rating cell is not a number
    #[error("invalid rating '{raw}' on line {line}")]
    InvalidRating { raw: String, line: u64 },

    /// Two rows of an entity table share one id
    #[error("{entity} id {id} appears more than once")]
    DuplicateEntity { entity: EntityKind, id: i64 },

    /// An interaction references an id absent from its entity table
    #[error("interaction {interaction} references unknown {entity} id {id}")]
    MissingEntity {
        entity: EntityKind,
        id: i64,
        interaction: usize,
    },

    /// Test fraction outside [0, 1)
    #[error("test fraction {0} must be in [0, 1)")]
    InvalidSplit(f64),

    /// Encoding of an entity table failed
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
