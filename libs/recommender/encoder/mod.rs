//! Feature encoder
//!
//! Turns an [`EntityTable`] into an [`EncodedMatrix`]:
//! - textual cells become their zero-based index in the feature's vocabulary
//! - numeric cells pass through unchanged
//! - the id column is copied through unencoded when `preserve_id` is set, dropped otherwise
//!
//! Encoding is pure: the same table and vocabulary store always give the same matrix.

pub mod error;
pub mod table;

use ndarray::Array2;
use tracing::debug;

use crate::vocabulary::VocabularyStore;

pub use error::EncodeError;
pub use table::{EncodedMatrix, EntityRecord, EntityTable, FeatureValue};

/// Encode every row of `table` with `vocabularies`
pub fn encode(
    table: &EntityTable,
    vocabularies: &VocabularyStore,
    preserve_id: bool,
) -> Result<EncodedMatrix, EncodeError> {
    let offset = usize::from(preserve_id);
    let width = table.features.len() + offset;
    let mut values = Array2::<f32>::zeros((table.records.len(), width));

    for (row, record) in table.records.iter().enumerate() {
        if record.values.len() != table.features.len() {
            return Err(EncodeError::RowWidth {
                id: record.id,
                expected: table.features.len(),
                found: record.values.len(),
            });
        }

        if preserve_id {
            values[[row, 0]] = record.id as f32;
        }

        for (col, (feature, cell)) in table.features.iter().zip(&record.values).enumerate() {
            values[[row, col + offset]] = encode_cell(feature, cell, vocabularies, record.id)?;
        }
    }

    let mut columns = Vec::with_capacity(width);
    if preserve_id {
        columns.push(table.id_column.clone());
    }
    columns.extend(table.features.iter().cloned());

    let ids = preserve_id.then(|| table.records.iter().map(|r| r.id).collect());

    debug!(
        entity = %table.kind,
        rows = table.records.len(),
        columns = width,
        "Encoded entity table"
    );

    Ok(EncodedMatrix::new(table.kind, columns, ids, values))
}

/// Encode a single cell
fn encode_cell(
    feature: &str,
    cell: &FeatureValue,
    vocabularies: &VocabularyStore,
    id: i64,
) -> Result<f32, EncodeError> {
    match cell {
        FeatureValue::Number(number) => Ok(*number),
        FeatureValue::Text(text) => {
            let vocabulary = vocabularies
                .get(feature)
                .ok_or_else(|| EncodeError::UnknownFeature {
                    feature: feature.to_string(),
                    id,
                })?;
            vocabulary
                .index_of(text)
                .map(|index| index as f32)
                .ok_or_else(|| EncodeError::UnknownCategory {
                    feature: feature.to_string(),
                    value: text.clone(),
                    id,
                })
        }
    }
}
