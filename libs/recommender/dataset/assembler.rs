//! Dataset assembler
//!
//! Joins interactions with the encoded entity matrices:
//!
//! 1. **Sort**: entity tables are sorted ascending by their original identifier, which
//!    fixes the row order of the encoded matrices and of the candidate pools
//! 2. **Encode**: both tables go through the encoder with the id column preserved
//! 3. **Index**: an id → row map is built once per entity type; repeated ids are rejected
//! 4. **Join**: every interaction resolves its user and restaurant rows in O(1)
//!    and appends `(user_vector, item_vector, rating)` to the training arrays

use std::collections::HashMap;
use std::sync::Arc;

use ndarray::{s, Array1, Array2, ArrayView2, Axis};
use tracing::{debug, info, instrument};

use super::config::DatasetConfig;
use super::error::DatasetError;
use super::reader::{open, read_entity_table, read_interactions, Interaction};
use crate::encoder::{encode, EncodedMatrix, EntityTable};
use crate::vocabulary::{EntityKind, Schemas};

/// Aligned training triples plus the full candidate pools
///
/// `user_train`, `item_train` and `y_train` have one row per interaction, in interaction
/// order. `user_vectors` / `item_vectors` hold every entity in sorted id order.
/// Rows of all four matrices keep the id as column 0.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDataset {
    pub user_train: Array2<f32>,
    pub item_train: Array2<f32>,
    pub y_train: Array1<f32>,
    pub user_vectors: EncodedMatrix,
    pub item_vectors: EncodedMatrix,
}

impl AssembledDataset {
    /// Number of interactions
    pub fn len(&self) -> usize {
        self.y_train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_train.is_empty()
    }

    /// User training rows without the id column
    pub fn user_features(&self) -> ArrayView2<'_, f32> {
        self.user_train.slice(s![.., 1..])
    }

    /// Restaurant training rows without the id column
    pub fn item_features(&self) -> ArrayView2<'_, f32> {
        self.item_train.slice(s![.., 1..])
    }

    pub fn num_user_features(&self) -> usize {
        self.user_vectors.num_features()
    }

    pub fn num_item_features(&self) -> usize {
        self.item_vectors.num_features()
    }

    pub fn num_users(&self) -> usize {
        self.user_vectors.nrows()
    }

    pub fn num_restaurants(&self) -> usize {
        self.item_vectors.nrows()
    }
}

/// Map from entity id to its row in an encoded matrix
#[derive(Debug, Clone)]
pub struct RowIndex {
    kind: EntityKind,
    rows: HashMap<i64, usize>,
}

impl RowIndex {
    /// Index ids in row order, rejecting any id seen twice
    pub fn build(kind: EntityKind, ids: &[i64]) -> Result<Self, DatasetError> {
        let mut rows = HashMap::with_capacity(ids.len());
        for (row, &id) in ids.iter().enumerate() {
            if rows.insert(id, row).is_some() {
                return Err(DatasetError::DuplicateEntity { entity: kind, id });
            }
        }
        Ok(Self { kind, rows })
    }

    /// Row of `id`, failing with `MissingEntity` for interaction `interaction`
    pub fn resolve(&self, id: i64, interaction: usize) -> Result<usize, DatasetError> {
        self.rows
            .get(&id)
            .copied()
            .ok_or(DatasetError::MissingEntity {
                entity: self.kind,
                id,
                interaction,
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads the source tables and assembles the training set
pub struct DatasetAssembler {
    schemas: Arc<Schemas>,
    config: DatasetConfig,
}

impl DatasetAssembler {
    pub fn new(schemas: Arc<Schemas>, config: DatasetConfig) -> Self {
        Self { schemas, config }
    }

    /// Read every table from the configured directory and assemble them
    #[instrument(level = "info", skip(self), fields(data_dir = %self.config.data_dir().display()))]
    pub fn load(&self) -> Result<AssembledDataset, DatasetError> {
        let users = read_entity_table(open(&self.config.users_path())?, &self.schemas.users)?;
        let restaurants = read_entity_table(
            open(&self.config.restaurants_path())?,
            &self.schemas.restaurants,
        )?;
        let interactions = read_interactions(open(&self.config.ratings_path())?, &self.schemas)?;

        info!(
            users = users.len(),
            restaurants = restaurants.len(),
            interactions = interactions.len(),
            "Source tables loaded"
        );

        self.assemble(users, restaurants, &interactions)
    }

    /// Sort, encode and join already parsed tables
    pub fn assemble(
        &self,
        mut users: EntityTable,
        mut restaurants: EntityTable,
        interactions: &[Interaction],
    ) -> Result<AssembledDataset, DatasetError> {
        users.sort_by_raw_id();
        restaurants.sort_by_raw_id();

        let user_vectors = encode(&users, self.schemas.users.vocabularies(), true)?;
        let item_vectors = encode(&restaurants, self.schemas.restaurants.vocabularies(), true)?;

        let user_index = RowIndex::build(EntityKind::User, user_vectors.ids().unwrap_or(&[]))?;
        let item_index =
            RowIndex::build(EntityKind::Restaurant, item_vectors.ids().unwrap_or(&[]))?;

        let mut joined = Vec::with_capacity(interactions.len());
        for (k, interaction) in interactions.iter().enumerate() {
            joined.push((
                user_index.resolve(interaction.user_id, k)?,
                item_index.resolve(interaction.item_id, k)?,
                interaction.rating,
            ));
        }
        // Group triples by user in raw id order; file order is kept within a user.
        joined.sort_by_key(|&(user_row, _, _)| user_row);

        let user_rows: Vec<usize> = joined.iter().map(|&(row, _, _)| row).collect();
        let item_rows: Vec<usize> = joined.iter().map(|&(_, row, _)| row).collect();
        let ratings: Vec<f32> = joined.iter().map(|&(_, _, rating)| rating).collect();

        let dataset = AssembledDataset {
            user_train: user_vectors.values().select(Axis(0), &user_rows),
            item_train: item_vectors.values().select(Axis(0), &item_rows),
            y_train: Array1::from(ratings),
            user_vectors,
            item_vectors,
        };

        debug!(
            interactions = dataset.len(),
            user_features = dataset.num_user_features(),
            item_features = dataset.num_item_features(),
            "Training triples assembled"
        );

        Ok(dataset)
    }

    pub fn schemas(&self) -> &Schemas {
        &self.schemas
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_index() {
        let index = RowIndex::build(EntityKind::User, &[1003, 1001, 1002]).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.resolve(1001, 0).unwrap(), 1);

        assert!(matches!(
            index.resolve(9999, 4),
            Err(DatasetError::MissingEntity {
                entity: EntityKind::User,
                id: 9999,
                interaction: 4
            })
        ));
    }

    #[test]
    fn test_row_index_rejects_duplicates() {
        let err = RowIndex::build(EntityKind::Restaurant, &[5, 6, 5]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DuplicateEntity {
                entity: EntityKind::Restaurant,
                id: 5
            }
        ));
    }
}
