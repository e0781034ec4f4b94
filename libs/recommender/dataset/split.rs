//! Shuffled train/test split of the assembled triples

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::assembler::AssembledDataset;
use super::error::DatasetError;

/// Aligned feature matrices (id column removed) and ratings
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSplit {
    pub user_features: Array2<f32>,
    pub item_features: Array2<f32>,
    pub ratings: Array1<f32>,
}

impl TrainingSplit {
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Ratings as a single-column matrix, the shape scalers expect
    pub fn ratings_column(&self) -> Array2<f32> {
        self.ratings.clone().insert_axis(Axis(1))
    }

    fn select(dataset: &AssembledDataset, rows: &[usize]) -> Self {
        Self {
            user_features: dataset.user_features().select(Axis(0), rows),
            item_features: dataset.item_features().select(Axis(0), rows),
            ratings: dataset.y_train.select(Axis(0), rows),
        }
    }
}

/// Shuffle interactions with `seed` and hold out `ceil(n * test_fraction)` of them
///
/// Returns `(train, test)`. A fraction of 0 leaves the test split empty.
pub fn split_train_test(
    dataset: &AssembledDataset,
    test_fraction: f64,
    seed: u64,
) -> Result<(TrainingSplit, TrainingSplit), DatasetError> {
    if !(0.0..1.0).contains(&test_fraction) {
        return Err(DatasetError::InvalidSplit(test_fraction));
    }

    let mut rows: Vec<usize> = (0..dataset.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let test_len = ((dataset.len() as f64) * test_fraction).ceil() as usize;
    let (test_rows, train_rows) = rows.split_at(test_len.min(rows.len()));

    Ok((
        TrainingSplit::select(dataset, train_rows),
        TrainingSplit::select(dataset, test_rows),
    ))
}
