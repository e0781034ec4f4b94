//! Rating prediction
//!
//! [`predict`] scores aligned user/item rows with a trained model and maps the scores
//! back to the rating scale. [`Recommender`] bundles a model with the scalers fitted in
//! the same training run and adds top-k recommendation over a candidate pool.

pub mod error;
pub mod recommender;

use burn::tensor::backend::Backend;
use ndarray::{ArrayBase, Data, Ix2};
use tracing::debug;

use crate::scaler::Scaler;
use crate::tower::{to_array, to_tensor, TwoTowerModel};

pub use error::PredictError;
pub use recommender::{FitSummary, Recommendation, Recommender};

/// Predict one rating per row pair, in input order
///
/// Row `i` of `user_matrix` and `item_matrix` must describe the same candidate pair.
/// Both matrices are expected in the scaled feature space the model was trained on.
pub fn predict<B, S1, S2>(
    model: &TwoTowerModel<B>,
    user_matrix: &ArrayBase<S1, Ix2>,
    item_matrix: &ArrayBase<S2, Ix2>,
    rating_scaler: &Scaler,
    device: &B::Device,
) -> Result<Vec<f32>, PredictError>
where
    B: Backend,
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    if user_matrix.nrows() != item_matrix.nrows() {
        return Err(PredictError::RowMismatch {
            users: user_matrix.nrows(),
            items: item_matrix.nrows(),
        });
    }
    model.check_inputs(user_matrix.ncols(), item_matrix.ncols())?;
    if user_matrix.nrows() == 0 {
        return Ok(Vec::new());
    }

    let scores = model.forward(
        to_tensor::<B, _>(user_matrix, device),
        to_tensor::<B, _>(item_matrix, device),
    );
    let ratings = rating_scaler.inverse_transform(&to_array(scores)?)?;

    debug!(rows = ratings.nrows(), "Ratings predicted");
    Ok(ratings.column(0).to_vec())
}
