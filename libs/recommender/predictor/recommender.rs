//! A trained model bundled with the scalers fitted in the same run

use burn::tensor::backend::Backend;
use ndarray::{Array2, ArrayBase, ArrayView1, Data, Ix2};
use tracing::{info, instrument};

use super::error::PredictError;
use super::predict;
use crate::config::RecommenderConfig;
use crate::dataset::{split_train_test, AssembledDataset};
use crate::encoder::EncodedMatrix;
use crate::scaler::Scaler;
use crate::tower::{
    build_model, build_towers, Device, InferenceBackend, TrainBackend, Trainer, TrainingReport,
    TwoTowerModel,
};
use crate::vocabulary::EntityKind;
use crate::RecommenderError;

/// One scored candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub item_id: i64,
    pub rating: f32,
}

/// Outcome of [`Recommender::fit`]
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    pub report: TrainingReport,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Held-out MSE in the scaled target space, `None` without a test split
    pub test_mse: Option<f64>,
    /// Held-out MSE on the original rating scale
    pub test_rating_mse: Option<f64>,
}

/// Fitted scoring model plus user, item and rating scalers
///
/// Read-only after fitting; every prediction reuses the scalers of the training run.
#[derive(Debug)]
pub struct Recommender {
    model: TwoTowerModel<InferenceBackend>,
    user_scaler: Scaler,
    item_scaler: Scaler,
    rating_scaler: Scaler,
    device: Device,
}

impl Recommender {
    pub fn new(
        model: TwoTowerModel<InferenceBackend>,
        user_scaler: Scaler,
        item_scaler: Scaler,
        rating_scaler: Scaler,
    ) -> Self {
        Self {
            model,
            user_scaler,
            item_scaler,
            rating_scaler,
            device: Device::default(),
        }
    }

    /// Split, scale, train and evaluate on `dataset`
    #[instrument(level = "info", skip_all, fields(interactions = dataset.len()))]
    pub fn fit(
        config: &RecommenderConfig,
        dataset: &AssembledDataset,
    ) -> Result<(Self, FitSummary), RecommenderError> {
        config.validate()?;
        let seed = config.training.seed;
        let (train, test) = split_train_test(dataset, config.test_fraction, seed)?;

        let user_scaler = Scaler::fit(config.user_scaler, &train.user_features)?;
        let item_scaler = Scaler::fit(config.item_scaler, &train.item_features)?;
        let rating_scaler = Scaler::fit(config.rating_scaler, &train.ratings_column())?;

        let device = Device::default();
        TrainBackend::seed(seed);
        let (user_tower, item_tower) = build_towers(&config.layer_sizes)?;
        let model = build_model::<TrainBackend>(
            &user_tower,
            &item_tower,
            dataset.num_user_features(),
            dataset.num_item_features(),
            &device,
        )?;

        let trainer = Trainer::<TrainBackend>::new(config.training.clone(), device)?;
        let targets = rating_scaler.transform(&train.ratings_column())?;
        let (model, report) = trainer.fit(
            model,
            user_scaler.transform(&train.user_features)?.view(),
            item_scaler.transform(&train.item_features)?.view(),
            targets.column(0),
        )?;

        let recommender = Self::new(
            Trainer::<TrainBackend>::into_inference(model),
            user_scaler,
            item_scaler,
            rating_scaler,
        );

        let (test_mse, test_rating_mse) = if test.is_empty() {
            (None, None)
        } else {
            let targets = recommender.rating_scaler.transform(&test.ratings_column())?;
            let scaled_mse = trainer.evaluate(
                &recommender.model,
                recommender.user_scaler.transform(&test.user_features)?.view(),
                recommender.item_scaler.transform(&test.item_features)?.view(),
                targets.column(0),
            )?;

            let predicted = recommender.predict(&test.user_features, &test.item_features)?;
            let rating_mse = predicted
                .iter()
                .zip(test.ratings.iter())
                .map(|(&p, &r)| (p as f64 - r as f64).powi(2))
                .sum::<f64>()
                / test.len() as f64;
            (Some(scaled_mse), Some(rating_mse))
        };

        info!(
            train_rows = train.len(),
            test_rows = test.len(),
            test_mse,
            test_rating_mse,
            "Recommender fitted"
        );

        let summary = FitSummary {
            report,
            train_rows: train.len(),
            test_rows: test.len(),
            test_mse,
            test_rating_mse,
        };
        Ok((recommender, summary))
    }

    /// Predict ratings for aligned rows of raw (unscaled) features
    pub fn predict<S1, S2>(
        &self,
        user_features: &ArrayBase<S1, Ix2>,
        item_features: &ArrayBase<S2, Ix2>,
    ) -> Result<Vec<f32>, PredictError>
    where
        S1: Data<Elem = f32>,
        S2: Data<Elem = f32>,
    {
        predict(
            &self.model,
            &self.user_scaler.transform(user_features)?,
            &self.item_scaler.transform(item_features)?,
            &self.rating_scaler,
            &self.device,
        )
    }

    /// Score one user against every candidate and keep the `k` best
    ///
    /// Sorted by predicted rating, highest first; equal ratings keep ascending id order.
    pub fn recommend(
        &self,
        user_features: ArrayView1<'_, f32>,
        candidates: &EncodedMatrix,
        k: usize,
    ) -> Result<Vec<Recommendation>, PredictError> {
        let ids = candidates
            .ids()
            .ok_or(PredictError::MissingIds(candidates.kind()))?;
        if k == 0 || ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = Array2::from_shape_fn((ids.len(), user_features.len()), |(_, j)| {
            user_features[j]
        });
        let ratings = self.predict(&users, &candidates.features())?;

        let mut ranked: Vec<Recommendation> = ids
            .iter()
            .zip(ratings)
            .map(|(&item_id, rating)| Recommendation { item_id, rating })
            .collect();
        rank_descending(&mut ranked);
        ranked.truncate(k);
        Ok(ranked)
    }

    /// Top `k` restaurants of the dataset's candidate pool for the user `user_id`
    pub fn recommend_for_user(
        &self,
        dataset: &AssembledDataset,
        user_id: i64,
        k: usize,
    ) -> Result<Vec<Recommendation>, PredictError> {
        let users = &dataset.user_vectors;
        let row = users
            .ids()
            .ok_or(PredictError::MissingIds(EntityKind::User))?
            .iter()
            .position(|&id| id == user_id)
            .ok_or(PredictError::UnknownEntity {
                entity: EntityKind::User,
                id: user_id,
            })?;

        self.recommend(users.features().row(row), &dataset.item_vectors, k)
    }

    pub fn model(&self) -> &TwoTowerModel<InferenceBackend> {
        &self.model
    }

    pub fn rating_scaler(&self) -> &Scaler {
        &self.rating_scaler
    }
}

/// Highest rating first, ties by ascending id, NaN ratings last
fn rank_descending(ranked: &mut [Recommendation]) {
    ranked.sort_by(|a, b| {
        a.rating
            .is_nan()
            .cmp(&b.rating.is_nan())
            .then(b.rating.total_cmp(&a.rating))
            .then(a.item_id.cmp(&b.item_id))
    });
}
