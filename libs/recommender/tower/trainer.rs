//! Mini-batch training loop
//!
//! Minimizes the mean squared error between the model score and the scaled rating
//! with Adam. Rows are reshuffled every epoch from a seeded generator, so a run is
//! reproducible for a given [`TrainingConfig::seed`].

use burn::module::AutodiffModule;
use burn::nn::loss::{MseLoss, Reduction};
use burn::optim::{AdamConfig, GradientsParams, Optimizer};
use burn::tensor::backend::AutodiffBackend;
use burn::tensor::ElementConversion;
use ndarray::{ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use super::config::TrainingConfig;
use super::error::TowerError;
use super::network::{to_array, to_tensor, TwoTowerModel};

/// Loss history of one training run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Mean loss over each epoch, in order
    pub epoch_losses: Vec<f64>,
    /// Rows seen per epoch
    pub num_samples: usize,
}

impl TrainingReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }
}

/// Trains a [`TwoTowerModel`] on an autodiff backend
pub struct Trainer<B: AutodiffBackend> {
    config: TrainingConfig,
    device: B::Device,
}

impl<B: AutodiffBackend> Trainer<B> {
    pub fn new(config: TrainingConfig, device: B::Device) -> Result<Self, TowerError> {
        config.validate()?;
        Ok(Self { config, device })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Fit `model` on aligned rows of `users`, `items` and `targets`
    #[instrument(level = "info", skip_all, fields(rows = targets.len(), epochs = self.config.epochs))]
    pub fn fit(
        &self,
        mut model: TwoTowerModel<B>,
        users: ArrayView2<'_, f32>,
        items: ArrayView2<'_, f32>,
        targets: ArrayView1<'_, f32>,
    ) -> Result<(TwoTowerModel<B>, TrainingReport), TowerError> {
        check_rows(&users, &items, &targets)?;
        model.check_inputs(users.ncols(), items.ncols())?;

        let mut optim = AdamConfig::new().init::<B, TwoTowerModel<B>>();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut order: Vec<usize> = (0..targets.len()).collect();
        let mut epoch_losses = Vec::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            order.shuffle(&mut rng);
            let mut total = 0.0;

            for batch in order.chunks(self.config.batch_size) {
                let user_batch = to_tensor::<B, _>(&users.select(Axis(0), batch), &self.device);
                let item_batch = to_tensor::<B, _>(&items.select(Axis(0), batch), &self.device);
                let target_batch = to_tensor::<B, _>(
                    &targets.select(Axis(0), batch).insert_axis(Axis(1)),
                    &self.device,
                );

                let output = model.forward(user_batch, item_batch);
                let loss = MseLoss::new().forward(output, target_batch, Reduction::Mean);
                total += loss.clone().into_scalar().elem::<f64>() * batch.len() as f64;

                let grads = GradientsParams::from_grads(loss.backward(), &model);
                model = optim.step(self.config.learning_rate, model, grads);
            }

            let epoch_loss = total / targets.len() as f64;
            debug!(epoch = epoch + 1, loss = epoch_loss, "Epoch finished");
            epoch_losses.push(epoch_loss);
        }

        let report = TrainingReport {
            epoch_losses,
            num_samples: targets.len(),
        };
        info!(final_loss = report.final_loss(), "Training finished");

        Ok((model, report))
    }

    /// Mean squared error of `model` on held-out rows, in the scaled target space
    pub fn evaluate(
        &self,
        model: &TwoTowerModel<B::InnerBackend>,
        users: ArrayView2<'_, f32>,
        items: ArrayView2<'_, f32>,
        targets: ArrayView1<'_, f32>,
    ) -> Result<f64, TowerError> {
        check_rows(&users, &items, &targets)?;
        model.check_inputs(users.ncols(), items.ncols())?;

        let output = model.forward(
            to_tensor::<B::InnerBackend, _>(&users, &self.device),
            to_tensor::<B::InnerBackend, _>(&items, &self.device),
        );
        let scores = to_array(output)?;

        let sum: f64 = scores
            .column(0)
            .iter()
            .zip(targets.iter())
            .map(|(&score, &target)| (score as f64 - target as f64).powi(2))
            .sum();
        Ok(sum / targets.len() as f64)
    }

    /// Strip the autodiff wrapper from a trained model
    pub fn into_inference(model: TwoTowerModel<B>) -> TwoTowerModel<B::InnerBackend> {
        model.valid()
    }
}

fn check_rows<S1, S2, S3>(
    users: &ArrayBase<S1, Ix2>,
    items: &ArrayBase<S2, Ix2>,
    targets: &ArrayBase<S3, Ix1>,
) -> Result<(), TowerError>
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
    S3: Data<Elem = f32>,
{
    if targets.is_empty() {
        return Err(TowerError::EmptyBatch);
    }
    for (what, found) in [("user rows", users.nrows()), ("item rows", items.nrows())] {
        if found != targets.len() {
            return Err(TowerError::DimensionMismatch {
                what,
                expected: targets.len(),
                found,
            });
        }
    }
    Ok(())
}
