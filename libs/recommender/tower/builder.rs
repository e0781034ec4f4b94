//! Model construction

use burn::module::Module;
use burn::tensor::backend::Backend;
use tracing::debug;

use super::config::TowerConfig;
use super::error::TowerError;
use super::network::TwoTowerModel;

/// Two tower architectures with identical layer widths
///
/// Each tower gets its own weights when the model is built, so users and items
/// never share parameters even though the shapes match.
pub fn build_towers(layer_sizes: &[usize]) -> Result<(TowerConfig, TowerConfig), TowerError> {
    let config = TowerConfig::new(layer_sizes.to_vec());
    config.validate()?;
    Ok((config.clone(), config))
}

/// Wire both towers into a scoring model
///
/// The user tower reads `num_user_features` columns, the item tower `num_item_features`.
/// Both must end in the same embedding width.
pub fn build_model<B: Backend>(
    user_tower: &TowerConfig,
    item_tower: &TowerConfig,
    num_user_features: usize,
    num_item_features: usize,
    device: &B::Device,
) -> Result<TwoTowerModel<B>, TowerError> {
    if user_tower.embedding_dim() != item_tower.embedding_dim() {
        return Err(TowerError::DimensionMismatch {
            what: "item embedding width",
            expected: user_tower.embedding_dim(),
            found: item_tower.embedding_dim(),
        });
    }

    let model = TwoTowerModel::new(
        user_tower.init(num_user_features, device)?,
        item_tower.init(num_item_features, device)?,
    );

    debug!(
        num_user_features,
        num_item_features,
        embedding_dim = model.embedding_dim(),
        params = model.num_params(),
        "Two-tower model built"
    );

    Ok(model)
}
