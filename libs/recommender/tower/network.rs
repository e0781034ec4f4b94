//! Tower networks and the scoring graph
//!
//! ```text
//! user features [n, d_u] -> user tower -> vu [n, k] -> l2 -> ┐
//!                                                             dot -> score [n, 1]
//! item features [n, d_i] -> item tower -> vr [n, k] -> l2 -> ┘
//! ```

use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::{activation, Tensor, TensorData};
use ndarray::{Array2, ArrayBase, Data, Ix2};

use super::error::TowerError;
use crate::constants::L2_EPSILON;

/// Feed-forward stack: ReLU after every layer except the last, which stays linear
#[derive(Module, Debug)]
pub struct Tower<B: Backend> {
    layers: Vec<Linear<B>>,
}

impl<B: Backend> Tower<B> {
    pub(crate) fn new(input_dim: usize, layer_sizes: &[usize], device: &B::Device) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut d_input = input_dim;
        for &d_output in layer_sizes {
            layers.push(LinearConfig::new(d_input, d_output).init(device));
            d_input = d_output;
        }
        Self { layers }
    }

    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let last = self.layers.len().saturating_sub(1);
        self.layers
            .iter()
            .enumerate()
            .fold(input, |x, (i, layer)| {
                let x = layer.forward(x);
                if i < last {
                    activation::relu(x)
                } else {
                    x
                }
            })
    }

    /// Number of input features
    pub fn input_dim(&self) -> usize {
        self.layers
            .first()
            .map(|layer| layer.weight.val().dims()[0])
            .unwrap_or_default()
    }

    /// Embedding width
    pub fn output_dim(&self) -> usize {
        self.layers
            .last()
            .map(|layer| layer.weight.val().dims()[1])
            .unwrap_or_default()
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}

/// Two independently parameterized towers scored by cosine similarity
#[derive(Module, Debug)]
pub struct TwoTowerModel<B: Backend> {
    user_tower: Tower<B>,
    item_tower: Tower<B>,
}

impl<B: Backend> TwoTowerModel<B> {
    pub(crate) fn new(user_tower: Tower<B>, item_tower: Tower<B>) -> Self {
        Self {
            user_tower,
            item_tower,
        }
    }

    /// Unit-length user embeddings `[n, k]`
    pub fn embed_users(&self, users: Tensor<B, 2>) -> Tensor<B, 2> {
        l2_normalize(self.user_tower.forward(users))
    }

    /// Unit-length item embeddings `[n, k]`
    pub fn embed_items(&self, items: Tensor<B, 2>) -> Tensor<B, 2> {
        l2_normalize(self.item_tower.forward(items))
    }

    /// Row-wise dot product of the normalized embeddings, shape `[n, 1]`, values in `[-1, 1]`
    pub fn forward(&self, users: Tensor<B, 2>, items: Tensor<B, 2>) -> Tensor<B, 2> {
        let vu = self.embed_users(users);
        let vr = self.embed_items(items);
        (vu * vr).sum_dim(1)
    }

    pub fn num_user_features(&self) -> usize {
        self.user_tower.input_dim()
    }

    pub fn num_item_features(&self) -> usize {
        self.item_tower.input_dim()
    }

    pub fn embedding_dim(&self) -> usize {
        self.user_tower.output_dim()
    }

    pub fn user_tower(&self) -> &Tower<B> {
        &self.user_tower
    }

    pub fn item_tower(&self) -> &Tower<B> {
        &self.item_tower
    }

    /// Fail unless the matrices have the widths the towers were built for
    pub fn check_inputs(&self, user_cols: usize, item_cols: usize) -> Result<(), TowerError> {
        if user_cols != self.num_user_features() {
            return Err(TowerError::DimensionMismatch {
                what: "user feature width",
                expected: self.num_user_features(),
                found: user_cols,
            });
        }
        if item_cols != self.num_item_features() {
            return Err(TowerError::DimensionMismatch {
                what: "item feature width",
                expected: self.num_item_features(),
                found: item_cols,
            });
        }
        Ok(())
    }
}

/// Scale each row to unit L2 norm
///
/// Rows whose squared norm is below `L2_EPSILON` are divided by `sqrt(L2_EPSILON)` instead.
pub fn l2_normalize<B: Backend>(x: Tensor<B, 2>) -> Tensor<B, 2> {
    let norm = (x.clone() * x.clone())
        .sum_dim(1)
        .clamp_min(L2_EPSILON)
        .sqrt();
    x / norm
}

/// Copy a host matrix into a `[rows, cols]` tensor
pub fn to_tensor<B: Backend, S: Data<Elem = f32>>(
    matrix: &ArrayBase<S, Ix2>,
    device: &B::Device,
) -> Tensor<B, 2> {
    let shape = [matrix.nrows(), matrix.ncols()];
    let values: Vec<f32> = matrix.iter().copied().collect();
    Tensor::from_data(TensorData::new(values, shape), device)
}

/// Copy a 2-d tensor back into a host matrix
pub fn to_array<B: Backend>(tensor: Tensor<B, 2>) -> Result<Array2<f32>, TowerError> {
    let [rows, cols] = tensor.dims();
    let values = tensor
        .into_data()
        .to_vec::<f32>()
        .map_err(|err| TowerError::TensorData(format!("{err:?}")))?;
    Array2::from_shape_vec((rows, cols), values)
        .map_err(|err| TowerError::TensorData(err.to_string()))
}
