//! PyO3 wrappers around a training session

use std::path::PathBuf;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use recommender::RecommenderConfig;

use crate::session::{RankedRestaurant, Session};

fn to_py_err(error: anyhow::Error) -> PyErr {
    PyValueError::new_err(format!("{error:#}"))
}

/// One recommended restaurant
#[pyclass(frozen, get_all)]
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub place_id: i64,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
}

impl From<RankedRestaurant> for Recommendation {
    fn from(row: RankedRestaurant) -> Self {
        Self {
            place_id: row.place_id,
            name: row.name,
            cuisine: row.cuisine,
            rating: row.rating,
        }
    }
}

#[pymethods]
impl Recommendation {
    fn __repr__(&self) -> String {
        format!(
            "Recommendation(place_id={}, name='{}', cuisine='{}', rating={:.3})",
            self.place_id, self.name, self.cuisine, self.rating
        )
    }
}

/// Recommender trained on a data directory at construction
#[pyclass(unsendable)]
pub struct Recommender {
    session: Session,
}

#[pymethods]
impl Recommender {
    #[new]
    #[pyo3(signature = (data_dir, config_path=None, epochs=None, seed=None))]
    pub fn new(
        data_dir: PathBuf,
        config_path: Option<PathBuf>,
        epochs: Option<usize>,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let mut config = match config_path {
            Some(path) => RecommenderConfig::from_json_file(&path)
                .map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => RecommenderConfig::default(),
        };
        config.dataset.data_dir = data_dir;
        if let Some(epochs) = epochs {
            config.training.epochs = epochs;
        }
        if let Some(seed) = seed {
            config.training.seed = seed;
        }

        let session = Session::train(&config).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Top `k` restaurants for a raw user id such as `"U1077"`
    #[pyo3(signature = (user, k=10))]
    pub fn recommend(&self, user: &str, k: usize) -> PyResult<Vec<Recommendation>> {
        let rows = self.session.top_k(user, k).map_err(to_py_err)?;
        Ok(rows.into_iter().map(Recommendation::from).collect())
    }

    #[getter]
    pub fn epoch_losses(&self) -> Vec<f64> {
        self.session.summary().report.epoch_losses.clone()
    }

    #[getter]
    pub fn test_mse(&self) -> Option<f64> {
        self.session.summary().test_mse
    }

    #[getter]
    pub fn test_rating_mse(&self) -> Option<f64> {
        self.session.summary().test_rating_mse
    }

    #[getter]
    pub fn num_users(&self) -> usize {
        self.session.dataset().num_users()
    }

    #[getter]
    pub fn num_restaurants(&self) -> usize {
        self.session.dataset().num_restaurants()
    }
}
