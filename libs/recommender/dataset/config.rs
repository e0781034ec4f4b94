//! Configuration for locating the dataset files

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::files;

/// Location of the source tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding every source file
    pub data_dir: PathBuf,

    /// User profiles (`userID` first)
    pub users_file: String,

    /// Restaurant attributes (`placeID` first); also holds display names
    pub restaurants_file: String,

    /// Interactions: `userID, placeID, rating`
    pub ratings_file: String,

    /// Restaurant cuisines, one row per (placeID, cuisine)
    pub cuisines_file: String,
}

impl DatasetConfig {
    /// Default file names inside `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn restaurants_path(&self) -> PathBuf {
        self.data_dir.join(&self.restaurants_file)
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join(&self.ratings_file)
    }

    pub fn cuisines_path(&self) -> PathBuf {
        self.data_dir.join(&self.cuisines_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            users_file: files::USERS.to_string(),
            restaurants_file: files::RESTAURANTS.to_string(),
            ratings_file: files::RATINGS.to_string(),
            cuisines_file: files::CUISINES.to_string(),
        }
    }
}
