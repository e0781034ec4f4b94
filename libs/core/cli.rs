//! Command line options

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recommender::RecommenderConfig;

/// Train a two-tower restaurant recommender and print the top picks for one user
#[derive(Debug, Parser)]
#[command(name = "restaurant-rec", version)]
pub struct Cli {
    /// Directory holding userprofile.csv, geoplaces2.csv, rating_final.csv and chefmozcuisine.csv
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// JSON run configuration; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub epochs: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Share of ratings held out for evaluation
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// User to recommend for
    #[arg(long, default_value = "U1077")]
    pub user: String,

    #[arg(long, default_value_t = 10)]
    pub top_k: usize,
}

impl Cli {
    /// Merge the config file (if any) with the flags
    pub fn resolve_config(&self) -> Result<RecommenderConfig> {
        let mut config = match &self.config {
            Some(path) => RecommenderConfig::from_json_file(path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => RecommenderConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.dataset.data_dir = data_dir.clone();
        }
        if let Some(epochs) = self.epochs {
            config.training.epochs = epochs;
        }
        if let Some(seed) = self.seed {
            config.training.seed = seed;
        }
        if let Some(test_fraction) = self.test_fraction {
            config.test_fraction = test_fraction;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
