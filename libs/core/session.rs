//! One trained recommender with everything needed to present its picks

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use recommender::{
    AssembledDataset, DatasetAssembler, FitSummary, Recommender, RecommenderConfig,
    RestaurantCatalog, Schemas,
};

/// A recommended restaurant ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRestaurant {
    pub place_id: i64,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
}

/// Loaded dataset, fitted recommender and presentation catalog of one run
pub struct Session {
    schemas: Arc<Schemas>,
    dataset: AssembledDataset,
    recommender: Recommender,
    summary: FitSummary,
    catalog: RestaurantCatalog,
}

impl Session {
    /// Load the tables named by `config` and train on them
    pub fn train(config: &RecommenderConfig) -> Result<Self> {
        let schemas = Arc::new(Schemas::builtin().context("building feature schemas")?);
        let assembler = DatasetAssembler::new(schemas.clone(), config.dataset.clone());
        let dataset = assembler.load().with_context(|| {
            format!("loading dataset from {}", config.dataset.data_dir().display())
        })?;

        let (recommender, summary) =
            Recommender::fit(config, &dataset).context("training recommender")?;
        let catalog =
            RestaurantCatalog::load(&config.dataset).context("loading restaurant catalog")?;

        info!(
            users = dataset.num_users(),
            restaurants = dataset.num_restaurants(),
            "Session ready"
        );

        Ok(Self {
            schemas,
            dataset,
            recommender,
            summary,
            catalog,
        })
    }

    /// Top `k` restaurants for a user given by raw id (e.g. `U1077`)
    pub fn top_k(&self, user: &str, k: usize) -> Result<Vec<RankedRestaurant>> {
        let user_id = self
            .schemas
            .users
            .id_format()
            .parse(user)
            .ok_or_else(|| anyhow!("'{user}' is not a valid user id"))?;

        let ranked = self
            .recommender
            .recommend_for_user(&self.dataset, user_id, k)
            .with_context(|| format!("recommending for {user}"))?;

        let ids: Vec<i64> = ranked.iter().map(|r| r.item_id).collect();
        let (names, cuisines) = self.catalog.lookup_names_and_cuisines(&ids);

        Ok(ranked
            .into_iter()
            .zip(names.into_iter().zip(cuisines))
            .map(|(r, (name, cuisine))| RankedRestaurant {
                place_id: r.item_id,
                name,
                cuisine,
                rating: r.rating,
            })
            .collect())
    }

    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    pub fn dataset(&self) -> &AssembledDataset {
        &self.dataset
    }
}

/// Render ranked restaurants as an aligned text table
pub fn render_table(rows: &[RankedRestaurant]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:>4}  {:>8}  {:>6}  {:<name_width$}  cuisine\n",
        "rank", "placeID", "rating", "name"
    );
    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>8}  {:>6.2}  {:<name_width$}  {}\n",
            rank + 1,
            row.place_id,
            row.rating,
            row.name,
            row.cuisine
        ));
    }
    out
}
