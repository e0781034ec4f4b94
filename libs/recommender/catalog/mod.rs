//! Restaurant names and cuisines for presenting results
//!
//! Not used by training or prediction. A miss resolves to [`UNKNOWN_CATEGORY`] per id
//! and never aborts a batch lookup.

pub mod error;

use std::collections::HashMap;
use std::io::Read;

use tracing::{debug, warn};

use crate::constants::{
    CUISINE_COLUMN, RATING_ITEM_COLUMN, RESTAURANT_NAME_COLUMN, UNKNOWN_CATEGORY,
};
use crate::dataset::reader::{cell, column_index, csv_reader, line_of, open};
use crate::dataset::{DatasetConfig, DatasetError};
use crate::vocabulary::{EntityKind, IdFormat};

pub use error::LookupError;

/// id → display name and id → cuisine tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantCatalog {
    names: HashMap<i64, String>,
    cuisines: HashMap<i64, Vec<String>>,
}

impl RestaurantCatalog {
    /// Read the restaurant table and the cuisine table from `config`'s directory
    pub fn load(config: &DatasetConfig) -> Result<Self, LookupError> {
        Self::from_readers(
            open(&config.restaurants_path())?,
            open(&config.cuisines_path())?,
        )
    }

    /// Build from a restaurant table (`placeID`, `name`) and a cuisine table (`placeID`, `Rcuisine`)
    pub fn from_readers<R1: Read, R2: Read>(
        restaurants: R1,
        cuisines: R2,
    ) -> Result<Self, LookupError> {
        let mut names = HashMap::new();
        for (id, name) in read_pairs(restaurants, "restaurant", RESTAURANT_NAME_COLUMN)? {
            names.insert(id, name);
        }

        let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
        for (id, cuisine) in read_pairs(cuisines, "cuisine", CUISINE_COLUMN)? {
            tags.entry(id).or_default().push(cuisine);
        }

        debug!(
            restaurants = names.len(),
            with_cuisine = tags.len(),
            "Restaurant catalog loaded"
        );

        Ok(Self {
            names,
            cuisines: tags,
        })
    }

    /// Display name of a restaurant
    pub fn name(&self, id: i64) -> Result<&str, LookupError> {
        self.names
            .get(&id)
            .map(String::as_str)
            .ok_or(LookupError::NotFound(id))
    }

    /// Cuisine tags of a known restaurant, `None` when none are recorded
    pub fn cuisines(&self, id: i64) -> Result<Option<&[String]>, LookupError> {
        if !self.names.contains_key(&id) {
            return Err(LookupError::NotFound(id));
        }
        Ok(self.cuisines.get(&id).map(Vec::as_slice))
    }

    /// Names and comma-joined cuisines for `ids`, in order
    ///
    /// An id with no cuisine yields `"?"` as its cuisine; an unknown id yields `"?"` for both.
    pub fn lookup_names_and_cuisines(&self, ids: &[i64]) -> (Vec<String>, Vec<String>) {
        ids.iter()
            .map(|&id| match (self.name(id), self.cuisines(id)) {
                (Ok(name), Ok(cuisines)) => (
                    name.to_string(),
                    cuisines
                        .map(|tags| tags.join(", "))
                        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
                ),
                (Err(err), _) | (_, Err(err)) => {
                    warn!(id, error = %err, "Restaurant lookup miss");
                    (UNKNOWN_CATEGORY.to_string(), UNKNOWN_CATEGORY.to_string())
                }
            })
            .unzip()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `(placeID, value)` rows of a table
fn read_pairs<R: Read>(
    reader: R,
    table: &'static str,
    value_column: &str,
) -> Result<Vec<(i64, String)>, DatasetError> {
    let mut csv = csv_reader(reader);
    let headers = csv.byte_headers()?.clone();
    let id_col = column_index(&headers, RATING_ITEM_COLUMN, table)?;
    let value_col = column_index(&headers, value_column, table)?;

    let mut pairs = Vec::new();
    for row in csv.byte_records() {
        let row = row?;
        let raw = cell(&row, id_col);
        let id = IdFormat::Numeric
            .parse(&raw)
            .ok_or_else(|| DatasetError::InvalidId {
                entity: EntityKind::Restaurant,
                raw: raw.to_string(),
                line: line_of(&row),
            })?;
        pairs.push((id, cell(&row, value_col).into_owned()));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTAURANTS: &str = "placeID,name,price\n132825,puesto de tacos,low\n135085,Tortas Locas Hipocampo,medium\n132951,VIPS,high\n";
    const CUISINES: &str = "placeID,Rcuisine\n132825,Mexican\n135085,Fast_Food\n135085,Mexican\n";

    fn catalog() -> RestaurantCatalog {
        RestaurantCatalog::from_readers(RESTAURANTS.as_bytes(), CUISINES.as_bytes()).unwrap()
    }

    #[test]
    fn test_lookup_joins_cuisines() {
        let (names, cuisines) = catalog().lookup_names_and_cuisines(&[135085, 132825]);
        assert_eq!(names, vec!["Tortas Locas Hipocampo", "puesto de tacos"]);
        assert_eq!(cuisines, vec!["Fast_Food, Mexican", "Mexican"]);
    }

    #[test]
    fn test_missing_cuisine_and_unknown_id() {
        let catalog = catalog();
        assert_eq!(catalog.cuisines(132951).unwrap(), None);
        assert!(matches!(catalog.name(1), Err(LookupError::NotFound(1))));

        let (names, cuisines) = catalog.lookup_names_and_cuisines(&[132951, 1, 132825]);
        assert_eq!(names, vec!["VIPS", "?", "puesto de tacos"]);
        assert_eq!(cuisines, vec!["?", "?", "Mexican"]);
    }

    #[test]
    fn test_bad_table() {
        let err = RestaurantCatalog::from_readers("placeID\n1\n".as_bytes(), CUISINES.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::Source(DatasetError::MissingColumn { table: "restaurant", .. })
        ));
    }
}
