//! CSV readers for entity and interaction tables
//!
//! Cells are decoded lossily so latin-1 names in the restaurant table do not abort a load.
//! Only the declared columns are read; any other column is ignored.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use super::error::DatasetError;
use crate::constants::{RATING_COLUMN, RATING_ITEM_COLUMN, RATING_USER_COLUMN};
use crate::encoder::{EntityRecord, EntityTable, FeatureValue};
use crate::vocabulary::{FeatureSchema, Schemas};

/// One rating of a restaurant by a user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub user_id: i64,
    pub item_id: i64,
    pub rating: f32,
}

/// Open a source file, attaching the path to any failure
pub fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an entity table laid out by `schema`
pub fn read_entity_table<R: Read>(
    reader: R,
    schema: &FeatureSchema,
) -> Result<EntityTable, DatasetError> {
    let table = schema.kind().as_str();
    let mut csv = csv_reader(reader);
    let headers = csv.byte_headers()?.clone();

    let id_col = column_index(&headers, schema.id_column(), table)?;
    let feature_cols = schema
        .features()
        .iter()
        .map(|feature| column_index(&headers, feature, table))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::new();
    for row in csv.byte_records() {
        let row = row?;
        let raw_id = cell(&row, id_col).into_owned();
        let id = schema
            .id_format()
            .parse(&raw_id)
            .ok_or_else(|| DatasetError::InvalidId {
                entity: schema.kind(),
                raw: raw_id.clone(),
                line: line_of(&row),
            })?;
        let values = feature_cols
            .iter()
            .map(|&col| FeatureValue::parse(&cell(&row, col)))
            .collect();

        records.push(EntityRecord { raw_id, id, values });
    }

    Ok(EntityTable {
        kind: schema.kind(),
        id_column: schema.id_column().to_string(),
        id_format: schema.id_format(),
        features: schema.features().to_vec(),
        records,
    })
}

/// Read the interaction table, parsing ids with each entity's declared format
pub fn read_interactions<R: Read>(
    reader: R,
    schemas: &Schemas,
) -> Result<Vec<Interaction>, DatasetError> {
    let table = "rating";
    let mut csv = csv_reader(reader);
    let headers = csv.byte_headers()?.clone();

    let user_col = column_index(&headers, RATING_USER_COLUMN, table)?;
    let item_col = column_index(&headers, RATING_ITEM_COLUMN, table)?;
    let rating_col = column_index(&headers, RATING_COLUMN, table)?;

    let mut interactions = Vec::new();
    for row in csv.byte_records() {
        let row = row?;
        let line = line_of(&row);

        let parse_id = |col: usize, schema: &FeatureSchema| {
            let raw = cell(&row, col);
            schema
                .id_format()
                .parse(&raw)
                .ok_or_else(|| DatasetError::InvalidId {
                    entity: schema.kind(),
                    raw: raw.into_owned(),
                    line,
                })
        };
        let user_id = parse_id(user_col, &schemas.users)?;
        let item_id = parse_id(item_col, &schemas.restaurants)?;

        let raw_rating = cell(&row, rating_col);
        let rating = raw_rating
            .parse::<f32>()
            .ok()
            .filter(|r| r.is_finite())
            .ok_or_else(|| DatasetError::InvalidRating {
                raw: raw_rating.to_string(),
                line,
            })?;

        interactions.push(Interaction {
            user_id,
            item_id,
            rating,
        });
    }

    Ok(interactions)
}

pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader)
}

pub(crate) fn column_index(
    headers: &ByteRecord,
    column: &str,
    table: &'static str,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|header| String::from_utf8_lossy(header).trim() == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            table,
            column: column.to_string(),
        })
}

pub(crate) fn cell(row: &ByteRecord, col: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(row.get(col).unwrap_or_default())
}

pub(crate) fn line_of(row: &ByteRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = "\
userID,latitude,smoker,drink_level,dress_preference,ambience,transport,marital_status,hijos,interest,personality,activity,budget
U1002,22.1,false,abstemious,informal,family,on foot,single,independent,variety,hard-worker,student,low
U1001,22.2,?,social drinker,?,friends,public,married,kids,none,conformist,professional,high
";

    #[test]
    fn test_read_users_ignores_extra_columns() {
        let schemas = Schemas::builtin().unwrap();
        let table = read_entity_table(USERS.as_bytes(), &schemas.users).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].raw_id, "U1002");
        assert_eq!(table.records[0].id, 1002);
        assert_eq!(table.records[0].values.len(), 11);
        assert_eq!(table.records[1].values[0], FeatureValue::from("?"));
        assert_eq!(table.records[1].values[10], FeatureValue::from("high"));
    }

    #[test]
    fn test_missing_column() {
        let schemas = Schemas::builtin().unwrap();
        let err = read_entity_table("userID,smoker\nU1,true\n".as_bytes(), &schemas.users)
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { table: "user", ref column } if column == "drink_level"
        ));
    }

    #[test]
    fn test_read_interactions() {
        let schemas = Schemas::builtin().unwrap();
        let csv = "userID,placeID,rating,food_rating,service_rating\nU1077,135085,2,2,2\nU1077,132825,0,1,1\n";
        let interactions = read_interactions(csv.as_bytes(), &schemas).unwrap();
        assert_eq!(
            interactions[0],
            Interaction {
                user_id: 1077,
                item_id: 135085,
                rating: 2.0
            }
        );
        assert_eq!(interactions[1].rating, 0.0);
    }

    #[test]
    fn test_interaction_errors() {
        let schemas = Schemas::builtin().unwrap();

        let bad_id = "userID,placeID,rating\n1077,135085,2\n";
        assert!(matches!(
            read_interactions(bad_id.as_bytes(), &schemas),
            Err(DatasetError::InvalidId { line: 2, .. })
        ));

        let bad_rating = "userID,placeID,rating\nU1077,135085,great\n";
        assert!(matches!(
            read_interactions(bad_rating.as_bytes(), &schemas),
            Err(DatasetError::InvalidRating { .. })
        ));
    }
}
