//! Per-entity feature schemas
//!
//! A schema fixes the id column, how raw ids are parsed, the declared feature order
//! (the column order of every encoded matrix) and the vocabularies used to encode them.

use std::fmt;

use super::error::VocabularyError;
use super::store::VocabularyStore;
use crate::constants::{
    RESTAURANT_FEATURE_OPTIONS, RESTAURANT_FEATURES, USER_FEATURE_OPTIONS, USER_FEATURES,
};

/// Entity type described by a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Restaurant,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Restaurant => "restaurant",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the raw identifiers of an entity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    /// One alphabetic prefix character followed by digits, e.g. `U1077`
    Prefixed,
    /// Plain digits, e.g. `132825`
    Numeric,
}

impl IdFormat {
    /// Parse a raw id into its integer form, `None` if it does not match the format
    pub fn parse(&self, raw: &str) -> Option<i64> {
        let raw = raw.trim();
        let digits = match self {
            IdFormat::Prefixed => {
                let mut chars = raw.chars();
                if !chars.next()?.is_ascii_alphabetic() {
                    return None;
                }
                chars.as_str()
            }
            IdFormat::Numeric => raw,
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// Declared layout of one entity table
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    kind: EntityKind,
    id_column: String,
    id_format: IdFormat,
    features: Vec<String>,
    vocabularies: VocabularyStore,
}

impl FeatureSchema {
    /// Build a schema from `columns` (id column first) and the vocabulary options
    ///
    /// Every non-id column must have a vocabulary; extra vocabularies are allowed.
    pub fn new(
        kind: EntityKind,
        columns: &[&str],
        id_format: IdFormat,
        options: &[(&str, &[&str])],
    ) -> Result<Self, VocabularyError> {
        let (id_column, features) = match columns.split_first() {
            Some((id, features)) if !features.is_empty() => (id, features),
            _ => {
                return Err(VocabularyError::EmptySchema {
                    entity: kind.as_str(),
                })
            }
        };

        let vocabularies = VocabularyStore::from_options(options)?;
        if let Some(missing) = features.iter().find(|f| !vocabularies.contains(f)) {
            return Err(VocabularyError::UndeclaredVocabulary {
                feature: missing.to_string(),
            });
        }

        Ok(Self {
            kind,
            id_column: id_column.to_string(),
            id_format,
            features: features.iter().map(|f| f.to_string()).collect(),
            vocabularies,
        })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn id_format(&self) -> IdFormat {
        self.id_format
    }

    /// Feature names in declared order (id column excluded)
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    pub fn vocabularies(&self) -> &VocabularyStore {
        &self.vocabularies
    }
}

/// The immutable configuration of both entity schemas
#[derive(Debug, Clone, PartialEq)]
pub struct Schemas {
    pub users: FeatureSchema,
    pub restaurants: FeatureSchema,
}

impl Schemas {
    /// Schemas for the restaurant-consumer dataset
    pub fn builtin() -> Result<Self, VocabularyError> {
        Ok(Self {
            users: FeatureSchema::new(
                EntityKind::User,
                USER_FEATURES,
                IdFormat::Prefixed,
                USER_FEATURE_OPTIONS,
            )?,
            restaurants: FeatureSchema::new(
                EntityKind::Restaurant,
                RESTAURANT_FEATURES,
                IdFormat::Numeric,
                RESTAURANT_FEATURE_OPTIONS,
            )?,
        })
    }

    pub fn get(&self, kind: EntityKind) -> &FeatureSchema {
        match kind {
            EntityKind::User => &self.users,
            EntityKind::Restaurant => &self.restaurants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_ids() {
        assert_eq!(IdFormat::Prefixed.parse("U1077"), Some(1077));
        assert_eq!(IdFormat::Prefixed.parse(" U1001 "), Some(1001));
        assert_eq!(IdFormat::Prefixed.parse("1077"), None);
        assert_eq!(IdFormat::Prefixed.parse("U"), None);
        assert_eq!(IdFormat::Prefixed.parse("UX10"), None);
        assert_eq!(IdFormat::Prefixed.parse("U-10"), None);
        assert_eq!(IdFormat::Prefixed.parse(""), None);
    }

    #[test]
    fn test_numeric_ids() {
        assert_eq!(IdFormat::Numeric.parse("132825"), Some(132825));
        assert_eq!(IdFormat::Numeric.parse("U132825"), None);
        assert_eq!(IdFormat::Numeric.parse("13.5"), None);
    }

    #[test]
    fn test_builtin_schemas() {
        let schemas = Schemas::builtin().unwrap();
        assert_eq!(schemas.users.id_column(), "userID");
        assert_eq!(schemas.users.num_features(), 11);
        assert_eq!(schemas.restaurants.id_column(), "placeID");
        assert_eq!(schemas.restaurants.num_features(), 8);
        assert_eq!(schemas.get(EntityKind::User).kind(), EntityKind::User);

        let budget = schemas.users.vocabularies().get("budget").unwrap();
        assert_eq!(budget.index_of("high"), Some(3));
    }

    #[test]
    fn test_schema_requires_vocabularies() {
        let err = FeatureSchema::new(
            EntityKind::User,
            &["userID", "budget", "height"],
            IdFormat::Prefixed,
            &[("budget", &["?", "low"])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            VocabularyError::UndeclaredVocabulary {
                feature: "height".to_string()
            }
        );

        assert!(FeatureSchema::new(EntityKind::User, &["userID"], IdFormat::Prefixed, &[]).is_err());
    }
}
