use std::collections::HashMap;

use super::error::VocabularyError;
use crate::constants::UNKNOWN_CATEGORY;

/// Ordered list of permitted values for one categorical feature
///
/// Index 0 is always the unknown sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    feature: String,
    values: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    /// Create a vocabulary, validating the sentinel position and uniqueness
    pub fn new<S: AsRef<str>>(feature: &str, values: &[S]) -> Result<Self, VocabularyError> {
        let first = values.first().map(|v| v.as_ref()).unwrap_or_default();
        if first != UNKNOWN_CATEGORY {
            return Err(VocabularyError::MissingSentinel {
                feature: feature.to_string(),
                sentinel: UNKNOWN_CATEGORY,
                found: first.to_string(),
            });
        }

        let mut positions = HashMap::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let value = value.as_ref();
            if positions.insert(value.to_string(), index).is_some() {
                return Err(VocabularyError::DuplicateCategory {
                    feature: feature.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(Self {
            feature: feature.to_string(),
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
            positions,
        })
    }

    /// Zero-based position of a category, if it is permitted
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.positions.get(value).copied()
    }

    /// Category stored at an index (inverse of `index_of`)
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read-only mapping from feature name to its vocabulary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyStore {
    vocabularies: HashMap<String, Vocabulary>,
}

impl VocabularyStore {
    /// Build a store from `(feature, values)` pairs
    pub fn from_options(options: &[(&str, &[&str])]) -> Result<Self, VocabularyError> {
        let mut vocabularies = HashMap::with_capacity(options.len());
        for (feature, values) in options {
            vocabularies.insert(feature.to_string(), Vocabulary::new(feature, *values)?);
        }
        Ok(Self { vocabularies })
    }

    pub fn get(&self, feature: &str) -> Option<&Vocabulary> {
        self.vocabularies.get(feature)
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.vocabularies.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let vocab = Vocabulary::new("budget", &["?", "medium", "low", "high"]).unwrap();
        assert_eq!(vocab.index_of("?"), Some(0));
        assert_eq!(vocab.index_of("high"), Some(3));
        assert_eq!(vocab.value_at(3), Some("high"));
        assert_eq!(vocab.index_of("luxury"), None);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_sentinel_required() {
        let err = Vocabulary::new("budget", &["medium", "?"]).unwrap_err();
        assert!(matches!(err, VocabularyError::MissingSentinel { .. }));

        let empty: [&str; 0] = [];
        assert!(Vocabulary::new("budget", &empty).is_err());
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = Vocabulary::new("price", &["?", "low", "low"]).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::DuplicateCategory {
                feature: "price".to_string(),
                value: "low".to_string(),
            }
        );
    }

    #[test]
    fn test_store_lookup() {
        let store = VocabularyStore::from_options(&[
            ("smoker", &["?", "false", "true"]),
            ("area", &["?", "open", "closed"]),
        ])
        .unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("smoker"));
        assert_eq!(store.get("area").and_then(|v| v.index_of("closed")), Some(2));
        assert!(store.get("price").is_none());
    }
}
