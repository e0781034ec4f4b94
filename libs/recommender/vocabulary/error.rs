//! Error types for vocabulary and schema construction

use thiserror::Error;

/// Errors raised while building the immutable feature schemas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VocabularyError {
    /// Vocabulary does not start with the unknown sentinel
    #[error("vocabulary for '{feature}' must start with '{sentinel}', found '{found}'")]
    MissingSentinel {
        feature: String,
        sentinel: &'static str,
        found: String,
    },

    /// The same category appears twice in one vocabulary
    #[error("vocabulary for '{feature}' lists '{value}' more than once")]
    DuplicateCategory { feature: String, value: String },

    /// A declared feature has no vocabulary
    #[error("feature '{feature}' is declared but has no vocabulary")]
    UndeclaredVocabulary { feature: String },

    /// Schema declares no id column or no features
    #[error("schema for {entity} must declare an id column and at least one feature")]
    EmptySchema { entity: &'static str },
}
