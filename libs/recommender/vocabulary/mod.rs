//! Feature vocabulary store
//!
//! Static categorical vocabularies and the per-entity feature schemas built from them.
//! Every vocabulary keeps the unknown sentinel `"?"` at index 0 and its order is fixed
//! for the lifetime of the process, so encoded indices stay interpretable.
//!
//! The schemas are built once through [`Schemas::builtin`] and shared read-only
//! (typically behind an `Arc`) by the encoder, the assembler and the catalog.

pub mod error;
pub mod schema;
pub mod store;

pub use error::VocabularyError;
pub use schema::{EntityKind, FeatureSchema, IdFormat, Schemas};
pub use store::{Vocabulary, VocabularyStore};
