//! Dataset loading and assembly
//!
//! - config::DatasetConfig: where the source tables live
//! - reader: CSV parsing into typed entity tables and interactions
//! - assembler::DatasetAssembler: sort, encode and join into training triples
//! - split: seeded train/test split
//!
//! Loading is single pass and all-or-nothing: any error discards the partial work.

pub mod assembler;
pub mod config;
pub mod error;
pub mod reader;
pub mod split;

pub use assembler::{AssembledDataset, DatasetAssembler, RowIndex};
pub use config::DatasetConfig;
pub use error::DatasetError;
pub use reader::{read_entity_table, read_interactions, Interaction};
pub use split::{split_train_test, TrainingSplit};
