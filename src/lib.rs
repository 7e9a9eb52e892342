//! Dataset preparation for loan-risk prediction.
//!
//! This crate owns one step of the pipeline: picking the feature and target
//! columns out of an already-loaded tabular dataset. Loading raw records into
//! a [`data::model::Dataset`] and training on the projected result both live
//! with upstream/downstream collaborators.
//!
//! The fixed schema (12 feature columns plus the `bad_loans` target) is
//! exported from [`schema`] so training and inference code can share it.

pub mod data;
pub mod schema;

pub use data::model::{CellValue, Dataset, Row};
pub use data::select::{select_columns, MissingColumnError};
pub use schema::{select_training_columns, FEATURE_COLUMNS, TARGET_COLUMN};
