//! Error types for the cleaning pipeline.
//!
//! Per-value coercion failures are never errors; they become nulls inside
//! the stages. Errors here are structural: the dataset is missing a column
//! a stage cannot run without, or two raw column names collapse onto one
//! canonical name.

use thiserror::Error;

use crate::progress::Stage;

/// Structural failures of a cleaning run.
#[derive(Debug, Error)]
pub enum CleanError {
    /// A mandatory column was absent when its stage ran.
    #[error("required column '{column}' is missing for {stage}")]
    MissingColumn { column: String, stage: Stage },

    /// Two distinct raw column names normalize to the same canonical name.
    #[error("column names '{first}' and '{second}' both normalize to '{canonical}'")]
    ColumnNameCollision {
        first: String,
        second: String,
        canonical: String,
    },

    /// Failed DataFrame operation.
    #[error("dataframe operation failed: {message}")]
    Frame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning stages.
pub type Result<T> = std::result::Result<T, CleanError>;
