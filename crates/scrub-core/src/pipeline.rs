//! Ordered stage execution with progress reporting.
//!
//! The pipeline runs the six stages strictly in [`Stage::ALL`] order; each
//! stage's postcondition is the next stage's precondition, so no stage may
//! be skipped or reordered. The caller's frame is cloned once and owned
//! values are threaded through the stages; on a structural error the call
//! fails as a whole and no partial dataset is returned.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::coerce::{coerce_numeric, standardize_dates};
use crate::config::CleanConfig;
use crate::dedupe::resolve_duplicates;
use crate::error::CleanError;
use crate::missing::{drop_missing_critical, fill_missing_category};
use crate::progress::{NoopProgress, ProgressObserver, Stage};
use crate::rename::rename_columns;
use crate::trim::trim_text;

/// The cleaning pipeline for one column layout.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: CleanConfig,
}

impl Pipeline {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Runs every stage in order and returns the cleaned frame.
    ///
    /// The observer receives a start and completion notification per
    /// stage, plus the removed-row count after each row-removing stage.
    /// The input frame is never mutated.
    pub fn run(&self, df: &DataFrame, observer: &mut dyn ProgressObserver) -> Result<DataFrame> {
        info!(rows = df.height(), "running cleaning pipeline");
        let mut data = df.clone();
        for stage in Stage::ALL {
            observer.stage_started(stage);
            let before = data.height();
            data = self.run_stage(stage, data)?;
            if stage.removes_rows() {
                let removed = before - data.height();
                debug!(stage = %stage, removed, "stage removed rows");
                observer.rows_removed(stage, removed);
            }
            observer.stage_completed(stage);
        }
        info!(rows = data.height(), "cleaning pipeline finished");
        Ok(data)
    }

    fn run_stage(&self, stage: Stage, df: DataFrame) -> std::result::Result<DataFrame, CleanError> {
        match stage {
            Stage::RenameColumns => rename_columns(df),
            Stage::CoerceNumeric => coerce_numeric(df, &self.config.numeric_columns),
            Stage::StandardizeDates => standardize_dates(df, &self.config.date_column),
            Stage::TrimText => trim_text(df),
            Stage::ResolveDuplicates => {
                resolve_duplicates(df, &self.config.key_column, &self.config.recency_column)
            }
            Stage::HandleMissing => {
                // Fill before drop; the two actions target different columns
                let filled = fill_missing_category(
                    df,
                    &self.config.category_column,
                    &self.config.category_fill,
                )?;
                drop_missing_critical(filled, &self.config.critical_columns)
            }
        }
    }
}

/// Cleans a frame with the given configuration and no progress reporting.
pub fn clean(df: &DataFrame, config: &CleanConfig) -> Result<DataFrame> {
    Pipeline::new(config.clone()).run(df, &mut NoopProgress)
}
