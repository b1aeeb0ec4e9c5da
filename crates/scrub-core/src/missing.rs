//! Missing-value handling: category fill and critical-null row removal.
//!
//! Unlike the coercion stages, the columns handled here are mandated by
//! business rules; their absence is a configuration error, never a silent
//! skip.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use scrub_common::value_to_string;

use crate::error::{CleanError, Result};
use crate::progress::Stage;

/// Replaces null category cells with the configured fill value.
///
/// Non-null cells, including empty strings, are untouched; the column is
/// only rebuilt when at least one null is present.
pub fn fill_missing_category(mut df: DataFrame, column: &str, fill: &str) -> Result<DataFrame> {
    if df.column(column).is_err() {
        return Err(CleanError::MissingColumn {
            column: column.to_string(),
            stage: Stage::HandleMissing,
        });
    }
    if df.column(column)?.null_count() == 0 {
        return Ok(df);
    }

    let series = df.column(column)?;
    let mut values = Vec::with_capacity(df.height());
    let mut filled = 0usize;
    for idx in 0..df.height() {
        match series.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => {
                filled += 1;
                values.push(fill.to_string());
            }
            value => values.push(value_to_string(value)),
        }
    }
    debug!(column = %column, filled, "filled missing category values");
    df.with_column(Series::new(column.into(), values))?;
    Ok(df)
}

/// Removes every row with a null in any critical column.
pub fn drop_missing_critical(df: DataFrame, critical: &[String]) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(critical.len());
    for name in critical {
        match df.column(name.as_str()) {
            Ok(column) => columns.push(column),
            Err(_) => {
                return Err(CleanError::MissingColumn {
                    column: name.clone(),
                    stage: Stage::HandleMissing,
                });
            }
        }
    }

    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let complete = columns
            .iter()
            .all(|column| !matches!(column.get(idx).unwrap_or(AnyValue::Null), AnyValue::Null));
        keep.push(complete);
    }
    let mask = BooleanChunked::from_slice("complete".into(), &keep);
    let filtered = df.filter(&mask)?;
    if filtered.height() < df.height() {
        debug!(
            removed = df.height() - filtered.height(),
            "dropped rows with null critical values"
        );
    }
    Ok(filtered)
}
