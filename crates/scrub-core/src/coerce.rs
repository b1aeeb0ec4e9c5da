//! Numeric and date coercion stages.
//!
//! Both stages are tolerant of absent target columns: a dataset without an
//! optional column is skipped, not failed. Cells that resist parsing
//! become null; that is the designed per-value behavior, not a fallback.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::debug;

use scrub_common::value_to_string;
use scrub_transform::{coerce_numeric_text, parse_timestamp};

use crate::error::Result;

/// Coerces each listed column to `Float64`.
///
/// Every cell is rendered as text, stripped of non-numeric characters, and
/// parsed; failures become null. The rebuilt column keeps its position.
pub fn coerce_numeric(mut df: DataFrame, columns: &[String]) -> Result<DataFrame> {
    for name in columns {
        let Ok(series) = df.column(name.as_str()) else {
            debug!(column = %name, "numeric column absent, skipping");
            continue;
        };
        let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let text = value_to_string(series.get(idx).unwrap_or(AnyValue::Null));
            values.push(coerce_numeric_text(&text));
        }
        df.with_column(Series::new(name.as_str().into(), values))?;
    }
    Ok(df)
}

/// Standardizes the date column to canonical ISO 8601 strings.
///
/// Format inference is best-effort per cell; the column is not assumed to
/// follow one fixed format. Unparseable cells become null.
pub fn standardize_dates(mut df: DataFrame, column: &str) -> Result<DataFrame> {
    if df.column(column).is_err() {
        debug!(column = %column, "date column absent, skipping");
        return Ok(df);
    }
    let series = df.column(column)?;
    let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let text = value_to_string(series.get(idx).unwrap_or(AnyValue::Null));
        values.push(parse_timestamp(&text).map(|stamp| stamp.canonical()));
    }
    df.with_column(Series::new(column.into(), values))?;
    Ok(df)
}
