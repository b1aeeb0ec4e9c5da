//! Whitespace trimming stage.
//!
//! Runs after the coercion stages, so numeric and date columns already
//! hold typed or canonical values and only genuinely textual columns are
//! visited.

use polars::prelude::{AnyValue, DataFrame, DataType, NamedFrom, Series};

use scrub_common::value_to_string;

use crate::error::Result;

/// Trims leading and trailing whitespace on every string column.
///
/// Interior whitespace is untouched and nulls stay null; a trimmed empty
/// string is still a value, not a null. Non-string columns are unaffected.
pub fn trim_text(mut df: DataFrame) -> Result<DataFrame> {
    let names = df.get_column_names_owned();
    for name in names {
        let Ok(series) = df.column(name.as_str()) else {
            continue;
        };
        if series.dtype() != &DataType::String {
            continue;
        }
        let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
        let mut changed = false;
        for idx in 0..df.height() {
            match series.get(idx).unwrap_or(AnyValue::Null) {
                AnyValue::Null => values.push(None),
                AnyValue::String(s) => {
                    let trimmed = s.trim();
                    if trimmed.len() != s.len() {
                        changed = true;
                    }
                    values.push(Some(trimmed.to_string()));
                }
                AnyValue::StringOwned(s) => {
                    let trimmed = s.trim();
                    if trimmed.len() != s.len() {
                        changed = true;
                    }
                    values.push(Some(trimmed.to_string()));
                }
                other => values.push(Some(value_to_string(other))),
            }
        }
        if changed {
            df.with_column(Series::new(name.clone(), values))?;
        }
    }
    Ok(df)
}
