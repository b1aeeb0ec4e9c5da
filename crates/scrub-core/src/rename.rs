//! Column-name canonicalization stage.
//!
//! Runs first: every later stage refers to columns by canonical name.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::warn;

use scrub_transform::canonical_column_name;

use crate::error::{CleanError, Result};

/// Replaces every column name with its canonical form.
///
/// Row values are untouched. Two distinct raw names folding to the same
/// canonical name fail the stage; silently keeping one of the columns
/// would make the surviving data depend on column order.
pub fn rename_columns(mut df: DataFrame) -> Result<DataFrame> {
    let raw_names = df.get_column_names_owned();
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut canonical = Vec::with_capacity(raw_names.len());

    for raw in &raw_names {
        let name = canonical_column_name(raw.as_str());
        if name.is_empty() {
            warn!(column = %raw, "column name is empty after normalization");
        }
        if let Some(first) = seen.get(&name) {
            return Err(CleanError::ColumnNameCollision {
                first: first.clone(),
                second: raw.to_string(),
                canonical: name,
            });
        }
        seen.insert(name.clone(), raw.to_string());
        canonical.push(name);
    }

    df.set_column_names(canonical)?;
    Ok(df)
}
