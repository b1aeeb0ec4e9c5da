//! Duplicate business-key resolution.
//!
//! A key may appear many times in raw data; exactly one row per key
//! survives. The winner is the row with the greatest recency value; rows
//! tied on recency keep their input order, so the earlier row wins.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray, UInt32Chunked};
use tracing::debug;

use scrub_common::value_to_string;
use scrub_transform::parse_timestamp;

use crate::error::{CleanError, Result};
use crate::progress::Stage;

/// Collapses duplicate key values, keeping the most recent row per key.
///
/// The frame is stable-sorted by recency descending with null recency
/// after every dated value, then the first occurrence of each key is kept.
/// Output order is the sorted order, not the input order. Null and empty
/// keys form a single group. Both columns are mandatory.
pub fn resolve_duplicates(df: DataFrame, key: &str, recency: &str) -> Result<DataFrame> {
    for required in [key, recency] {
        if df.column(required).is_err() {
            return Err(CleanError::MissingColumn {
                column: required.to_string(),
                stage: Stage::ResolveDuplicates,
            });
        }
    }
    if df.height() == 0 {
        return Ok(df);
    }

    let stamps = column_timestamps(&df, recency);
    let mut indices: Vec<u32> = (0..df.height()).map(|idx| idx as u32).collect();
    indices.sort_by(|a, b| {
        let left = &stamps[*a as usize];
        let right = &stamps[*b as usize];
        match (left, right) {
            (Some(l), Some(r)) => r.cmp(l),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    let idx = UInt32Chunked::from_vec("sort".into(), indices);
    let sorted = df.take(&idx)?;

    let series = sorted.column(key)?;
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(sorted.height());
    for row in 0..sorted.height() {
        let value = value_to_string(series.get(row).unwrap_or(AnyValue::Null));
        keep.push(seen.insert(value.trim().to_string()));
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    let deduped = sorted.filter(&mask)?;
    debug!(
        key = %key,
        removed = sorted.height() - deduped.height(),
        "collapsed duplicate keys"
    );
    Ok(deduped)
}

/// Parses the recency column of every row; unparseable cells become `None`.
fn column_timestamps(df: &DataFrame, name: &str) -> Vec<Option<NaiveDateTime>> {
    let Ok(series) = df.column(name) else {
        return vec![None; df.height()];
    };
    (0..df.height())
        .map(|idx| {
            let text = value_to_string(series.get(idx).unwrap_or(AnyValue::Null));
            parse_timestamp(&text).map(|stamp| stamp.as_datetime())
        })
        .collect()
}
