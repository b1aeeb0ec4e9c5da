//! Shared utilities for the scrub workspace.
//!
//! This crate provides the Polars `AnyValue` helpers used by the cleaning
//! stages: cell-to-string rendering, null detection, and numeric parsing.

pub mod value;

// Re-export commonly used functions at crate root for convenience
pub use value::{format_numeric, is_null, parse_f64, value_to_string};
