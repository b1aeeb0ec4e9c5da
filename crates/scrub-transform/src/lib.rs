//! Value-level cleaning transforms.
//!
//! This crate provides the pure, per-value functions behind the dataset
//! cleaning stages:
//!
//! - **column_name**: canonical column identifiers (ASCII fold, lowercase,
//!   underscore-separated)
//! - **numeric**: lenient numeric coercion of formatted text
//! - **datetime**: best-effort timestamp parsing and canonical ISO 8601
//!   rendering
//!
//! Nothing here touches a DataFrame; the dataset-level stages live in
//! `scrub-core`.

pub mod column_name;
pub mod datetime;
pub mod numeric;

pub use column_name::canonical_column_name;
pub use datetime::{Timestamp, parse_timestamp};
pub use numeric::coerce_numeric_text;
