//! Dataset cleaning stages and pipeline orchestration.
//!
//! This crate turns a raw, inconsistently formatted tabular dataset into a
//! canonical, deduplicated one with no nulls in its critical columns:
//!
//! - **rename**: canonical column names
//! - **coerce**: numeric and ISO 8601 date coercion for configured columns
//! - **trim**: whitespace trimming on textual columns
//! - **dedupe**: duplicate business-key resolution by recency
//! - **missing**: category fill and critical-null row removal
//! - **pipeline**: ordered stage execution with progress reporting
//!
//! Loading and persisting datasets are the caller's concern; the pipeline
//! takes and returns in-memory [`polars::prelude::DataFrame`] values and
//! holds no state between runs.

pub mod coerce;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod missing;
pub mod pipeline;
pub mod progress;
pub mod rename;
pub mod trim;

pub use coerce::{coerce_numeric, standardize_dates};
pub use config::{CleanConfig, DEFAULT_CATEGORY_FILL, columns};
pub use dedupe::resolve_duplicates;
pub use error::CleanError;
pub use missing::{drop_missing_critical, fill_missing_category};
pub use pipeline::{Pipeline, clean};
pub use progress::{NoopProgress, ProgressEvent, ProgressObserver, RecordingProgress, Stage};
pub use rename::rename_columns;
pub use trim::trim_text;
