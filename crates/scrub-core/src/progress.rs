//! Progress reporting seam for the cleaning pipeline.
//!
//! The orchestrator notifies an injected observer as stages run; the
//! observer decides presentation. The core never prints or logs on the
//! observer's behalf.

use std::fmt;

use serde::Serialize;

/// The six cleaning stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Canonicalize column names.
    RenameColumns,
    /// Coerce configured columns to numeric.
    CoerceNumeric,
    /// Standardize the date column to ISO 8601.
    StandardizeDates,
    /// Trim whitespace on textual columns.
    TrimText,
    /// Collapse duplicate business keys by recency.
    ResolveDuplicates,
    /// Fill the category default and drop critically incomplete rows.
    HandleMissing,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 6] = [
        Stage::RenameColumns,
        Stage::CoerceNumeric,
        Stage::StandardizeDates,
        Stage::TrimText,
        Stage::ResolveDuplicates,
        Stage::HandleMissing,
    ];

    /// Stable name for logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Stage::RenameColumns => "rename_columns",
            Stage::CoerceNumeric => "coerce_numeric",
            Stage::StandardizeDates => "standardize_dates",
            Stage::TrimText => "trim_text",
            Stage::ResolveDuplicates => "resolve_duplicates",
            Stage::HandleMissing => "handle_missing",
        }
    }

    /// Whether this stage may remove rows.
    pub fn removes_rows(self) -> bool {
        matches!(self, Stage::ResolveDuplicates | Stage::HandleMissing)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives pipeline progress notifications.
///
/// All methods default to no-ops so implementations subscribe only to what
/// they present.
pub trait ProgressObserver {
    /// A stage is about to run.
    fn stage_started(&mut self, _stage: Stage) {}

    /// A stage finished.
    fn stage_completed(&mut self, _stage: Stage) {}

    /// A row-removing stage removed `removed` rows (possibly zero).
    fn rows_removed(&mut self, _stage: Stage, _removed: usize) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// One recorded progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressEvent {
    StageStarted { stage: Stage },
    StageCompleted { stage: Stage },
    RowsRemoved { stage: Stage, removed: usize },
}

/// Observer that accumulates every notification.
///
/// The recorded events are the narrative of a run: which stages ran, in
/// what order, and how many rows each removing stage dropped.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Vec<ProgressEvent>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in arrival order.
    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    /// Consumes the recorder, returning the events.
    pub fn into_events(self) -> Vec<ProgressEvent> {
        self.events
    }
}

impl ProgressObserver for RecordingProgress {
    fn stage_started(&mut self, stage: Stage) {
        self.events.push(ProgressEvent::StageStarted { stage });
    }

    fn stage_completed(&mut self, stage: Stage) {
        self.events.push(ProgressEvent::StageCompleted { stage });
    }

    fn rows_removed(&mut self, stage: Stage, removed: usize) {
        self.events.push(ProgressEvent::RowsRemoved { stage, removed });
    }
}
