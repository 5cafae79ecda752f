//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BehaviorCountRow, CellRow, OutputResult, StepSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SnapshotWriterObserver::take_error`][crate::SnapshotWriterObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of grid cells for one step.
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write a batch of per-behavior tallies for one step.
    fn write_behavior_counts(&mut self, rows: &[BehaviorCountRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
