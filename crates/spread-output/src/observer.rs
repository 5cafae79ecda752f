//! `SnapshotWriterObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use spread_core::Step;
use spread_sim::{HaltReason, SimObserver, StepSnapshot};

use crate::row::{BehaviorCountRow, CellRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that records step summaries, per-behavior tallies, and
/// grid dumps to any [`OutputWriter`] backend (CSV, SQLite).
///
/// Summaries and behavior counts are written every step.  Full grid dumps
/// are written on steps divisible by `cell_interval` and always on the final
/// step; set the interval above 1 to keep `grid_cells` output manageable on
/// long runs.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SnapshotWriterObserver<W: OutputWriter> {
    writer:        W,
    cell_interval: u64,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SnapshotWriterObserver<W> {
    /// Create an observer backed by `writer`, dumping the grid every step.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cell_interval: 1,
            last_error:    None,
        }
    }

    /// Dump the full grid only every `interval` steps (0 = only the final
    /// step).  Summaries and behavior counts are unaffected.
    pub fn with_cell_interval(mut self, interval: u64) -> Self {
        self.cell_interval = interval;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn reason_label(reason: Option<HaltReason>) -> &'static str {
        match reason {
            Some(HaltReason::Converged) => "converged",
            Some(HaltReason::StepLimit) => "max_steps",
            None                        => "",
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotWriterObserver<W> {
    fn on_step(&mut self, snap: &StepSnapshot<'_>) {
        let summary = StepSummaryRow {
            step:         snap.step.0,
            total_agents: snap.stats.total_agents,
            done:         snap.done,
            halt_reason:  Self::reason_label(snap.halt_reason),
        };
        let result = self.writer.write_step_summary(&summary);
        self.store_err(result);

        let counts: Vec<BehaviorCountRow> = snap
            .stats
            .behavior_cells
            .iter()
            .zip(&snap.stats.behavior_pct)
            .zip(snap.spreading)
            .enumerate()
            .map(|(b, ((&cells, &pct), &spreading))| BehaviorCountRow {
                step: snap.step.0,
                behavior: b as u16,
                cells,
                pct,
                spreading,
            })
            .collect();
        let result = self.writer.write_behavior_counts(&counts);
        self.store_err(result);

        let dump_now = snap.done
            || (self.cell_interval > 0 && snap.step.0.is_multiple_of(self.cell_interval));
        if dump_now {
            let size = snap.grid.size();
            let rows: Vec<CellRow> = snap
                .grid
                .iter()
                .map(|(id, state)| {
                    let (cell_row, cell_col) = id.coords(size);
                    CellRow {
                        step: snap.step.0,
                        cell_row,
                        cell_col,
                        state: state.code(),
                    }
                })
                .collect();
            let result = self.writer.write_cells(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step, _reason: HaltReason) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
