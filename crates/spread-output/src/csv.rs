//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `step_summaries.csv`
//! - `behavior_counts.csv`
//! - `grid_cells.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BehaviorCountRow, CellRow, OutputResult, StepSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    counts:    Writer<File>,
    cells:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["step", "total_agents", "done", "halt_reason"])?;

        let mut counts = Writer::from_path(dir.join("behavior_counts.csv"))?;
        counts.write_record(["step", "behavior", "cells", "pct", "spreading"])?;

        let mut cells = Writer::from_path(dir.join("grid_cells.csv"))?;
        cells.write_record(["step", "cell_row", "cell_col", "state"])?;

        Ok(Self {
            summaries,
            counts,
            cells,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.step.to_string(),
                row.cell_row.to_string(),
                row.cell_col.to_string(),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.total_agents.to_string(),
            (row.done as u8).to_string(),
            row.halt_reason.to_string(),
        ])?;
        Ok(())
    }

    fn write_behavior_counts(&mut self, rows: &[BehaviorCountRow]) -> OutputResult<()> {
        for row in rows {
            self.counts.write_record(&[
                row.step.to_string(),
                row.behavior.to_string(),
                row.cells.to_string(),
                row.pct.to_string(),
                (row.spreading as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.counts.flush()?;
        self.cells.flush()?;
        Ok(())
    }
}
