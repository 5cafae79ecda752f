//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `step_summaries`, `behavior_counts`, and `grid_cells`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{BehaviorCountRow, CellRow, OutputResult, StepSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS step_summaries (
                 step         INTEGER PRIMARY KEY,
                 total_agents INTEGER NOT NULL,
                 done         INTEGER NOT NULL,
                 halt_reason  TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS behavior_counts (
                 step      INTEGER NOT NULL,
                 behavior  INTEGER NOT NULL,
                 cells     INTEGER NOT NULL,
                 pct       REAL    NOT NULL,
                 spreading INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS grid_cells (
                 step     INTEGER NOT NULL,
                 cell_row INTEGER NOT NULL,
                 cell_col INTEGER NOT NULL,
                 state    INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO grid_cells (step, cell_row, cell_col, state) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.cell_row,
                    row.cell_col,
                    row.state,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries (step, total_agents, done, halt_reason) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                row.step,
                row.total_agents,
                row.done as i64,
                row.halt_reason,
            ],
        )?;
        Ok(())
    }

    fn write_behavior_counts(&mut self, rows: &[BehaviorCountRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO behavior_counts (step, behavior, cells, pct, spreading) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.behavior,
                    row.cells,
                    row.pct,
                    row.spreading as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
