//! `spread-output` — simulation output writers for the rust_spread
//! framework.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                                                  |
//! |----------|---------|----------------------------------------------------------------|
//! | *(none)* | CSV     | `step_summaries.csv`, `behavior_counts.csv`, `grid_cells.csv`  |
//! | `sqlite` | SQLite  | `output.db`                                                    |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`SnapshotWriterObserver`], which implements `spread_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spread_output::{CsvWriter, SnapshotWriterObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SnapshotWriterObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotWriterObserver;
pub use row::{BehaviorCountRow, CellRow, StepSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
