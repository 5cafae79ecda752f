//! Integration tests for spread-output.

use spread_core::SimConfig;

fn small_config(grid_size: u32, origins: Vec<u32>) -> SimConfig {
    SimConfig {
        grid_size,
        max_steps:              10,
        num_behaviors:          origins.len() as u16,
        prob_unaffected:        0.0,
        prob_affected:          0.0,
        initial_agents_density: 1.0,
        origins_per_behavior:   origins,
        seed:                   1,
        num_threads:            Some(1),
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use spread_sim::SimBuilder;

    use super::small_config;
    use crate::csv::CsvWriter;
    use crate::observer::SnapshotWriterObserver;
    use crate::row::{BehaviorCountRow, CellRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn cell_row(step: u64, cell_row: u32, cell_col: u32, state: u16) -> CellRow {
        CellRow { step, cell_row, cell_col, state }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("step_summaries.csv").exists());
        assert!(dir.path().join("behavior_counts.csv").exists());
        assert!(dir.path().join("grid_cells.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "total_agents", "done", "halt_reason"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("behavior_counts.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["step", "behavior", "cells", "pct", "spreading"]);

        let mut rdr3 = csv::Reader::from_path(dir.path().join("grid_cells.csv")).unwrap();
        let headers3: Vec<_> = rdr3.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers3, ["step", "cell_row", "cell_col", "state"]);
    }

    #[test]
    fn csv_cells_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![cell_row(3, 0, 0, 0), cell_row(3, 0, 1, 1), cell_row(3, 1, 0, 2)];
        w.write_cells(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("grid_cells.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "3"); // step
        assert_eq!(&read_rows[1][3], "1"); // state
        assert_eq!(&read_rows[2][3], "2");
    }

    #[test]
    fn csv_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&StepSummaryRow {
            step:         4,
            total_agents: 37,
            done:         true,
            halt_reason:  "converged",
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "4");
        assert_eq!(&read_rows[0][1], "37");
        assert_eq!(&read_rows[0][2], "1");
        assert_eq!(&read_rows[0][3], "converged");
    }

    #[test]
    fn csv_behavior_counts_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_behavior_counts(&[
            BehaviorCountRow { step: 2, behavior: 0, cells: 5, pct: 12.5, spreading: true },
            BehaviorCountRow { step: 2, behavior: 1, cells: 0, pct: 0.0,  spreading: false },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("behavior_counts.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][1], "0");    // behavior
        assert_eq!(&read_rows[0][2], "5");    // cells
        assert_eq!(&read_rows[0][3], "12.5"); // pct
        assert_eq!(&read_rows[0][4], "1");    // spreading
        assert_eq!(&read_rows[1][4], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_cells(&[]).unwrap();
        w.write_behavior_counts(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        // Zero probabilities: the run converges after exactly one step.
        let cfg = small_config(4, vec![2]);
        let mut sim = SimBuilder::new(cfg).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SnapshotWriterObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 1);
        assert_eq!(&summaries[0][1], "16"); // full density: every cell an agent
        assert_eq!(&summaries[0][2], "1");
        assert_eq!(&summaries[0][3], "converged");

        // One dump of a 4×4 grid.
        let mut rdr = csv::Reader::from_path(dir.path().join("grid_cells.csv")).unwrap();
        let cells: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(cells.len(), 16);
    }

    #[test]
    fn cell_interval_limits_grid_dumps() {
        // 2×2 duel at probability 1 oscillates forever; 5-step limit.  With
        // interval 2, dumps land on steps 2 and 4 plus the final step 5.
        let cfg = spread_core::SimConfig {
            prob_unaffected: 1.0,
            prob_affected:   1.0,
            max_steps:       5,
            ..small_config(2, vec![2, 2])
        };
        let mut sim = SimBuilder::new(cfg).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SnapshotWriterObserver::new(writer).with_cell_interval(2);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("grid_cells.csv")).unwrap();
        let cells: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(cells.len(), 12, "3 dumps × 4 cells expected");

        // Summaries still cover every step.
        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 5);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{BehaviorCountRow, CellRow, StepSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_cell_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            CellRow { step: 1, cell_row: 0, cell_col: 0, state: 0 },
            CellRow { step: 1, cell_row: 0, cell_col: 1, state: 1 },
            CellRow { step: 1, cell_row: 1, cell_col: 0, state: 3 },
        ];
        w.write_cells(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM grid_cells", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_summary_round_trip() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_step_summary(&StepSummaryRow {
            step:         7,
            total_agents: 42,
            done:         true,
            halt_reason:  "max_steps",
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (agents, done, reason): (i64, i64, String) = conn
            .query_row(
                "SELECT total_agents, done, halt_reason FROM step_summaries WHERE step = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(agents, 42);
        assert_eq!(done, 1, "done=true should be stored as 1");
        assert_eq!(reason, "max_steps");
    }

    #[test]
    fn sqlite_behavior_counts() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_behavior_counts(&[
            BehaviorCountRow { step: 3, behavior: 0, cells: 9, pct: 56.25, spreading: false },
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (cells, pct, spreading): (i64, f64, i64) = conn
            .query_row(
                "SELECT cells, pct, spreading FROM behavior_counts WHERE step = 3",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(cells, 9);
        assert!((pct - 56.25).abs() < 1e-9);
        assert_eq!(spreading, 0);
    }
}
