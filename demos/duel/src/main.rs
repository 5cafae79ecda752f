//! duel — two behaviors competing on one grid.
//!
//! Seeds a 24×24 grid with two rival behaviors and animates the contest in
//! the terminal until one step spreads nothing (fixed point) or the step
//! limit runs out.  Each frame shows the grid plus a statistics line; CSV
//! output lands in `output/duel/`.  Rendering and pacing live entirely in
//! this binary — the engine only hands out snapshots.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use spread_core::SimConfig;
use spread_grid::CellState;
use spread_output::{CsvWriter, SnapshotWriterObserver};
use spread_sim::{SimBuilder, SimObserver, StepSnapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE:       u32   = 24;
const SEED:            u64   = 42;
const MAX_STEPS:       u64   = 400;
const PROB_UNAFFECTED: f64   = 0.35;
const PROB_AFFECTED:   f64   = 0.08;
const DENSITY:         f64   = 0.75;
const ORIGINS:         u32   = 2;    // per behavior
const FRAME_DELAY_MS:  u64   = 40;

/// Glyphs per behavior, indexed by `BehaviorId`.
const BEHAVIOR_GLYPHS: [char; 2] = ['#', 'o'];

// ── Terminal renderer ─────────────────────────────────────────────────────────

/// Draws one frame per step and owns the animation cadence.  Wraps the CSV
/// observer so a single observer handle drives both.
struct FrameRenderer<W: spread_output::OutputWriter> {
    inner:       SnapshotWriterObserver<W>,
    frame_delay: Duration,
    frames:      usize,
}

impl<W: spread_output::OutputWriter> FrameRenderer<W> {
    fn new(inner: SnapshotWriterObserver<W>, frame_delay: Duration) -> Self {
        Self { inner, frame_delay, frames: 0 }
    }

    fn glyph(state: CellState) -> char {
        match state {
            CellState::Empty       => ' ',
            CellState::Unaffected  => '.',
            CellState::Carrying(b) => {
                BEHAVIOR_GLYPHS.get(b.index()).copied().unwrap_or('?')
            }
        }
    }
}

impl<W: spread_output::OutputWriter> SimObserver for FrameRenderer<W> {
    fn on_step(&mut self, snap: &StepSnapshot<'_>) {
        self.frames += 1;

        // Home the cursor and redraw in place.
        print!("\x1B[2J\x1B[1;1H");
        let size = snap.grid.size();
        for row in 0..size {
            let line: String = (0..size).map(|col| Self::glyph(snap.grid.get(row, col))).collect();
            println!("{line}");
        }

        print!("{}  agents {:>4}", snap.step, snap.stats.total_agents);
        for (b, (&cells, &pct)) in snap
            .stats
            .behavior_cells
            .iter()
            .zip(&snap.stats.behavior_pct)
            .enumerate()
        {
            let marker = if snap.spreading[b] { '+' } else { ' ' };
            print!("  [{}] {:>4} ({:>5.1}%){}", BEHAVIOR_GLYPHS[b], cells, pct, marker);
        }
        println!();

        self.inner.on_step(snap);
        std::thread::sleep(self.frame_delay);
    }

    fn on_sim_end(&mut self, final_step: spread_core::Step, reason: spread_sim::HaltReason) {
        self.inner.on_sim_end(final_step, reason);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== duel — rust_spread contagion demo ===");
    println!("Grid: {GRID_SIZE}×{GRID_SIZE}  |  Seed: {SEED}  |  Max steps: {MAX_STEPS}");
    println!();

    // 1. Configure the run.
    let config = SimConfig {
        grid_size:              GRID_SIZE,
        max_steps:              MAX_STEPS,
        num_behaviors:          2,
        prob_unaffected:        PROB_UNAFFECTED,
        prob_affected:          PROB_AFFECTED,
        initial_agents_density: DENSITY,
        origins_per_behavior:   vec![ORIGINS, ORIGINS],
        seed:                   SEED,
        num_threads:            None,
    };

    // 2. Build the simulation (validates config, seeds the grid).
    let mut sim = SimBuilder::new(config).build()?;
    println!(
        "Seeded {} agents on {} cells; origins: {:?}",
        sim.grid.total_agents(),
        sim.grid.len(),
        sim.grid.behavior_cells(2),
    );

    // 3. Set up CSV output.
    std::fs::create_dir_all("output/duel")?;
    let writer = CsvWriter::new(Path::new("output/duel"))?;
    let csv_obs = SnapshotWriterObserver::new(writer).with_cell_interval(10);
    let mut obs = FrameRenderer::new(csv_obs, Duration::from_millis(FRAME_DELAY_MS));

    // 4. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Halted via {} after {} ({} frames, {:.3} s)",
        report.halt_reason, report.final_step, obs.frames, elapsed.as_secs_f64());
    println!();
    println!("{:<10} {:<8} {:<8}", "Behavior", "Cells", "Share");
    println!("{}", "-".repeat(28));
    let final_counts = sim.grid.behavior_cells(2);
    let total = sim.grid.total_agents().max(1);
    for (b, &cells) in final_counts.iter().enumerate() {
        println!(
            "{:<10} {:<8} {:<8.1}",
            format!("{} ({})", b, BEHAVIOR_GLYPHS[b]),
            cells,
            cells as f64 / total as f64 * 100.0,
        );
    }
    println!();
    println!("CSV written to output/duel/");

    Ok(())
}
