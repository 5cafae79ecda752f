//! The `Sim` struct and its step loop.

use spread_core::{CellId, SimConfig, Step};
use spread_grid::{CellRngs, Grid, Neighborhood};

use crate::convergence::{ConvergenceTracker, HaltReason, RunPhase};
use crate::observer::SimObserver;
use crate::rule::{Transition, TransitionRule};
use crate::snapshot::{GridStats, StepSnapshot};
use crate::{SimError, SimResult};

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Returned by [`Sim::run`] once the loop halts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunReport {
    /// The last step that was computed (1-based; equals the number of steps
    /// taken).
    pub final_step: Step,

    /// Why the run stopped.
    pub halt_reason: HaltReason,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the active grid, the per-cell RNG pool, and the transition rule,
/// and drives the step loop described in the [crate docs](crate).  Create
/// via [`SimBuilder`][crate::SimBuilder].
///
/// A `Sim` runs exactly once: after [`run`][Self::run] returns, the phase is
/// terminal and further `run` calls fail with [`SimError::RunFinished`].
/// The final grid stays readable for inspection.
pub struct Sim {
    /// Global configuration (grid shape, probabilities, step limit, seed).
    pub config: SimConfig,

    /// The active grid.  Replaced wholesale each step; never mutated
    /// cell-by-cell while being read.
    pub grid: Grid,

    /// Per-cell deterministic RNGs, separate from the grid so the scan can
    /// borrow `&Grid` and `&mut CellRngs` simultaneously.
    pub rngs: CellRngs,

    /// The transition rule applied to every cell every step.
    pub rule: TransitionRule,

    /// Steps completed so far (`Step::ZERO` before the first step).
    pub step: Step,

    pub(crate) phase: RunPhase,
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("rule", &self.rule)
            .field("step", &self.step)
            .field("phase", &self.phase)
            .field("rngs", &format_args!("CellRngs {{ len: {} }}", self.rngs.len()))
            .finish()
    }
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the initial grid until convergence or `config.max_steps`.
    ///
    /// The observer sees one [`StepSnapshot`] per step; the last snapshot
    /// has `done = true` and carries the halt reason, which is also
    /// returned here.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        if self.phase != RunPhase::Initialized {
            return Err(SimError::RunFinished);
        }
        self.phase = RunPhase::Running;

        let mut halted = HaltReason::StepLimit;
        for t in 1..=self.config.max_steps {
            let spreading = self.process_step()?;
            self.step = Step(t);

            // Convergence outranks the step limit when both apply.
            let reason = if ConvergenceTracker::fixed_point(&spreading) {
                Some(HaltReason::Converged)
            } else if t == self.config.max_steps {
                Some(HaltReason::StepLimit)
            } else {
                None
            };

            let stats = GridStats::measure(&self.grid, self.config.num_behaviors);
            observer.on_step(&StepSnapshot {
                step:        self.step,
                grid:        &self.grid,
                stats,
                spreading:   &spreading,
                done:        reason.is_some(),
                halt_reason: reason,
            });

            if let Some(reason) = reason {
                halted = reason;
                break;
            }
        }

        self.phase = RunPhase::from(halted);
        observer.on_sim_end(self.step, halted);
        Ok(RunReport { final_step: self.step, halt_reason: halted })
    }

    /// The run's current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Compute the next grid from the current one and swap it in.
    ///
    /// Returns the per-behavior spread flags for the step.  Every cell is
    /// evaluated against the same immutable previous grid; the scan order is
    /// row-major sequentially, arbitrary under Rayon — either way each cell
    /// draws from its own stream, so the result is identical.
    fn process_step(&mut self) -> SimResult<Vec<bool>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let prev = &self.grid;
        let rule = &self.rule;
        let rngs = &mut self.rngs;
        let size = prev.size();

        #[cfg(not(feature = "parallel"))]
        let transitions: Vec<Transition> = rngs
            .inner
            .iter_mut()
            .enumerate()
            .map(|(i, rng)| {
                let (row, col) = CellId(i as u32).coords(size);
                let neighbors = Neighborhood::sample(prev, row, col);
                rule.next_state(prev.get(row, col), &neighbors, rng)
            })
            .collect();

        #[cfg(feature = "parallel")]
        let transitions: Vec<Transition> = {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let (row, col) = CellId(i as u32).coords(size);
                    let neighbors = Neighborhood::sample(prev, row, col);
                    rule.next_state(prev.get(row, col), &neighbors, rng)
                })
                .collect()
        };

        let mut spreading = vec![false; self.config.num_behaviors as usize];
        let mut next_cells = Vec::with_capacity(transitions.len());
        for transition in transitions {
            if let Some(b) = transition.adopted {
                spreading[b.index()] = true;
            }
            next_cells.push(transition.next);
        }

        self.grid = Grid::from_cells(size, next_cells)?;
        Ok(spreading)
    }
}
