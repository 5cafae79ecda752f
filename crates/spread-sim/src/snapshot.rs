//! Per-step snapshot events handed to observers.

use spread_core::Step;
use spread_grid::Grid;

use crate::convergence::HaltReason;

// ── GridStats ─────────────────────────────────────────────────────────────────

/// Occupancy tallies for one grid.
#[derive(Clone, PartialEq, Debug)]
pub struct GridStats {
    /// Cells occupied by an agent (unaffected or carrying).
    pub total_agents: u64,

    /// Cells carrying each behavior, indexed by `BehaviorId`.
    pub behavior_cells: Vec<u64>,

    /// Each behavior's share of all agents, as a percentage in `[0, 100]`.
    /// All zeros when the grid holds no agents.
    pub behavior_pct: Vec<f64>,
}

impl GridStats {
    /// Tally `grid` in one pass.
    pub fn measure(grid: &Grid, num_behaviors: u16) -> GridStats {
        let total_agents = grid.total_agents();
        let behavior_cells = grid.behavior_cells(num_behaviors);
        let behavior_pct = behavior_cells
            .iter()
            .map(|&n| {
                if total_agents == 0 {
                    0.0
                } else {
                    n as f64 / total_agents as f64 * 100.0
                }
            })
            .collect();
        GridStats { total_agents, behavior_cells, behavior_pct }
    }
}

// ── StepSnapshot ──────────────────────────────────────────────────────────────

/// Everything an external consumer needs about one completed step.
///
/// Borrows the freshly swapped-in grid for the duration of the observer
/// call; consumers that need the data past the callback must copy what they
/// keep.  Observers receive shared borrows only — there is no path from a
/// snapshot back into simulation state.
pub struct StepSnapshot<'a> {
    /// 1-based index of the step that just completed.
    pub step: Step,

    /// The grid after this step's transitions.
    pub grid: &'a Grid,

    /// Tallies of `grid`.
    pub stats: GridStats,

    /// `spreading[b]` is `true` if behavior `b` spread into at least one
    /// cell this step.
    pub spreading: &'a [bool],

    /// `true` on the run's final snapshot (converged or out of steps).
    pub done: bool,

    /// Why the run halted; `None` on every snapshot but the last.
    pub halt_reason: Option<HaltReason>,
}
