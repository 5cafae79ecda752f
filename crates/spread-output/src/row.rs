//! Plain data row types written by output backends.

/// One cell of a grid dump at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRow {
    pub step:     u64,
    pub cell_row: u32,
    pub cell_col: u32,
    /// Raw state code: 0 = empty, 1 = unaffected, `b + 2` = behavior `b`.
    pub state:    u16,
}

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:         u64,
    pub total_agents: u64,
    /// `true` on the run's final step.
    pub done:         bool,
    /// `"converged"`, `"max_steps"`, or empty while the run is still going.
    pub halt_reason:  &'static str,
}

/// One behavior's tally at a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorCountRow {
    pub step:      u64,
    pub behavior:  u16,
    /// Cells carrying this behavior.
    pub cells:     u64,
    /// Share of all agents, in `[0, 100]`.
    pub pct:       f64,
    /// Whether the behavior spread into at least one cell this step.
    pub spreading: bool,
}
