//! Grid initialization: density pass and origin placement.

use spread_core::{BehaviorId, CellId, SimConfig, SimRng};

use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::rngs::CellRngs;
use crate::state::CellState;

/// Builds the initial grid and the per-cell RNG pool for a run.
///
/// Two passes over the configuration:
///
/// 1. **Density pass** — every cell independently becomes `Unaffected` with
///    probability `initial_agents_density`, else stays `Empty`.
/// 2. **Origin placement** — for each behavior in ascending `BehaviorId`
///    order, `origins_per_behavior[b]` cells are drawn uniformly *without
///    replacement* from the pool of cells still `Unaffected` and flipped to
///    `Carrying(b)`.  The pool shrinks as origins are placed, so a cell can
///    never be seeded twice, within or across behaviors.
///
/// Running out of pool while origins remain fails with
/// [`GridError::InsufficientUnaffectedCells`] — exhaustion is a checked
/// error, not a sampling loop.
pub struct GridInitializer<'a> {
    config: &'a SimConfig,
}

impl<'a> GridInitializer<'a> {
    /// The configuration must already have passed [`SimConfig::validate`].
    pub fn new(config: &'a SimConfig) -> Self {
        Self { config }
    }

    /// Produce the initial grid and the per-cell RNG pool.
    ///
    /// Consumes draws from `rng` only; per-cell streams are untouched until
    /// the first step.
    pub fn build(&self, rng: &mut SimRng) -> GridResult<(Grid, CellRngs)> {
        let size = self.config.grid_size;
        let mut grid = Grid::new_empty(size);

        // ── Density pass ──────────────────────────────────────────────────
        //
        // Row-major so a fixed seed yields a fixed initial layout.
        let mut pool: Vec<CellId> = Vec::new();
        for row in 0..size {
            for col in 0..size {
                if rng.gen_bool(self.config.initial_agents_density) {
                    grid.set(row, col, CellState::Unaffected);
                    pool.push(CellId::from_coords(row, col, size));
                }
            }
        }

        // ── Origin placement ──────────────────────────────────────────────
        for (b, &requested) in self.config.origins_per_behavior.iter().enumerate() {
            let behavior = BehaviorId(b as u16);
            if (pool.len() as u64) < requested as u64 {
                return Err(GridError::InsufficientUnaffectedCells {
                    behavior,
                    requested,
                    available: pool.len(),
                });
            }
            for _ in 0..requested {
                let pick = rng.gen_range(0..pool.len());
                let cell = pool.swap_remove(pick);
                let (row, col) = cell.coords(size);
                grid.set(row, col, CellState::Carrying(behavior));
            }
        }

        let rngs = CellRngs::new(grid.len(), self.config.seed);
        Ok((grid, rngs))
    }
}
