//! Fluent builder for constructing a [`Sim`].

use spread_core::{SimConfig, SimRng, Step};
use spread_grid::{CellRngs, Grid, GridError, GridInitializer};

use crate::convergence::RunPhase;
use crate::rule::TransitionRule;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// Validates the configuration (every setup error surfaces here, before a
/// single step runs), seeds the initial grid, and allocates the per-cell RNG
/// pool.
///
/// # Optional inputs
///
/// | Method             | Default                                      |
/// |--------------------|----------------------------------------------|
/// | `.initial_grid(g)` | Seed via [`GridInitializer`] from the config |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    initial_grid: Option<Grid>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, initial_grid: None }
    }

    /// Start from a caller-supplied grid instead of random initialization.
    ///
    /// Useful for tests and replaying known layouts.  The grid must match
    /// `config.grid_size` and may only carry behaviors below
    /// `config.num_behaviors`.
    pub fn initial_grid(mut self, grid: Grid) -> Self {
        self.initial_grid = Some(grid);
        self
    }

    /// Validate, initialize, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let (grid, rngs) = match self.initial_grid {
            Some(grid) => {
                if grid.size() != self.config.grid_size {
                    return Err(GridError::SizeMismatch {
                        expected_cells: self.config.cell_count(),
                        got:            grid.len(),
                    }
                    .into());
                }
                grid.validate_behaviors(self.config.num_behaviors)?;
                let rngs = CellRngs::new(grid.len(), self.config.seed);
                (grid, rngs)
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                GridInitializer::new(&self.config).build(&mut rng)?
            }
        };

        Ok(Sim {
            rule:  TransitionRule::from_config(&self.config),
            config: self.config,
            grid,
            rngs,
            step:  Step::ZERO,
            phase: RunPhase::Initialized,
        })
    }
}
