//! Simulation configuration.
//!
//! A `SimConfig` is immutable for the duration of a run and is the only input
//! the engine needs: grid shape, behavior count, transition probabilities,
//! seeding plan, and the RNG seed.  Every field is validated up front by
//! [`SimConfig::validate`]; a config that passes validation cannot produce a
//! runtime error during stepping (the transition rule is total).

use crate::error::{ConfigError, ConfigResult};
use crate::ids::BehaviorId;
use crate::step::Step;

/// Top-level simulation configuration.
///
/// Typically constructed literally by the application and handed to
/// `SimBuilder`; a config file layer can deserialize it directly with the
/// `serde` feature enabled.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Side length of the square grid.  Must be ≥ 1.
    pub grid_size: u32,

    /// Hard upper bound on the number of steps.  The run may halt earlier if
    /// a step spreads nothing anywhere (convergence).  Must be ≥ 1.
    pub max_steps: u64,

    /// Number of distinct, mutually exclusive behaviors.  Must be ≥ 1.
    pub num_behaviors: u16,

    /// Probability that an unaffected agent adopts a behavior carried by at
    /// least one neighbor.  Must lie in `[0, 1]`.
    pub prob_unaffected: f64,

    /// Probability that an agent already carrying a behavior switches to a
    /// different one carried by at least one neighbor.  Must lie in `[0, 1]`.
    pub prob_affected: f64,

    /// Fraction of cells initially occupied by an agent.  Must lie in `[0, 1]`.
    pub initial_agents_density: f64,

    /// How many origin cells to seed per behavior, indexed by `BehaviorId`.
    /// Must have exactly `num_behaviors` entries; entries may be zero.
    pub origins_per_behavior: Vec<u32>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon (`parallel` feature only).
    /// `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// Reject any parameter the engine cannot run with.
    ///
    /// All violations are fatal and detected before a grid exists.  NaN
    /// probabilities fail the unit-range check.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::NonPositive { name: "grid_size", got: 0 });
        }
        if self.max_steps == 0 {
            return Err(ConfigError::NonPositive { name: "max_steps", got: 0 });
        }
        if self.num_behaviors == 0 {
            return Err(ConfigError::NonPositive { name: "num_behaviors", got: 0 });
        }

        for (name, p) in [
            ("prob_unaffected",        self.prob_unaffected),
            ("prob_affected",          self.prob_affected),
            ("initial_agents_density", self.initial_agents_density),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::OutOfUnitRange { name, got: p });
            }
        }

        if self.origins_per_behavior.len() != self.num_behaviors as usize {
            return Err(ConfigError::OriginsMismatch {
                expected: self.num_behaviors,
                got:      self.origins_per_behavior.len(),
            });
        }

        Ok(())
    }

    /// Total number of cells (`grid_size²`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    /// The step at which the run is cut off (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.max_steps)
    }

    /// All behavior IDs in ascending order — the candidate order of the
    /// transition rule.
    pub fn behavior_ids(&self) -> impl Iterator<Item = BehaviorId> + '_ {
        (0..self.num_behaviors).map(BehaviorId)
    }

    /// Total origins requested across all behaviors.
    pub fn total_origins(&self) -> u64 {
        self.origins_per_behavior.iter().map(|&n| n as u64).sum()
    }
}
