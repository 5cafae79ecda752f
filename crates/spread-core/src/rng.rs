//! Deterministic per-cell and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each grid cell gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (cell_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive cell indices uniformly across the seed space.
//! This means:
//!
//! - A cell's draw sequence depends only on the grid states it observes,
//!   never on the scan order — row-major and parallel scans produce
//!   identical runs.
//! - Cells never share RNG state, so the per-step scan can be parallelized
//!   without synchronisation or loss of reproducibility.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CellId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── CellRng ───────────────────────────────────────────────────────────────────

/// Per-cell deterministic RNG.
///
/// One is created per cell at initialization and stored in a flat
/// `Vec<CellRng>` parallel to the grid.  The type is `!Sync` to prevent
/// accidental sharing across threads — each Rayon worker gets exclusive
/// access to its own cells' RNGs.
pub struct CellRng(SmallRng);

impl CellRng {
    /// Seed deterministically from the run's global seed and a cell ID.
    pub fn new(global_seed: u64, cell: CellId) -> Self {
        let seed = global_seed ^ (cell.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CellRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// One call consumes exactly one draw from this cell's stream.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for global operations: the initial density pass and origin
/// placement.
///
/// Used only in single-threaded contexts (initialization happens before the
/// step loop starts).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
