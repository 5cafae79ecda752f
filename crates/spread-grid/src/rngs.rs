//! Per-cell deterministic RNG pool.
//!
//! # Why a separate struct?
//!
//! The step loop needs `&mut CellRngs` (exclusive mutable access to each
//! cell's RNG) and `&Grid` (shared read access to the previous step's states)
//! simultaneously.  Keeping the RNGs outside the grid resolves the borrow
//! cleanly, and mirrors the wholesale-replacement lifecycle: grids come and
//! go every step, the RNG pool lives for the whole run.

use spread_core::{CellId, CellRng};

/// One deterministic RNG per grid cell, indexed by [`CellId`].
///
/// `CellRngs` is `Send` but intentionally not `Sync` — per-cell RNG state
/// must never be shared between threads.  Rayon's `par_iter_mut()` hands each
/// worker exclusive access to disjoint elements.
pub struct CellRngs {
    pub inner: Vec<CellRng>,
}

impl std::fmt::Debug for CellRngs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellRngs")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl CellRngs {
    /// Allocate and seed `count` per-cell RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| CellRng::new(global_seed, CellId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one cell's RNG.
    #[inline]
    pub fn get_mut(&mut self, cell: CellId) -> &mut CellRng {
        &mut self.inner[cell.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
