//! Flat row-major grid storage.

use spread_core::CellId;

use crate::error::{GridError, GridResult};
use crate::state::CellState;

/// A square grid of cell states.
///
/// Storage is a single flat `Vec<CellState>` in row-major order, indexed by
/// [`CellId`].  The step loop never mutates a grid while it is being read:
/// each step computes a complete replacement grid and swaps it in wholesale.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size:  u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-empty grid of side `size`.
    pub fn new_empty(size: u32) -> Grid {
        Grid {
            size,
            cells: vec![CellState::Empty; (size as usize) * (size as usize)],
        }
    }

    /// Wrap a pre-computed cell buffer.
    ///
    /// Fails with [`GridError::SizeMismatch`] unless `cells.len() == size²`.
    pub fn from_cells(size: u32, cells: Vec<CellState>) -> GridResult<Grid> {
        let expected = (size as usize) * (size as usize);
        if cells.len() != expected {
            return Err(GridError::SizeMismatch { expected_cells: expected, got: cells.len() });
        }
        Ok(Grid { size, cells })
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (`size²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell state at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of range — callers iterate the
    /// grid's own coordinate space, so this indicates a bug, not bad input.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> CellState {
        self.cells[(row * self.size + col) as usize]
    }

    /// Cell state by flat ID.
    #[inline]
    pub fn get_id(&self, cell: CellId) -> CellState {
        self.cells[cell.index()]
    }

    /// Overwrite the state at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, state: CellState) {
        self.cells[(row * self.size + col) as usize] = state;
    }

    /// The raw cell buffer in row-major order.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate `(CellId, CellState)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (CellId(i as u32), s))
    }

    /// Number of cells occupied by an agent (unaffected or carrying).
    pub fn total_agents(&self) -> u64 {
        self.cells.iter().filter(|s| s.is_agent()).count() as u64
    }

    /// Number of cells carrying each behavior, indexed by `BehaviorId`.
    ///
    /// The returned `Vec` has `num_behaviors` entries even when some
    /// behaviors occupy no cells.
    pub fn behavior_cells(&self, num_behaviors: u16) -> Vec<u64> {
        let mut tally = vec![0u64; num_behaviors as usize];
        for state in &self.cells {
            if let Some(b) = state.behavior() {
                tally[b.index()] += 1;
            }
        }
        tally
    }

    /// Check every carried behavior against the configured behavior count.
    ///
    /// Used when a caller supplies its own initial grid.
    pub fn validate_behaviors(&self, num_behaviors: u16) -> GridResult<()> {
        for state in &self.cells {
            if let Some(b) = state.behavior() {
                if b.0 >= num_behaviors {
                    return Err(GridError::BehaviorOutOfRange { behavior: b, num_behaviors });
                }
            }
        }
        Ok(())
    }

    /// Count cells in exactly `state` — test and diagnostics helper.
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}
