//! 4-connected neighborhood sampling with edge clamping.

use crate::grid::Grid;
use crate::state::CellState;

/// The states of a cell's four orthogonal neighbors, in west/north/east/south
/// order.
///
/// # Edge policy
///
/// Out-of-range indices are clamped to the nearest valid index: a cell on the
/// west edge uses *itself* as its own west neighbor.  No wraparound, no
/// sentinel.  Boundary cells therefore have fewer effectively-distinct
/// neighbors — a deliberate topology choice, reproduced exactly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Neighborhood {
    pub west:  CellState,
    pub north: CellState,
    pub east:  CellState,
    pub south: CellState,
}

impl Neighborhood {
    /// Sample the neighborhood of `(row, col)` from `grid`.
    #[inline]
    pub fn sample(grid: &Grid, row: u32, col: u32) -> Neighborhood {
        let max = grid.size() - 1;
        Neighborhood {
            west:  grid.get(row, col.saturating_sub(1)),
            north: grid.get(row.saturating_sub(1), col),
            east:  grid.get(row, (col + 1).min(max)),
            south: grid.get((row + 1).min(max), col),
        }
    }

    /// `true` if any of the four neighbors is in `state`.
    #[inline]
    pub fn contains(&self, state: CellState) -> bool {
        self.west == state || self.north == state || self.east == state || self.south == state
    }

    /// The four states as an array, in west/north/east/south order.
    #[inline]
    pub fn as_array(&self) -> [CellState; 4] {
        [self.west, self.north, self.east, self.south]
    }
}
