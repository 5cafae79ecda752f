//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into flat `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Zero-based index of a behavior.  Behavior `b` occupies cell state code
    /// `b + 2` in the raw grid encoding (codes 0 and 1 are empty/unaffected).
    /// Using `u16` keeps tally arrays compact (max 65,535 behaviors).
    pub struct BehaviorId(u16);
}

typed_id! {
    /// Row-major index of a grid cell: `row * grid_size + col`.
    /// Max ~4.3 billion cells (a 65,535-wide square grid).
    pub struct CellId(u32);
}

impl CellId {
    /// Build a cell ID from `(row, col)` on a grid of side `size`.
    #[inline]
    pub fn from_coords(row: u32, col: u32, size: u32) -> CellId {
        CellId(row * size + col)
    }

    /// Recover `(row, col)` on a grid of side `size`.
    #[inline]
    pub fn coords(self, size: u32) -> (u32, u32) {
        (self.0 / size, self.0 % size)
    }
}
