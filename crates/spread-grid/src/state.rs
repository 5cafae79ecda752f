//! Cell states and their raw integer encoding.

use spread_core::BehaviorId;

/// The state of one grid cell.
///
/// The raw wire/output encoding is:
///
/// | Raw code | State                              |
/// |----------|------------------------------------|
/// | `0`      | `Empty` — no agent present         |
/// | `1`      | `Unaffected` — agent, no behavior  |
/// | `b + 2`  | `Carrying(BehaviorId(b))`          |
///
/// Internally the typed enum is used everywhere; [`code`][Self::code] /
/// [`from_code`][Self::from_code] convert at the output boundary.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// No agent occupies this cell.  Empty cells never change state.
    #[default]
    Empty,
    /// An agent occupies this cell but carries no behavior yet.
    Unaffected,
    /// An agent occupies this cell and carries the given behavior.
    Carrying(BehaviorId),
}

impl CellState {
    /// The raw integer code used in output rows.
    #[inline]
    pub fn code(self) -> u16 {
        match self {
            CellState::Empty       => 0,
            CellState::Unaffected  => 1,
            CellState::Carrying(b) => b.0 + 2,
        }
    }

    /// Decode a raw integer code.
    #[inline]
    pub fn from_code(code: u16) -> CellState {
        match code {
            0 => CellState::Empty,
            1 => CellState::Unaffected,
            c => CellState::Carrying(BehaviorId(c - 2)),
        }
    }

    /// `true` if an agent occupies this cell (unaffected or carrying).
    #[inline]
    pub fn is_agent(self) -> bool {
        !matches!(self, CellState::Empty)
    }

    /// The behavior carried, if any.
    #[inline]
    pub fn behavior(self) -> Option<BehaviorId> {
        match self {
            CellState::Carrying(b) => Some(b),
            _ => None,
        }
    }
}
