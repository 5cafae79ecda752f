//! The per-cell stochastic transition rule.

use spread_core::{BehaviorId, CellRng, SimConfig};
use spread_grid::{CellState, Neighborhood};

/// The outcome of evaluating one cell for one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Transition {
    /// The cell's state in the next grid.  Defaults to the current state
    /// when no candidate fires.
    pub next: CellState,

    /// The behavior that newly spread into this cell, if any.
    ///
    /// `Some(b)` exactly when the cell transitioned — from unaffected or
    /// from a different behavior — into `Carrying(b)` this step.
    pub adopted: Option<BehaviorId>,
}

impl Transition {
    #[inline]
    fn keep(state: CellState) -> Transition {
        Transition { next: state, adopted: None }
    }
}

/// Decides a cell's next state from its current state and its neighborhood.
///
/// Candidates are evaluated in ascending [`BehaviorId`] order and the first
/// match wins; when several neighbor behaviors qualify in the same step the
/// tie-break is therefore the lowest behavior index.  Each candidate that is
/// reached and has a carrying neighbor consumes exactly one fresh draw from
/// the cell's own RNG stream; candidates after the first match draw nothing.
///
/// The rule is total: every input yields a defined next state, so stepping
/// can never fail at runtime.
#[derive(Clone, Debug)]
pub struct TransitionRule {
    num_behaviors:   u16,
    prob_unaffected: f64,
    prob_affected:   f64,
}

impl TransitionRule {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            num_behaviors:   config.num_behaviors,
            prob_unaffected: config.prob_unaffected,
            prob_affected:   config.prob_affected,
        }
    }

    /// Evaluate one cell against the previous step's grid.
    pub fn next_state(
        &self,
        current:   CellState,
        neighbors: &Neighborhood,
        rng:       &mut CellRng,
    ) -> Transition {
        // Empty cells never change: the rule relabels agents, it does not
        // create or remove them.
        let adopt_prob = match current {
            CellState::Empty       => return Transition::keep(current),
            CellState::Unaffected  => self.prob_unaffected,
            CellState::Carrying(_) => self.prob_affected,
        };

        for b in (0..self.num_behaviors).map(BehaviorId) {
            let candidate = CellState::Carrying(b);
            // An agent cannot adopt the behavior it already carries.
            if current == candidate {
                continue;
            }
            if neighbors.contains(candidate) && rng.gen_bool(adopt_prob) {
                return Transition { next: candidate, adopted: Some(b) };
            }
        }

        Transition::keep(current)
    }
}
