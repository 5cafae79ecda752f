//! Error types for spread-grid.

use spread_core::BehaviorId;
use thiserror::Error;

/// Errors raised while building or validating a grid.
///
/// All variants are fatal setup errors: once a grid exists, stepping over it
/// cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Origin placement ran out of unaffected cells.
    ///
    /// Raised instead of retrying: origins are sampled from the finite pool
    /// of cells still unaffected, so exhaustion is detected up front rather
    /// than by a sampling loop that can never terminate.
    #[error(
        "cannot place {requested} origin(s) for {behavior}: only {available} unaffected cell(s) left"
    )]
    InsufficientUnaffectedCells {
        behavior:  BehaviorId,
        requested: u32,
        available: usize,
    },

    /// A caller-supplied cell buffer does not match `grid_size²`.
    #[error("grid expects {expected_cells} cells, got {got}")]
    SizeMismatch { expected_cells: usize, got: usize },

    /// A caller-supplied grid carries a behavior the configuration does not
    /// know about.
    #[error("{behavior} out of range: configuration has {num_behaviors} behavior(s)")]
    BehaviorOutOfRange {
        behavior:      BehaviorId,
        num_behaviors: u16,
    },
}

/// Shorthand result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;
