//! `spread-grid` — grid storage and initialization for the `rust_spread`
//! contagion framework.
//!
//! # What lives here
//!
//! | Module           | Contents                                            |
//! |------------------|-----------------------------------------------------|
//! | [`state`]        | `CellState` and its raw integer encoding            |
//! | [`grid`]         | `Grid` — flat row-major cell storage                |
//! | [`neighborhood`] | `Neighborhood` — 4-connected, edge-clamped sampling |
//! | [`init`]         | `GridInitializer` — density pass + origin placement |
//! | [`rngs`]         | `CellRngs` — per-cell deterministic RNG pool        |
//! | [`error`]        | `GridError`, `GridResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod grid;
pub mod init;
pub mod neighborhood;
pub mod rngs;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use init::GridInitializer;
pub use neighborhood::Neighborhood;
pub use rngs::CellRngs;
pub use state::CellState;
