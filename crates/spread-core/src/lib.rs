//! `spread-core` — foundational types for the `rust_spread` contagion
//! framework.
//!
//! This crate is a dependency of every other `spread-*` crate.  It
//! intentionally has no `spread-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `BehaviorId`, `CellId`                         |
//! | [`step`]   | `Step` counter                                 |
//! | [`config`] | `SimConfig` and its fail-fast validation       |
//! | [`rng`]    | `CellRng` (per-cell), `SimRng` (run-level)     |
//! | [`error`]  | `ConfigError`, `ConfigResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{ConfigError, ConfigResult};
pub use ids::{BehaviorId, CellId};
pub use rng::{CellRng, SimRng};
pub use step::Step;
