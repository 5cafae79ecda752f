//! `spread-sim` — step scheduler for the rust_spread contagion framework.
//!
//! # Step loop
//!
//! ```text
//! for step in 1..=config.max_steps:
//!   ① Scan      — for every cell, sample its 4 edge-clamped neighbors from
//!                 the *previous* grid and apply the transition rule
//!                 (parallel with the `parallel` feature).
//!   ② Collect   — assemble the freshly computed cells into a new grid and
//!                 note which behaviors spread into at least one cell.
//!   ③ Swap      — replace the active grid wholesale.
//!   ④ Snapshot  — emit a StepSnapshot (grid, tallies, spreading flags) to
//!                 the observer.
//!   ⑤ Halt?     — a step that spread nothing anywhere is a fixed point:
//!                 stop with HaltReason::Converged.  Exhausting max_steps
//!                 stops with HaltReason::StepLimit.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the cell scan on Rayon's thread pool.  Per-cell    |
//! |            | RNG streams keep results identical to the serial scan.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use spread_core::SimConfig;
//! use spread_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("halted after {} via {}", report.final_step, report.halt_reason);
//! ```

pub mod builder;
pub mod convergence;
pub mod error;
pub mod observer;
pub mod rule;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use convergence::{ConvergenceTracker, HaltReason, RunPhase};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use rule::{Transition, TransitionRule};
pub use sim::{RunReport, Sim};
pub use snapshot::{GridStats, StepSnapshot};
