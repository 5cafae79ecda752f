//! Simulation observer trait for progress reporting and data collection.

use spread_core::Step;

use crate::convergence::HaltReason;
use crate::snapshot::StepSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at step boundaries.
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.  Rendering, statistics overlays, file
/// output, and pacing all live behind this trait; none of it can influence
/// the simulation (snapshots are shared borrows).
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step(&mut self, snap: &StepSnapshot<'_>) {
///         println!("{}: {} agents", snap.step, snap.stats.total_agents);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per completed step, after the new grid is swapped in.
    fn on_step(&mut self, _snapshot: &StepSnapshot<'_>) {}

    /// Called once after the final step, with the halt reason.
    fn on_sim_end(&mut self, _final_step: Step, _reason: HaltReason) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
