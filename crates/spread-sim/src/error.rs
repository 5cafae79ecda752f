use spread_core::ConfigError;
use spread_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("grid setup failed: {0}")]
    Grid(#[from] GridError),

    /// `run` was called on a simulation that already reached a terminal
    /// phase.  Build a new `Sim` to start over; a finished run's grid and
    /// RNG state are not reusable.
    #[error("simulation already finished; build a new one to run again")]
    RunFinished,
}

pub type SimResult<T> = Result<T, SimError>;
