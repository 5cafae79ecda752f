//! Configuration error type.
//!
//! Sub-crates define their own error enums and either convert `ConfigError`
//! into them via `From` impls or wrap it as one variant.  All variants here
//! are fatal: they are raised before any grid is built and the run never
//! starts.

use thiserror::Error;

/// A rejected [`SimConfig`][crate::SimConfig].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An integer parameter that must be at least 1 was zero.
    #[error("{name} must be positive, got {got}")]
    NonPositive { name: &'static str, got: u64 },

    /// A probability or density outside the unit interval (or NaN).
    #[error("{name} must lie in [0, 1], got {got}")]
    OutOfUnitRange { name: &'static str, got: f64 },

    /// `origins_per_behavior` does not have one entry per behavior.
    #[error("origins_per_behavior has {got} entries but num_behaviors is {expected}")]
    OriginsMismatch { expected: u16, got: usize },
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
