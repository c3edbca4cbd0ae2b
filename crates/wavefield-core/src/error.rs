//! Error types for run configuration.

use thiserror::Error;

/// Errors detected by [`RunConfig::validate()`](crate::RunConfig::validate).
///
/// Every variant is an argument error: it is reported before any buffer
/// work begins and is never recovered internally.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Fewer than three samples leaves no interior point to update.
    #[error("i_max should be >2, got {i_max}")]
    GridTooSmall {
        /// The configured sample count.
        i_max: usize,
    },
    /// A run must execute at least one time step.
    #[error("t_max should be >=1, got {t_max}")]
    NoSteps {
        /// The configured step count.
        t_max: usize,
    },
    /// A run needs at least one worker.
    #[error("num_workers should be >=1, got {num_workers}")]
    NoWorkers {
        /// The configured worker count.
        num_workers: usize,
    },
    /// The coupling coefficient is NaN or infinite.
    #[error("coupling must be finite, got {value}")]
    InvalidCoupling {
        /// The invalid value.
        value: f64,
    },
}

/// Error returned when parsing an unknown [`Strategy`](crate::Strategy) name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown strategy '{name}' (expected one of: sequential, transient, barrier, rayon)")]
pub struct ParseStrategyError {
    /// The rejected input.
    pub name: String,
}
