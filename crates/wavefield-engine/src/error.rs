//! Engine error types.

use thiserror::Error;
use wavefield_arena::ArenaError;
use wavefield_core::ConfigError;

/// Errors returned by [`run()`](crate::run) and the executors.
///
/// None of these are retried: the computation is deterministic, so a
/// failed run is reported and abandoned.
#[derive(Debug, Error)]
pub enum SimError {
    /// A run parameter is out of range.
    #[error("argument error: {0}")]
    InvalidArgument(#[from] ConfigError),
    /// The supplied buffers do not form a valid generation triple.
    #[error("buffer error: {0}")]
    InvalidBuffers(#[from] ArenaError),
    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    WorkerSpawn {
        /// Index of the worker that could not be started.
        worker: usize,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },
    /// A worker thread panicked during its update.
    #[error("worker {worker} panicked")]
    WorkerPanicked {
        /// Index of the first worker found to have panicked.
        worker: usize,
    },
    /// The rayon pool could not be built.
    #[error("failed to build thread pool: {reason}")]
    ThreadPool {
        /// Description from rayon.
        reason: String,
    },
}

impl SimError {
    /// Whether this is an argument error detected before any buffer work.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidBuffers(_))
    }
}
