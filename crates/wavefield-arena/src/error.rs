//! Arena-specific error types.

use thiserror::Error;

use crate::rotation::Role;

/// Errors raised while building a [`GenerationArena`](crate::GenerationArena).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// A buffer is too short to hold any interior point.
    #[error("buffers must hold at least 3 samples, got {len}")]
    TooShort {
        /// Length of the offending buffer.
        len: usize,
    },
    /// A buffer's length does not match the run's `i_max`.
    #[error("{role} buffer has {actual} samples, expected {expected}")]
    LengthMismatch {
        /// Role of the offending buffer at construction time.
        role: Role,
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },
}
