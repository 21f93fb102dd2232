//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReplayMemoryError {
    /// More distinct anchors were requested than the memory currently holds.
    #[error("Insufficient valid samples: requested {requested}, available {available}")]
    InsufficientValidSamples {
        /// Requested batch size.
        requested: usize,
        /// Number of valid anchors at the time of the request.
        available: usize,
    },

    /// Malformed configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An observation whose spatial shape differs from the configured frame
    /// shape, or that has no channel.
    #[error("Frame shape mismatch: expected {expected:?}, found {found:?}")]
    FrameShapeMismatch {
        /// `(height, width)` of the configured frame.
        expected: (usize, usize),
        /// `(height, width)` of the given observation.
        found: (usize, usize),
    },

    /// A thread panicked while holding the lock of a shared memory.
    #[error("Replay memory lock poisoned")]
    LockPoisoned,
}
