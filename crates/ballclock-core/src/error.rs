//! Error types for clock construction and simulation.

use crate::clock::{MAX_BALL_COUNT, MIN_BALL_COUNT};

/// Errors surfaced by [`crate::clock::BallClock`] and the cycle search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Ball count outside the supported range.
    #[error("invalid ball count {count}: must be from {MIN_BALL_COUNT} to {MAX_BALL_COUNT}")]
    InvalidBallCount { count: i64 },

    /// A negative number of minutes was requested.
    #[error("invalid duration {minutes}: minutes must not be negative")]
    NegativeDuration { minutes: i64 },

    /// The clock state violates its own invariants. Indicates a bug, never
    /// bad input.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// The cycle search ran past its safety bound without returning to 12:00.
    #[error("clock did not return to its default state within {max_days} days")]
    CycleLimitExceeded { max_days: u64 },
}

impl ClockError {
    /// Whether this error was caused by a caller-supplied argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ClockError::InvalidBallCount { .. } | ClockError::NegativeDuration { .. }
        )
    }
}
