//! Per-step and per-advance result types.
//!
//! [`crate::clock::BallClock::tick`] reports where the released ball ended
//! up and which tracks tripped on the way. [`crate::clock::BallClock::advance`]
//! aggregates those reports over many minutes.

use crate::id::{BallId, TrackKind};

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u64 = 1440;

// ---------------------------------------------------------------------------
// Tick result
// ---------------------------------------------------------------------------

/// Where the ball taken from the queue came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// The ball took a slot on this track.
    Track(TrackKind),
    /// Every track overflowed; the ball went to the back of the queue behind
    /// the dumped hour balls.
    Queue,
}

/// Outcome of a single minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The ball released from the front of the queue.
    pub ball: BallId,
    /// Where that ball ended up.
    pub landing: Landing,
    /// Tracks that overflowed this minute, in cascade order. Overflows always
    /// start at the minute track, so this is a prefix of [`TrackKind::CASCADE`].
    pub overflowed: &'static [TrackKind],
}

impl TickResult {
    /// True when the ball rolled all the way back to the queue, i.e. the
    /// clock just passed 12:59 and reads 1:00 again.
    pub fn wrapped(&self) -> bool {
        self.landing == Landing::Queue
    }
}

// ---------------------------------------------------------------------------
// Advance result
// ---------------------------------------------------------------------------

/// Result of a [`crate::clock::BallClock::advance`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceResult {
    /// Number of minutes actually simulated.
    pub ticks_run: u64,
    /// Overflow count per track, indexed by [`TrackKind::index`].
    pub overflows: [u64; 3],
}

impl AdvanceResult {
    /// Fold one tick's outcome into the totals.
    pub fn record(&mut self, tick: &TickResult) {
        self.ticks_run += 1;
        for kind in tick.overflowed {
            self.overflows[kind.index()] += 1;
        }
    }

    /// Number of times the given track dumped its balls.
    pub fn overflows_of(&self, kind: TrackKind) -> u64 {
        self.overflows[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_result_starts_empty() {
        let result = AdvanceResult::default();
        assert_eq!(result.ticks_run, 0);
        assert_eq!(result.overflows, [0, 0, 0]);
    }

    #[test]
    fn record_counts_each_overflow() {
        let mut result = AdvanceResult::default();
        result.record(&TickResult {
            ball: BallId(1),
            landing: Landing::Track(TrackKind::Minute),
            overflowed: &[],
        });
        result.record(&TickResult {
            ball: BallId(2),
            landing: Landing::Queue,
            overflowed: &TrackKind::CASCADE,
        });

        assert_eq!(result.ticks_run, 2);
        assert_eq!(result.overflows_of(TrackKind::Minute), 1);
        assert_eq!(result.overflows_of(TrackKind::FiveMinute), 1);
        assert_eq!(result.overflows_of(TrackKind::Hour), 1);
    }

    #[test]
    fn wrapped_only_when_ball_returns_to_queue() {
        let placed = TickResult {
            ball: BallId(5),
            landing: Landing::Track(TrackKind::Hour),
            overflowed: TrackKind::cascade_prefix(2),
        };
        assert!(!placed.wrapped());
    }
}
