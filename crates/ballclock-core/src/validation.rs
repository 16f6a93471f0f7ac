//! Invariant checks and state comparison.
//!
//! Provides the conservation check behind [`BallClock::validate`], a
//! container-level diff between two clocks, and a determinism check that runs
//! two identical clocks side by side.

use crate::clock::BallClock;
use crate::error::ClockError;
use crate::id::TrackKind;

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

/// Check that every ball `1..=ball_count` appears exactly once across the
/// queue and tracks, and that no track exceeds its capacity.
pub fn validate_clock(clock: &BallClock) -> Result<(), ClockError> {
    let ball_count = clock.ball_count() as usize;

    for kind in TrackKind::CASCADE {
        let track = clock.track(kind);
        if track.len() > track.capacity() {
            return Err(ClockError::InternalInconsistency(format!(
                "{kind} track holds {} balls, capacity {}",
                track.len(),
                track.capacity()
            )));
        }
    }

    let mut seen = vec![false; ball_count + 1];
    let mut total = 0usize;
    let placed = TrackKind::CASCADE
        .into_iter()
        .flat_map(|kind| clock.track(kind).balls().iter().copied())
        .chain(clock.queue());
    for ball in placed {
        total += 1;
        let index = ball.0 as usize;
        if index == 0 || index > ball_count {
            return Err(ClockError::InternalInconsistency(format!(
                "ball {ball} is outside 1..={ball_count}"
            )));
        }
        if seen[index] {
            return Err(ClockError::InternalInconsistency(format!(
                "ball {ball} appears more than once"
            )));
        }
        seen[index] = true;
    }

    if total != ball_count {
        return Err(ClockError::InternalInconsistency(format!(
            "{total} balls present, expected {ball_count}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// State diff
// ---------------------------------------------------------------------------

/// Per-container match results between two clocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDiff {
    pub is_identical: bool,
    pub minute_matches: bool,
    pub five_minute_matches: bool,
    pub hour_matches: bool,
    pub queue_matches: bool,
}

/// Compare two clocks container by container.
pub fn diff_clocks(a: &BallClock, b: &BallClock) -> StateDiff {
    let track_matches = |kind| a.track(kind).balls() == b.track(kind).balls();
    let minute_matches = track_matches(TrackKind::Minute);
    let five_minute_matches = track_matches(TrackKind::FiveMinute);
    let hour_matches = track_matches(TrackKind::Hour);
    let queue_matches = a.queue().eq(b.queue());

    StateDiff {
        is_identical: minute_matches && five_minute_matches && hour_matches && queue_matches,
        minute_matches,
        five_minute_matches,
        hour_matches,
        queue_matches,
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

/// Result of a determinism check.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether both runs stayed identical for every minute.
    pub is_deterministic: bool,
    /// Minute at which the runs first diverged (if any).
    pub divergence_minute: Option<u64>,
}

/// Build two clocks with `ball_count` balls and run them side by side for
/// `minutes` minutes, comparing them after every minute.
pub fn validate_determinism(
    ball_count: u32,
    minutes: u64,
) -> Result<DeterminismResult, ClockError> {
    let mut clock_a = BallClock::new(ball_count)?;
    let mut clock_b = BallClock::new(ball_count)?;

    let mut divergence_minute = None;
    for _ in 0..minutes {
        clock_a.tick()?;
        clock_b.tick()?;
        if !diff_clocks(&clock_a, &clock_b).is_identical {
            divergence_minute = Some(clock_a.elapsed_minutes());
            break;
        }
    }

    Ok(DeterminismResult {
        is_deterministic: divergence_minute.is_none(),
        divergence_minute,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
