//! Cycle-length search: how many days until a clock reads 12:00 with every
//! ball back where it started.
//!
//! [`days_until_default`] simulates the clock minute by minute and compares
//! the full layout against the recorded default each time the dial reads 12:00.
//! [`days_until_default_by_permutation`] computes the same number without
//! simulating every day: one day of running maps the start-of-day layout onto
//! itself as a permutation of ball positions, and the clock first returns to
//! its default layout after the least common multiple of that permutation's
//! cycle lengths.

use std::ops::RangeInclusive;

use tracing::{debug, info};

use crate::clock::{BallClock, validate_ball_count};
use crate::error::ClockError;
use crate::id::{BallId, TrackKind};
use crate::sim::MINUTES_PER_DAY;

/// Days between progress messages during a long search.
const PROGRESS_INTERVAL_DAYS: u64 = 10_000;

/// Minutes between two readings of 12:00 on the dial.
const HALF_DAY: u64 = MINUTES_PER_DAY / 2;

/// Run `clock` forward until its layout matches its default state, and return
/// the number of days that took.
///
/// The layout is compared each time the dial reads 12:00, never in between
/// and never before the first minute. A clock restored part way through a day
/// first runs to its next 12:00, so the result counts started days: the
/// minutes run, rounded up to whole days. A clock built at 12:00 only ever
/// matches on a day boundary. The clock is advanced in place and is left in
/// its default state on success. Gives up with
/// [`ClockError::CycleLimitExceeded`] once the next check would fall beyond
/// [`BallClock::max_days`] days.
pub fn days_until_default(clock: &mut BallClock) -> Result<u64, ClockError> {
    let max_days = clock.max_days();
    let limit = max_days.saturating_mul(MINUTES_PER_DAY);
    let lead = clock.time().minutes_until_twelve();
    debug!(ball_count = clock.ball_count(), max_days, lead, "searching for cycle length");

    let mut check_at = if lead == 0 { HALF_DAY } else { lead };
    let mut minutes = 0u64;
    let mut next_progress = PROGRESS_INTERVAL_DAYS.saturating_mul(MINUTES_PER_DAY);
    while check_at <= limit {
        while minutes < check_at {
            clock.tick()?;
            minutes += 1;
        }
        if clock.is_default_state() {
            let days = minutes.div_ceil(MINUTES_PER_DAY);
            info!(ball_count = clock.ball_count(), days, "clock returned to 12:00");
            return Ok(days);
        }
        if minutes >= next_progress {
            debug!(
                ball_count = clock.ball_count(),
                day = minutes / MINUTES_PER_DAY,
                "cycle search still running"
            );
            next_progress = next_progress.saturating_add(PROGRESS_INTERVAL_DAYS * MINUTES_PER_DAY);
        }
        check_at = match check_at.checked_add(HALF_DAY) {
            Some(next) => next,
            None => break,
        };
    }

    Err(ClockError::CycleLimitExceeded { max_days })
}

/// Cycle length in days for `ball_count` balls, via the one-day permutation.
pub fn days_until_default_by_permutation(ball_count: u32) -> Result<u64, ClockError> {
    let mut clock = BallClock::new(ball_count)?;
    let start = layout_order(&clock);
    clock.advance(MINUTES_PER_DAY as i64)?;
    if !clock.track(TrackKind::Minute).is_empty()
        || !clock.track(TrackKind::FiveMinute).is_empty()
        || !clock.track(TrackKind::Hour).is_full()
    {
        return Err(ClockError::InternalInconsistency(format!(
            "clock reads {} after a full day",
            clock.time()
        )));
    }
    let end = layout_order(&clock);

    // `position[b]` is where ball `b` sat at the start of the day.
    let mut position = vec![0usize; ball_count as usize + 1];
    for (pos, ball) in start.iter().enumerate() {
        position[ball.0 as usize] = pos;
    }
    // `next[p]` is where the ball that started at `p` sits after one day.
    let mut next = vec![0usize; start.len()];
    for (pos, ball) in end.iter().enumerate() {
        next[position[ball.0 as usize]] = pos;
    }

    let mut seen = vec![false; next.len()];
    let mut days = 1u64;
    for origin in 0..next.len() {
        if seen[origin] {
            continue;
        }
        let mut length = 0u64;
        let mut p = origin;
        while !seen[p] {
            seen[p] = true;
            p = next[p];
            length += 1;
        }
        days = lcm(days, length);
    }
    Ok(days)
}

/// Cycle lengths for every ball count in `range`, in ascending order.
pub fn cycle_table(range: RangeInclusive<u32>) -> Result<Vec<(u32, u64)>, ClockError> {
    validate_ball_count(i64::from(*range.start()))?;
    validate_ball_count(i64::from(*range.end()))?;
    range
        .map(|count| Ok((count, days_until_default_by_permutation(count)?)))
        .collect()
}

/// Start-of-day positions: hour track first, then the queue front to back.
/// The minute and five-minute tracks are empty at that point.
fn layout_order(clock: &BallClock) -> Vec<BallId> {
    clock
        .track(TrackKind::Hour)
        .balls()
        .iter()
        .copied()
        .chain(clock.queue())
        .collect()
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_balls_cycle_in_fifteen_days() {
        let mut clock = BallClock::new(30).unwrap();
        assert_eq!(days_until_default(&mut clock).unwrap(), 15);
        assert!(clock.is_default_state());
        assert_eq!(clock.elapsed_minutes(), 15 * MINUTES_PER_DAY);
    }

    #[test]
    fn forty_five_balls_cycle_in_378_days() {
        let mut clock = BallClock::new(45).unwrap();
        assert_eq!(days_until_default(&mut clock).unwrap(), 378);
    }

    #[test]
    fn permutation_matches_fixtures() {
        assert_eq!(days_until_default_by_permutation(30).unwrap(), 15);
        assert_eq!(days_until_default_by_permutation(45).unwrap(), 378);
    }

    #[test]
    fn permutation_agrees_with_simulation() {
        for count in [27, 28, 29, 31, 33, 40] {
            let mut clock = BallClock::new(count).unwrap();
            let simulated = days_until_default(&mut clock).unwrap();
            assert_eq!(
                days_until_default_by_permutation(count).unwrap(),
                simulated,
                "mismatch for {count} balls"
            );
        }
    }

    #[test]
    fn search_gives_up_at_safety_bound() {
        let mut clock = BallClock::new(45).unwrap();
        clock.set_max_days(10);
        assert_eq!(
            days_until_default(&mut clock).unwrap_err(),
            ClockError::CycleLimitExceeded { max_days: 10 }
        );
        assert_eq!(clock.elapsed_minutes(), 10 * MINUTES_PER_DAY);
    }

    #[test]
    fn mid_morning_restore_counts_the_partial_day() {
        // 100 minutes into a 15-day cycle: 21_500 minutes remain.
        let mut source = BallClock::new(30).unwrap();
        source.advance(100).unwrap();
        let mut restored = BallClock::from_snapshot(&source.snapshot()).unwrap();
        restored.set_max_days(20);

        assert_eq!(days_until_default(&mut restored).unwrap(), 15);
        assert!(restored.is_default_state());
        assert_eq!(restored.elapsed_minutes(), 15 * MINUTES_PER_DAY - 100);
    }

    #[test]
    fn afternoon_restore_finds_midnight() {
        // Restored at 1:40 in the afternoon; the match lands on a midnight the
        // dial cannot tell apart from noon.
        let mut source = BallClock::new(30).unwrap();
        source.advance(820).unwrap();
        let mut restored = BallClock::from_snapshot(&source.snapshot()).unwrap();
        restored.set_max_days(20);

        assert_eq!(days_until_default(&mut restored).unwrap(), 15);
        assert_eq!(restored.elapsed_minutes(), 15 * MINUTES_PER_DAY - 820);
    }

    #[test]
    fn noon_restore_is_checked_half_a_day_later() {
        let mut source = BallClock::new(30).unwrap();
        source.advance(HALF_DAY as i64).unwrap();
        let mut restored = BallClock::from_snapshot(&source.snapshot()).unwrap();
        restored.set_max_days(20);

        assert_eq!(days_until_default(&mut restored).unwrap(), 15);
        assert_eq!(restored.elapsed_minutes(), 15 * MINUTES_PER_DAY - HALF_DAY);
    }

    #[test]
    fn zero_day_bound_fails_immediately() {
        let mut clock = BallClock::new(30).unwrap();
        clock.set_max_days(0);
        assert!(matches!(
            days_until_default(&mut clock),
            Err(ClockError::CycleLimitExceeded { max_days: 0 })
        ));
        assert_eq!(clock.elapsed_minutes(), 0);
    }

    #[test]
    fn table_covers_range() {
        let table = cycle_table(27..=31).unwrap();
        assert_eq!(
            table,
            vec![(27, 23), (28, 76), (29, 102), (30, 15), (31, 85)]
        );
    }

    #[test]
    fn table_rejects_unsupported_range() {
        assert!(cycle_table(20..=30).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn lcm_of_cycle_lengths() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(1, 7), 7);
        assert_eq!(gcd(54, 24), 6);
    }
}
