//! The clock engine: owns the queue and the three tracks and advances them
//! one minute at a time.
//!
//! # Layout
//!
//! The `BallClock` owns:
//! - A FIFO queue of balls waiting to be released
//! - Three [`Track`]s: minute (4 slots), five-minute (11) and hour (11)
//! - The [`ClockSnapshot`] recorded at construction, used to recognise 12:00
//! - An elapsed-minute counter and the safety bound for the cycle search
//!
//! # One minute
//!
//! Each [`BallClock::tick`] releases the front ball of the queue and offers it
//! to the tracks in cascade order. A track with room takes the ball and the
//! minute ends. A full track dumps its balls to the back of the queue in
//! reverse order and passes the ball on. When the hour track is full as well,
//! the ball follows the dumped hour balls to the back of the queue.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::config::{ClockConfig, DEFAULT_MAX_DAYS};
use crate::error::ClockError;
use crate::id::{BallId, TrackKind};
use crate::sim::{AdvanceResult, Landing, TickResult};
use crate::snapshot::ClockSnapshot;
use crate::time::ClockTime;
use crate::track::Track;

/// Smallest supported ball count.
pub const MIN_BALL_COUNT: u32 = 27;

/// Largest supported ball count.
pub const MAX_BALL_COUNT: u32 = 127;

/// Check a caller-supplied ball count against the supported range.
pub fn validate_ball_count(count: i64) -> Result<u32, ClockError> {
    if count < i64::from(MIN_BALL_COUNT) || count > i64::from(MAX_BALL_COUNT) {
        return Err(ClockError::InvalidBallCount { count });
    }
    Ok(count as u32)
}

// ---------------------------------------------------------------------------
// BallClock
// ---------------------------------------------------------------------------

/// A rolling ball clock.
#[derive(Debug, Clone)]
pub struct BallClock {
    ball_count: u32,

    /// Balls waiting to be released, front first.
    queue: VecDeque<BallId>,

    /// Minute, five-minute and hour tracks, in [`TrackKind::CASCADE`] order.
    tracks: [Track; 3],

    /// Minutes simulated since construction.
    elapsed_minutes: u64,

    /// The 12:00 layout captured when the clock was built.
    default_state: ClockSnapshot,

    /// Days the cycle search may run before giving up.
    max_days: u64,
}

impl BallClock {
    /// Build a clock with `ball_count` balls showing 12:00.
    ///
    /// Balls 1 through 11 fill the hour track; the remaining balls wait in the
    /// queue in ascending order. Fails with [`ClockError::InvalidBallCount`]
    /// outside 27..=127.
    pub fn new(ball_count: u32) -> Result<Self, ClockError> {
        let ball_count = validate_ball_count(i64::from(ball_count))?;
        let default_state = canonical_layout(ball_count);
        let clock = Self::from_parts(ball_count, &default_state, default_state.clone())?;
        debug!(ball_count, "ball clock loaded at 12:00");
        Ok(clock)
    }

    /// Build a clock from a run configuration, adopting its safety bound.
    pub fn from_config(config: &ClockConfig) -> Result<Self, ClockError> {
        let mut clock = Self::new(config.ball_count)?;
        clock.max_days = config.max_days;
        Ok(clock)
    }

    /// Restore a clock from a snapshot.
    ///
    /// The snapshot must hold every ball of a supported ball count exactly
    /// once, within track capacities. The restored clock still recognises
    /// the canonical 12:00 layout as its default state; its elapsed-minute
    /// counter starts at zero.
    pub fn from_snapshot(snapshot: &ClockSnapshot) -> Result<Self, ClockError> {
        let ball_count = validate_ball_count(snapshot.ball_count() as i64)?;
        let clock = Self::from_parts(ball_count, snapshot, canonical_layout(ball_count))?;
        clock.validate()?;
        Ok(clock)
    }

    fn from_parts(
        ball_count: u32,
        layout: &ClockSnapshot,
        default_state: ClockSnapshot,
    ) -> Result<Self, ClockError> {
        Ok(Self {
            ball_count,
            queue: layout.main.iter().copied().collect(),
            tracks: [
                Track::filled(TrackKind::Minute, layout.min.clone())?,
                Track::filled(TrackKind::FiveMinute, layout.five_min.clone())?,
                Track::filled(TrackKind::Hour, layout.hour.clone())?,
            ],
            elapsed_minutes: 0,
            default_state,
            max_days: DEFAULT_MAX_DAYS,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn ball_count(&self) -> u32 {
        self.ball_count
    }

    /// Minutes simulated since construction.
    pub fn elapsed_minutes(&self) -> u64 {
        self.elapsed_minutes
    }

    pub fn track(&self, kind: TrackKind) -> &Track {
        &self.tracks[kind.index()]
    }

    /// Balls waiting in the queue, front first.
    pub fn queue(&self) -> impl ExactSizeIterator<Item = BallId> + '_ {
        self.queue.iter().copied()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Safety bound for [`crate::cycle::days_until_default`].
    pub fn max_days(&self) -> u64 {
        self.max_days
    }

    pub fn set_max_days(&mut self, max_days: u64) {
        self.max_days = max_days;
    }

    /// The layout recorded at construction.
    pub fn default_state(&self) -> &ClockSnapshot {
        &self.default_state
    }

    /// Time shown on the dial.
    pub fn time(&self) -> ClockTime {
        ClockTime::from_fill(
            self.track(TrackKind::Minute).len(),
            self.track(TrackKind::FiveMinute).len(),
            self.track(TrackKind::Hour).len(),
        )
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Copy the contents of every container. Read-only.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            min: self.track(TrackKind::Minute).balls().to_vec(),
            five_min: self.track(TrackKind::FiveMinute).balls().to_vec(),
            hour: self.track(TrackKind::Hour).balls().to_vec(),
            main: self.queue.iter().copied().collect(),
        }
    }

    /// Whether all four containers match the layout recorded at construction,
    /// ball for ball and in order.
    pub fn is_default_state(&self) -> bool {
        let default = &self.default_state;
        self.track(TrackKind::Minute).balls() == default.min.as_slice()
            && self.track(TrackKind::FiveMinute).balls() == default.five_min.as_slice()
            && self.track(TrackKind::Hour).balls() == default.hour.as_slice()
            && self.queue.iter().eq(default.main.iter())
    }

    /// Check ball conservation and track capacities.
    pub fn validate(&self) -> Result<(), ClockError> {
        crate::validation::validate_clock(self)
    }

    /// Number of whole days until this clock next reads 12:00 in its default
    /// layout. Runs on a private copy; `self` is left untouched.
    pub fn days_until_default(&self) -> Result<u64, ClockError> {
        let mut copy = self.clone();
        crate::cycle::days_until_default(&mut copy)
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Advance the clock by one minute.
    pub fn tick(&mut self) -> Result<TickResult, ClockError> {
        let ball = self.queue.pop_front().ok_or_else(|| {
            ClockError::InternalInconsistency(format!(
                "queue empty at minute {} with {} balls",
                self.elapsed_minutes, self.ball_count
            ))
        })?;
        self.elapsed_minutes += 1;

        for (depth, track) in self.tracks.iter_mut().enumerate() {
            match track.try_push(ball) {
                Ok(()) => {
                    return Ok(TickResult {
                        ball,
                        landing: Landing::Track(track.kind()),
                        overflowed: TrackKind::cascade_prefix(depth),
                    });
                }
                Err(_) => self.queue.extend(track.overflow()),
            }
        }

        trace!(minute = self.elapsed_minutes, %ball, "hour track overflowed");
        self.queue.push_back(ball);
        Ok(TickResult {
            ball,
            landing: Landing::Queue,
            overflowed: TrackKind::cascade_prefix(TrackKind::CASCADE.len()),
        })
    }

    /// Advance the clock by `minutes` minutes.
    ///
    /// A negative count fails with [`ClockError::NegativeDuration`] before any
    /// minute is simulated.
    pub fn advance(&mut self, minutes: i64) -> Result<AdvanceResult, ClockError> {
        if minutes < 0 {
            return Err(ClockError::NegativeDuration { minutes });
        }
        let mut result = AdvanceResult::default();
        for _ in 0..minutes {
            let tick = self.tick()?;
            result.record(&tick);
        }
        Ok(result)
    }
}

/// The 12:00 layout for `ball_count` balls.
fn canonical_layout(ball_count: u32) -> ClockSnapshot {
    let hour_slots = TrackKind::Hour.capacity() as u32;
    ClockSnapshot {
        min: Vec::new(),
        five_min: Vec::new(),
        hour: (1..=hour_slots).map(BallId).collect(),
        main: (hour_slots + 1..=ball_count).map(BallId).collect(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
