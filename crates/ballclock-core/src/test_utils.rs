//! Shared test helpers for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::clock::BallClock;
use crate::id::BallId;
use crate::snapshot::ClockSnapshot;

// ===========================================================================
// Clock builders
// ===========================================================================

/// A clock with `ball_count` balls advanced by `minutes` minutes.
pub fn ticked_clock(ball_count: u32, minutes: i64) -> BallClock {
    let mut clock = BallClock::new(ball_count).expect("valid ball count");
    clock.advance(minutes).expect("advance should succeed");
    clock
}

/// Panic unless every ball is present exactly once.
pub fn assert_conserved(clock: &BallClock) {
    if let Err(e) = clock.validate() {
        panic!(
            "{} balls after {} minutes: {e}",
            clock.ball_count(),
            clock.elapsed_minutes()
        );
    }
}

// ===========================================================================
// Reference model
// ===========================================================================

/// A deliberately plain model of the clock: four `Vec`s and the tick rule
/// written out track by track. Used to cross-check [`BallClock`].
#[derive(Debug, Clone)]
pub struct ReferenceClock {
    pub min: Vec<u32>,
    pub five_min: Vec<u32>,
    pub hour: Vec<u32>,
    pub main: Vec<u32>,
}

impl ReferenceClock {
    pub fn new(ball_count: u32) -> Self {
        Self {
            min: Vec::new(),
            five_min: Vec::new(),
            hour: (1..=11).collect(),
            main: (12..=ball_count).collect(),
        }
    }

    pub fn tick(&mut self) {
        let ball = self.main.remove(0);

        if self.min.len() < 4 {
            self.min.push(ball);
            return;
        }
        self.main.extend(self.min.drain(..).rev());

        if self.five_min.len() < 11 {
            self.five_min.push(ball);
            return;
        }
        self.main.extend(self.five_min.drain(..).rev());

        if self.hour.len() < 11 {
            self.hour.push(ball);
            return;
        }
        self.main.extend(self.hour.drain(..).rev());
        self.main.push(ball);
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            min: ids(&self.min),
            five_min: ids(&self.five_min),
            hour: ids(&self.hour),
            main: ids(&self.main),
        }
    }
}

fn ids(balls: &[u32]) -> Vec<BallId> {
    balls.iter().copied().map(BallId).collect()
}
