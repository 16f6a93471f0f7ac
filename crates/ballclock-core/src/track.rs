//! Fixed-capacity tracks.
//!
//! A [`Track`] is one rail of the clock. Balls are appended at the open end
//! until the rail is full; the next ball that arrives trips the rail, which
//! then empties itself back into the queue in reverse order (the ball that
//! arrived last rolls off first).
//!
//! The capacity is carried by the track's [`TrackKind`], not by the backing
//! `Vec`, so a track never relies on allocation size to decide fullness.

use crate::error::ClockError;
use crate::id::{BallId, TrackKind};

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// An ordered rail of balls with a fixed maximum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    kind: TrackKind,
    /// Balls in physical order. Index 0 is the first ball placed.
    balls: Vec<BallId>,
}

impl Track {
    /// Create an empty track of the given kind.
    pub fn new(kind: TrackKind) -> Self {
        Self {
            kind,
            balls: Vec::with_capacity(kind.capacity()),
        }
    }

    /// Create a track already holding `balls`, in order.
    ///
    /// Fails if `balls` does not fit on a track of this kind.
    pub fn filled(kind: TrackKind, balls: Vec<BallId>) -> Result<Self, ClockError> {
        if balls.len() > kind.capacity() {
            return Err(ClockError::InternalInconsistency(format!(
                "{kind} track holds {} balls but its capacity is {}",
                balls.len(),
                kind.capacity()
            )));
        }
        Ok(Self { kind, balls })
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// True when no further ball can be placed without an overflow.
    pub fn is_full(&self) -> bool {
        self.balls.len() >= self.kind.capacity()
    }

    /// Balls in physical order.
    pub fn balls(&self) -> &[BallId] {
        &self.balls
    }

    /// Place `ball` at the open end of the track. Hands the ball back when
    /// the track is full.
    pub fn try_push(&mut self, ball: BallId) -> Result<(), BallId> {
        if self.is_full() {
            return Err(ball);
        }
        self.balls.push(ball);
        Ok(())
    }

    /// Remove every ball from the track.
    pub fn reset(&mut self) {
        self.balls.clear();
    }

    /// Reverse-and-dump. Empties the track and yields the released balls
    /// last-placed first, the order in which they join the back of the queue.
    /// The track is empty afterwards even if the iterator is dropped early.
    pub fn overflow(&mut self) -> impl Iterator<Item = BallId> + '_ {
        self.balls.drain(..).rev()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn balls(ids: &[u32]) -> Vec<BallId> {
        ids.iter().copied().map(BallId).collect()
    }

    #[test]
    fn new_track_is_empty() {
        let track = Track::new(TrackKind::Minute);
        assert!(track.is_empty());
        assert!(!track.is_full());
        assert_eq!(track.capacity(), 4);
    }

    #[test]
    fn push_until_full_then_refuse() {
        let mut track = Track::new(TrackKind::Minute);
        for id in 1..=4 {
            assert_eq!(track.try_push(BallId(id)), Ok(()));
        }
        assert!(track.is_full());
        assert_eq!(track.try_push(BallId(5)), Err(BallId(5)));
        assert_eq!(track.balls(), balls(&[1, 2, 3, 4]).as_slice());
    }

    #[test]
    fn overflow_reverses_and_empties() {
        let mut track = Track::filled(TrackKind::Minute, balls(&[7, 8, 9, 10])).unwrap();
        let released: Vec<BallId> = track.overflow().collect();
        assert_eq!(released, balls(&[10, 9, 8, 7]));
        assert!(track.is_empty());
        assert_eq!(track.kind(), TrackKind::Minute);
    }

    #[test]
    fn overflow_of_hour_track_keeps_kind() {
        let mut track =
            Track::filled(TrackKind::Hour, balls(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])).unwrap();
        let released: Vec<BallId> = track.overflow().collect();
        assert_eq!(track.capacity(), 11);
        assert_eq!(released.first(), Some(&BallId(11)));
        assert_eq!(released.last(), Some(&BallId(1)));
    }

    #[test]
    fn overflow_appends_to_back_of_queue() {
        let mut track = Track::filled(TrackKind::FiveMinute, balls(&[1, 2, 3])).unwrap();
        let mut queue = std::collections::VecDeque::from(balls(&[20, 21]));
        queue.extend(track.overflow());
        assert!(track.is_empty());
        assert_eq!(Vec::from(queue), balls(&[20, 21, 3, 2, 1]));
    }

    #[test]
    fn dropped_overflow_still_empties_track() {
        let mut track = Track::filled(TrackKind::Minute, balls(&[1, 2, 3, 4])).unwrap();
        drop(track.overflow());
        assert!(track.is_empty());
        assert_eq!(track.try_push(BallId(5)), Ok(()));
    }

    #[test]
    fn filled_rejects_over_capacity() {
        let result = Track::filled(TrackKind::Minute, balls(&[1, 2, 3, 4, 5]));
        assert!(matches!(result, Err(ClockError::InternalInconsistency(_))));
    }

    #[test]
    fn reset_clears() {
        let mut track = Track::filled(TrackKind::Hour, balls(&[1, 2])).unwrap();
        track.reset();
        assert!(track.is_empty());
    }
}
