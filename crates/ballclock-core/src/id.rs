use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single ball. Balls are numbered from 1 and never created or
/// destroyed after the clock is built. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BallId(pub u32);

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three rails of the clock, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// Counts single minutes.
    Minute,
    /// Counts five-minute blocks.
    FiveMinute,
    /// Counts hours.
    Hour,
}

impl TrackKind {
    /// All track kinds in the order a ball cascades through them.
    pub const CASCADE: [TrackKind; 3] = [TrackKind::Minute, TrackKind::FiveMinute, TrackKind::Hour];

    /// Number of balls the track holds before it overflows.
    pub const fn capacity(self) -> usize {
        match self {
            TrackKind::Minute => 4,
            TrackKind::FiveMinute => 11,
            TrackKind::Hour => 11,
        }
    }

    /// The first `n` kinds of the cascade, as a `'static` slice.
    pub fn cascade_prefix(n: usize) -> &'static [TrackKind] {
        static ORDER: [TrackKind; 3] = TrackKind::CASCADE;
        &ORDER[..n.min(ORDER.len())]
    }

    /// Position of this kind in [`TrackKind::CASCADE`].
    pub const fn index(self) -> usize {
        match self {
            TrackKind::Minute => 0,
            TrackKind::FiveMinute => 1,
            TrackKind::Hour => 2,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackKind::Minute => "minute",
            TrackKind::FiveMinute => "five-minute",
            TrackKind::Hour => "hour",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_leave_room_in_the_queue() {
        let total: usize = TrackKind::CASCADE.iter().map(|k| k.capacity()).sum();
        assert_eq!(total, 26);
    }

    #[test]
    fn cascade_indices_match_positions() {
        for (i, kind) in TrackKind::CASCADE.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn cascade_prefix_clamps() {
        assert!(TrackKind::cascade_prefix(0).is_empty());
        assert_eq!(TrackKind::cascade_prefix(1), &[TrackKind::Minute]);
        assert_eq!(TrackKind::cascade_prefix(5), &TrackKind::CASCADE);
    }

    #[test]
    fn ball_id_serializes_as_integer() {
        let json = serde_json::to_string(&vec![BallId(3), BallId(14)]).unwrap();
        assert_eq!(json, "[3,14]");
    }
}
