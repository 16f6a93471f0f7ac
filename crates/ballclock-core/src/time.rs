//! Reading the time off the tracks.

use std::fmt;

/// Time shown by the clock, on a 12-hour dial.
///
/// The hour track has no fixed marker ball, so an empty hour track reads
/// 1 o'clock and a full one (11 balls) reads 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ClockTime {
    /// 1..=12
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
}

impl ClockTime {
    /// Derive the time from track fill levels.
    pub fn from_fill(minute_balls: usize, five_minute_balls: usize, hour_balls: usize) -> Self {
        Self {
            hour: (hour_balls + 1) as u8,
            minute: (five_minute_balls * 5 + minute_balls) as u8,
        }
    }

    /// Minutes since the dial last read 12:00, in `0..720`.
    pub fn minutes_past_twelve(&self) -> u64 {
        u64::from(self.hour % 12) * 60 + u64::from(self.minute)
    }

    /// Minutes until the dial next reads 12:00, or 0 when it reads 12:00 now.
    pub fn minutes_until_twelve(&self) -> u64 {
        (720 - self.minutes_past_twelve()) % 720
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hour_track_reads_twelve() {
        let time = ClockTime::from_fill(0, 0, 11);
        assert_eq!(time, ClockTime { hour: 12, minute: 0 });
        assert_eq!(time.to_string(), "12:00");
    }

    #[test]
    fn last_minute_before_the_hour() {
        let time = ClockTime::from_fill(4, 11, 0);
        assert_eq!(time.to_string(), "1:59");
    }

    #[test]
    fn distance_to_twelve() {
        let noon = ClockTime::from_fill(0, 0, 11);
        assert_eq!(noon.minutes_past_twelve(), 0);
        assert_eq!(noon.minutes_until_twelve(), 0);

        let one_forty = ClockTime::from_fill(0, 8, 0);
        assert_eq!(one_forty.minutes_past_twelve(), 100);
        assert_eq!(one_forty.minutes_until_twelve(), 620);

        let twelve_fifty_nine = ClockTime::from_fill(4, 11, 11);
        assert_eq!(twelve_fifty_nine.minutes_past_twelve(), 59);
        assert_eq!(twelve_fifty_nine.minutes_until_twelve(), 661);

        let eleven_fifty_nine = ClockTime::from_fill(4, 11, 10);
        assert_eq!(eleven_fifty_nine.minutes_until_twelve(), 1);
    }
}
