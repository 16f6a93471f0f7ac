//! Watch a 30-ball clock run through its first hour.
//!
//! Prints the dial reading and the track contents every five minutes, then
//! the full JSON snapshot at 1:00.
//!
//! Run with: `cargo run -p ballclock-core --example clock_face`

use ballclock_core::clock::BallClock;
use ballclock_core::id::TrackKind;

fn main() {
    let mut clock = BallClock::new(30).expect("30 balls is a valid clock");
    println!("{}  (start)", clock.time());

    for _ in 0..12 {
        let result = clock.advance(5).expect("advance five minutes");
        let tripped: Vec<String> = TrackKind::CASCADE
            .into_iter()
            .filter(|&kind| result.overflows_of(kind) > 0)
            .map(|kind| kind.to_string())
            .collect();

        println!(
            "{:>5}  five-minute {:?}  hour {:?}  overflowed: {}",
            clock.time().to_string(),
            clock.track(TrackKind::FiveMinute).balls(),
            clock.track(TrackKind::Hour).balls(),
            if tripped.is_empty() { "-".to_string() } else { tripped.join(", ") },
        );
    }

    let snapshot = clock.snapshot();
    println!("\n{}", snapshot.to_json_pretty().expect("snapshot renders"));
}
