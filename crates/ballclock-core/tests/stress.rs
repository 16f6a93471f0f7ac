//! Long-running cycle searches.
//!
//! These are marked `#[ignore]` for nightly CI runs. Run with:
//!   cargo test --package ballclock-core --release -- --ignored

use ballclock_core::clock::BallClock;
use ballclock_core::cycle::{days_until_default, days_until_default_by_permutation};

/// Longest cycle of any supported ball count, by full simulation.
#[test]
#[ignore]
fn longest_cycle_by_simulation() {
    let mut clock = BallClock::new(123).unwrap();
    assert_eq!(days_until_default(&mut clock).unwrap(), 108_855);
}

/// Simulation and permutation agree for every supported ball count.
#[test]
#[ignore]
fn simulation_matches_permutation_everywhere() {
    for count in 27..=127 {
        let mut clock = BallClock::new(count).unwrap();
        assert_eq!(
            days_until_default(&mut clock).unwrap(),
            days_until_default_by_permutation(count).unwrap(),
            "mismatch for {count} balls"
        );
    }
}
