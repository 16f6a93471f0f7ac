#![no_main]
use arbitrary::Arbitrary;
use ballclock_core::clock::BallClock;
use ballclock_core::id::BallId;
use ballclock_core::snapshot::ClockSnapshot;
use libfuzzer_sys::fuzz_target;

/// A layout built from arbitrary ball numbers, plus a run length.
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    min: Vec<u8>,
    five_min: Vec<u8>,
    hour: Vec<u8>,
    main: Vec<u8>,
    minutes: u16,
}

fn ids(raw: &[u8]) -> Vec<BallId> {
    raw.iter().map(|&b| BallId(u32::from(b))).collect()
}

fuzz_target!(|input: FuzzInput| {
    let snapshot = ClockSnapshot {
        min: ids(&input.min),
        five_min: ids(&input.five_min),
        hour: ids(&input.hour),
        main: ids(&input.main),
    };

    // Any layout that passes validation must tick without error and stay valid.
    if let Ok(mut clock) = BallClock::from_snapshot(&snapshot) {
        clock.advance(i64::from(input.minutes)).unwrap();
        clock.validate().unwrap();
    }
});
