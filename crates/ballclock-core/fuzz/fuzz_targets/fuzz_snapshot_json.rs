#![no_main]
use ballclock_core::clock::BallClock;
use ballclock_core::snapshot::ClockSnapshot;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text as a snapshot. Must not panic -- returning Err is fine.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(snapshot) = ClockSnapshot::from_json(text) {
        let _ = BallClock::from_snapshot(&snapshot);
    }
});
