//! Print the cycle length of every supported ball count.
//!
//! Uses the one-day permutation, so the whole table takes well under a
//! second even though some cycles run past a hundred thousand days.
//!
//! Run with: `cargo run -p ballclock-core --example cycle_table`

use ballclock_core::clock::{MAX_BALL_COUNT, MIN_BALL_COUNT};
use ballclock_core::cycle::cycle_table;

fn main() {
    let table = cycle_table(MIN_BALL_COUNT..=MAX_BALL_COUNT).expect("supported range");

    println!("{:>5}  {:>8}", "balls", "days");
    for (count, days) in &table {
        println!("{count:>5}  {days:>8}");
    }

    if let Some((count, days)) = table.iter().max_by_key(|(_, days)| *days) {
        println!("\nlongest cycle: {count} balls, {days} days");
    }
}
