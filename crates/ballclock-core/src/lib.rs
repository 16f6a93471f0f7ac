//! Ballclock Core -- a deterministic simulator for the rolling ball clock.
//!
//! A fixed pool of numbered balls cycles through three capacity-limited
//! tracks and a FIFO queue. Each simulated minute one ball leaves the queue
//! and rolls onto the tracks; full tracks tip their balls back into the queue
//! in reverse order.
//!
//! # One Minute
//!
//! Each call to [`clock::BallClock::tick`]:
//!
//! 1. **Release** -- Take the ball at the front of the queue.
//! 2. **Minute track** -- Place it if there is room (4 slots); otherwise dump
//!    the track to the queue, reversed, and pass the ball on.
//! 3. **Five-minute track** -- Same rule, 11 slots.
//! 4. **Hour track** -- Same rule, 11 slots. If this track dumps too, the ball
//!    itself goes to the back of the queue.
//!
//! # Cycle Search
//!
//! ```rust,ignore
//! let mut clock = BallClock::new(30)?;
//! assert_eq!(cycle::days_until_default(&mut clock)?, 15);
//! ```
//!
//! # Key Types
//!
//! - [`clock::BallClock`] -- The clock state and tick loop.
//! - [`track::Track`] -- Fixed-capacity rail with reverse-and-dump overflow.
//! - [`snapshot::ClockSnapshot`] -- Serializable copy of all four containers
//!   (`{"Min":[..],"FiveMin":[..],"Hour":[..],"Main":[..]}`).
//! - [`cycle`] -- Day-by-day search for the return to 12:00, plus a
//!   permutation-based cross-check.
//! - [`config::ClockConfig`] -- Run parameters, loadable from RON/TOML/JSON
//!   with the `config-loader` feature.

pub mod clock;
pub mod config;
pub mod cycle;
pub mod error;
pub mod id;
pub mod sim;
pub mod snapshot;
pub mod time;
pub mod track;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
