//! ballclock -- command line front end for the ball clock simulator.
//!
//! Usage:
//!   `ballclock <balls>`            days until the clock returns to 12:00
//!   `ballclock <balls> <minutes>`  clock state after that many minutes
//!   `ballclock help`               usage text

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use ballclock_core::clock::{BallClock, validate_ball_count};
use ballclock_core::config::{ClockConfig, ConfigError, load_config};
use ballclock_core::cycle::{days_until_default, days_until_default_by_permutation};
use ballclock_core::error::ClockError;
use ballclock_core::snapshot::SnapshotError;

const MODES: &str = "\
Modes:
  1. Given a number of balls from 27 to 127, print the number of days until
     the balls return to their initial 12:00 arrangement.

         ballclock <balls>

  2. Given a number of balls from 27 to 127 and a number of minutes, print
     the state of every track and the queue once that time has passed.

         ballclock <balls> <minutes>";

#[derive(Parser, Debug)]
#[command(name = "ballclock")]
#[command(about = "Rolling ball clock simulator")]
#[command(after_long_help = MODES)]
struct Args {
    /// Number of balls, 27 to 127
    #[arg(allow_negative_numbers = true)]
    balls: Option<i64>,

    /// Minutes to run before printing the clock state
    #[arg(allow_negative_numbers = true)]
    minutes: Option<i64>,

    /// Read ball count and search limit from a RON, TOML or JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up the cycle search after this many days
    #[arg(long)]
    max_days: Option<u64>,

    /// How to compute the cycle length [default: simulate]. The permutation
    /// method needs no search limit and ignores a configured max_days
    #[arg(long, value_enum, conflicts_with = "minutes")]
    method: Option<Method>,

    /// Indent the JSON state
    #[arg(long, requires = "minutes")]
    pretty: bool,

    /// Also print the time shown on the dial
    #[arg(long, requires = "minutes")]
    time: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Run the clock day by day
    Simulate,
    /// Derive the cycle from one day's permutation of the balls
    Permutation,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no ball count given. Run 'ballclock help' for usage")]
    MissingBallCount,
    #[error("--max-days has no effect with --method permutation")]
    MaxDaysWithPermutation,
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,ballclock=info,ballclock_core=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `help` is accepted as a bare word in addition to `-h` / `--help`.
fn wants_help(first_arg: Option<&str>) -> bool {
    first_arg.is_some_and(|arg| arg.eq_ignore_ascii_case("help") || arg.eq_ignore_ascii_case("-h"))
}

/// Merge the config file (if any) with command line overrides.
fn resolve_config(args: &Args) -> Result<ClockConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Some(load_config(path)?)
        }
        None => None,
    };

    if let Some(balls) = args.balls {
        let ball_count = validate_ball_count(balls)?;
        match config.as_mut() {
            Some(config) => config.ball_count = ball_count,
            None => config = Some(ClockConfig::new(ball_count)),
        }
    }

    let mut config = config.ok_or(CliError::MissingBallCount)?;
    if let Some(max_days) = args.max_days {
        config.max_days = max_days;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), CliError> {
    let method = args.method.unwrap_or(Method::Simulate);
    if method == Method::Permutation && args.max_days.is_some() {
        return Err(CliError::MaxDaysWithPermutation);
    }
    let config = resolve_config(args)?;

    match args.minutes {
        Some(minutes) => print_state(&config, minutes, args),
        None => print_cycle_length(&config, method),
    }
}

fn print_state(config: &ClockConfig, minutes: i64, args: &Args) -> Result<(), CliError> {
    let mut clock = BallClock::from_config(config)?;
    info!(
        "calculating the state of a ball clock with {} balls after {} minutes",
        config.ball_count, minutes
    );
    clock.advance(minutes)?;

    let snapshot = clock.snapshot();
    let json = if args.pretty {
        snapshot.to_json_pretty()?
    } else {
        snapshot.to_json()?
    };

    if args.time {
        println!("Clock reads {} after {} minutes", clock.time(), minutes);
    }
    println!("{json}");
    Ok(())
}

fn print_cycle_length(config: &ClockConfig, method: Method) -> Result<(), CliError> {
    info!(
        "calculating how long it takes {} balls to return to their default state",
        config.ball_count
    );
    let days = match method {
        Method::Simulate => {
            let mut clock = BallClock::from_config(config)?;
            days_until_default(&mut clock)?
        }
        Method::Permutation => days_until_default_by_permutation(config.ball_count)?,
    };
    println!("{} balls cycle after {} days", config.ball_count, days);
    Ok(())
}

fn main() {
    init_logging();

    if wants_help(std::env::args().nth(1).as_deref()) {
        if let Err(e) = Args::command().print_long_help() {
            error!("failed to print help: {e}");
            process::exit(1);
        }
        return;
    }

    let args = Args::parse();
    if let Err(e) = run(&args) {
        debug!(error = ?e, "run failed");
        eprintln!("ballclock: {e}");
        process::exit(1);
    }
}
