use anyhow::Result;
use clap::Parser;

use blinken::color::{colorize, VALID_PAIRS};

/// Tick-driven terminal dashboard that cycles through ANSI color pairs.
///
/// Takes no arguments: run it, watch the grid fill, press space to pause,
/// arrows to move the ticker panel, and the platform quit chord to leave.
#[derive(Parser)]
#[command(name = "blinken", version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let report = blinken::dashboard::run()?;

    match report.last_pair {
        Some(pair) => println!(
            "{}",
            colorize(
                &format!(
                    " seen {} of {} pairs over {} ticks ",
                    report.seen, VALID_PAIRS, report.steps
                ),
                pair.fg,
                pair.bg,
            )
        ),
        None => println!("no ticks landed"),
    }
    Ok(())
}
