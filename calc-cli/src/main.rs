use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use calc_cli::{
    clock_arg::parse_clock_arg,
    logging,
    render::{RenderOptions, dump_state, render_display},
    session, settings,
};
use calc_core::{CalculatorEngine, Clock, ClockReading, FixedClock, SystemClock};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// A pocket adding machine with a trick up its sleeve.
///
/// Runs a key script given with `--keys`, or reads keys interactively from
/// stdin, one or more per line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Keys to press, separated by spaces or commas
    /// (e.g. `5 add 3 add 1 1 equals`).
    #[arg(short, long)]
    keys: Option<String>,

    /// Pin the clock used by magic mode (`MM-DDTHH:MM` or
    /// `YYYY-MM-DDTHH:MM`). Defaults to the local system time.
    #[arg(long, value_parser = parse_clock_arg)]
    at: Option<ClockReading>,

    /// TOML file with an `[engine]` table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter; overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Show the display size tier next to the value.
    #[arg(long, default_value_t = false)]
    show_tier: bool,

    /// Print the final state as TOML after a `--keys` script.
    #[arg(long, default_value_t = false, requires = "keys")]
    dump_state: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;

    let config = settings::load_engine_config(cli.config.as_deref())
        .context("failed to load engine configuration")?;

    let clock: Box<dyn Clock> = match cli.at {
        Some(reading) => {
            debug!(?reading, "using pinned clock");
            Box::new(FixedClock(reading))
        }
        None => Box::new(SystemClock),
    };

    let mut engine = CalculatorEngine::with_config(clock, config)?;
    let options = RenderOptions {
        show_tier: cli.show_tier,
    };

    match cli.keys {
        Some(script) => {
            let keys = session::parse_script(&script).context("invalid key script")?;
            let display = engine.press_all(&keys);
            println!("{}", render_display(&display, options));
            if cli.dump_state {
                print!("{}", dump_state(engine.state())?);
            }
        }
        None => {
            session::run_interactive(&mut engine, io::stdin().lock(), io::stdout().lock(), options)?;
        }
    }

    Ok(())
}
