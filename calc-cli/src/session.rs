//! Feeding keys to the engine from a script or an interactive terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use calc_core::{CalculatorEngine, Clock, KeyParseError, KeyToken};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    logging,
    render::{RenderOptions, dump_state, render_display},
};

/// A key script token that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("key #{position} ('{tag}'): {source}")]
pub struct ScriptError {
    /// 1-based index of the token in the script.
    pub position: usize,
    pub tag: String,
    #[source]
    pub source: KeyParseError,
}

/// Splits a key script on whitespace and commas and parses every token.
///
/// ```
/// use calc_core::KeyToken;
/// use calc_cli::session::parse_script;
///
/// let keys = parse_script("5, add 3").unwrap();
///
/// assert_eq!(keys, vec![KeyToken::Digit(5), KeyToken::add(), KeyToken::Digit(3)]);
/// ```
pub fn parse_script(script: &str) -> Result<Vec<KeyToken>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tag| !tag.is_empty())
        .enumerate()
        .map(|(i, tag)| {
            tag.parse::<KeyToken>().map_err(|source| ScriptError {
                position: i + 1,
                tag: tag.to_string(),
                source,
            })
        })
        .collect()
}

/// What a line typed in the interactive session asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    State,
    LogLevel(&'a str),
    Keys(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    match line {
        "quit" | "exit" | ":q" => Command::Quit,
        ":state" => Command::State,
        _ => match line.strip_prefix(":log") {
            Some(level) => Command::LogLevel(level.trim()),
            None => Command::Keys(line),
        },
    }
}

/// Runs a read-eval-print loop over `input`, printing the display after
/// every key. Ends on `quit`, `exit` or end of input.
///
/// Lines starting with `:` are session commands: `:state` prints the full
/// state, `:log <filter>` changes the log filter.
pub fn run_interactive<C, R, W>(
    engine: &mut CalculatorEngine<C>,
    input: R,
    mut output: W,
    options: RenderOptions,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_display(&engine.display(), options))?;

    for line in input.lines() {
        let line = line.context("failed to read from input")?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::State => {
                let dumped = dump_state(engine.state()).context("failed to serialize state")?;
                write!(output, "{dumped}")?;
            }
            Command::LogLevel(level) => match logging::set_log_level(level) {
                Ok(()) => info!(%level, "log filter changed"),
                Err(error) => writeln!(output, "? {error}")?,
            },
            Command::Keys(script) => match parse_script(script) {
                Ok(keys) => {
                    for key in &keys {
                        let display = engine.handle_key(key);
                        writeln!(output, "{}", render_display(&display, options))?;
                    }
                }
                Err(error) => {
                    warn!(%error, "rejected input line");
                    writeln!(output, "? {error}")?;
                }
            },
        }
    }

    output.flush()?;
    Ok(())
}
