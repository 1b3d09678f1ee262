//! Command dispatch shared by the binary and its tests.

use crate::cli::{Cli, Command};
use crate::config::{ConfigError, SimonConfig};
use crate::populator::{GrowthPopulator, SequencePopulator};
use crate::session::{Session, SessionOutcome, present};
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_simon::{ColorSequence, Round, SequenceGame};
use tracing::{info, instrument};

/// JSON shape printed by `show --json`.
#[derive(Debug, Serialize)]
struct SequenceReport {
    round: Round,
    seed: u64,
    colors: ColorSequence,
}

/// Runs one parsed command against the given terminal handles.
///
/// The config file is only read by commands that use it; `config` prints
/// the defaults even when the file on disk is broken. `on_config` sees the
/// loaded config before the command runs (the binary applies its log level).
pub fn run<R, W>(
    cli: Cli,
    input: R,
    mut output: W,
    on_config: impl FnOnce(&SimonConfig),
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let load_config = || -> Result<SimonConfig, ConfigError> {
        let config = SimonConfig::load_or_default(&cli.config)?;
        on_config(&config);
        Ok(config)
    };

    match cli.command {
        Command::Config => {
            write!(output, "{}", SimonConfig::default_toml()?)?;
            output.flush()?;
            Ok(())
        }
        Command::Show { round, seed, json } => {
            let config = load_config()?.with_seed(seed);
            show(&config, Round::new(round), json, &mut output)
        }
        Command::Play { seed, rounds } => {
            let config = load_config()?.with_seed(seed).with_max_rounds(rounds);
            play(&config, input, output)
        }
    }
}

/// Uses the configured seed, or draws one and logs it so a game can be replayed.
fn resolve_seed(config: &SimonConfig) -> u64 {
    let seed = (*config.seed()).unwrap_or_else(rand::random);
    info!(seed, "Using sequence seed");
    seed
}

#[instrument(skip(config, output))]
fn show<W: Write>(
    config: &SimonConfig,
    round: Round,
    json: bool,
    output: &mut W,
) -> anyhow::Result<()> {
    let seed = resolve_seed(config);
    let mut populator = GrowthPopulator::from_config(config, seed);
    let mut game = SequenceGame::new(round);
    populator.populate(&mut game)?;

    if json {
        let report = SequenceReport {
            round,
            seed,
            colors: *game.sequence(),
        };
        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        present(&mut game, output)?;
    }
    output.flush()?;
    Ok(())
}

#[instrument(skip_all)]
fn play<R: BufRead, W: Write>(config: &SimonConfig, input: R, output: W) -> anyhow::Result<()> {
    let seed = resolve_seed(config);
    let populator = GrowthPopulator::from_config(config, seed);

    let mut session = Session::new(populator, input, output, *config.max_rounds());
    let summary = session.run()?;

    info!(
        rounds_cleared = summary.rounds_cleared,
        last_round = %summary.last_round,
        outcome = ?summary.outcome,
        "Session finished"
    );
    if summary.outcome == SessionOutcome::Completed {
        info!("All configured rounds cleared");
    }
    Ok(())
}
