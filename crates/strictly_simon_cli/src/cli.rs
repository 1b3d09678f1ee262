//! Command-line interface for strictly_simon.

use clap::{Parser, Subcommand};

/// Strictly Simon - terminal memory-sequence game
#[derive(Parser, Debug)]
#[command(name = "strictly_simon")]
#[command(about = "Repeat the color sequence, one round longer each time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "simon.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sequence generated for one round
    Show {
        /// Round number
        #[arg(short, long, default_value = "1")]
        round: u32,

        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of color labels
        #[arg(long)]
        json: bool,
    },

    /// Play interactively on stdin/stdout
    Play {
        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many rounds (0 = until a miss)
        #[arg(long)]
        rounds: Option<u32>,
    },

    /// Print the default configuration as TOML
    Config,
}
