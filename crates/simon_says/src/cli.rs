//! Command-line interface for simon_says.

use clap::{Parser, Subcommand};

/// Simon Says - repeat the computer's growing sequence of pads
#[derive(Parser, Debug)]
#[command(name = "simon_says")]
#[command(about = "Simon Says memory game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(long, global = true, default_value = "simon_says.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Level 1-4 (overrides the config file)
        #[arg(short, long, allow_negative_numbers = true)]
        level: Option<i64>,

        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let a scripted player run a game and print what happened
    Simulate {
        /// Level 1-4 (overrides the config file)
        #[arg(short, long, allow_negative_numbers = true)]
        level: Option<i64>,

        /// Seed for the sequence
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Round on which the player presses a wrong pad
        #[arg(long)]
        mistake_at: Option<usize>,

        /// Print a JSON report instead of the transcript
        #[arg(long)]
        json: bool,
    },

    /// List the levels and their round counts
    Levels,
}
