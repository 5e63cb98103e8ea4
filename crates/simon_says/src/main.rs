//! Simon Says - terminal memory game
//!
//! Play in the terminal, watch a scripted game, or list the levels.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use simon_core::Difficulty;
use simon_says::{Cli, Command, GameConfig, SimulationOptions, format_entry, simulate, tui};
use strum::IntoEnumIterator;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("Loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { level, seed } => tui::run_tui(config, level, seed).await,
        Command::Simulate {
            level,
            seed,
            mistake_at,
            json,
        } => run_simulation(config, level, seed, mistake_at, json),
        Command::Levels => {
            print_levels();
            Ok(())
        }
    }
}

/// Plays a scripted game and prints its transcript or a JSON report.
fn run_simulation(
    config: GameConfig,
    level: Option<i64>,
    seed: u64,
    mistake_at: Option<usize>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = SimulationOptions::new(level.or(Some(*config.level())), seed)
        .with_mistake_at(mistake_at);
    info!(?options, "Running simulation");

    let report = simulate(*config.timing(), &options).context("Simulation failed")?;

    if json {
        let json = serde_json::to_string_pretty(&report).context("Serializing report")?;
        println!("{}", json);
        return Ok(());
    }

    for entry in report.transcript() {
        println!("{}", format_entry(entry));
    }
    println!();
    println!(
        "{} after {} of {} rounds ({:.1}s)",
        report.outcome(),
        report.rounds_completed(),
        report.max_rounds(),
        *report.elapsed_ms() as f64 / 1000.0
    );
    Ok(())
}

fn print_levels() {
    println!("{:<7} {:<8} {:>6}", "Level", "Name", "Rounds");
    for difficulty in Difficulty::iter() {
        println!(
            "{:<7} {:<8} {:>6}",
            difficulty.selector(),
            difficulty.label(),
            difficulty.max_rounds()
        );
    }
}
