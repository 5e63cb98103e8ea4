//! Simon Says for the terminal.
//!
//! Hosts the [`simon_core`] game: a ratatui front end driven by a tokio
//! loop, a headless simulator for scripted games, and the TOML configuration
//! both share.
//!
//! # Example
//!
//! ```
//! use simon_says::{GameConfig, SimulationOptions, simulate};
//! use simon_core::Outcome;
//!
//! let config = GameConfig::default();
//! let report = simulate(*config.timing(), &SimulationOptions::new(Some(1), 7)).unwrap();
//! assert_eq!(*report.outcome(), Outcome::Won);
//! assert_eq!(*report.rounds_completed(), 8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod simulate;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Simulation
pub use simulate::{SimulationOptions, SimulationReport, TranscriptEntry, format_entry, simulate};
