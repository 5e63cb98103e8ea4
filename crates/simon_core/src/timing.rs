//! Playback and turn timing.

use crate::SimonError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Delays that drive the computer's turn and the gaps between turns.
///
/// All values are milliseconds. Pads stay lit for `light_ms`, which must be
/// shorter than the `step_ms` cadence so each pad goes dark before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Interval between consecutive pad activations.
    step_ms: u64,
    /// How long a pad stays lit.
    light_ms: u64,
    /// Pause after playback before the player may press.
    settle_ms: u64,
    /// Pause after a completed round before the next playback.
    advance_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step_ms: 600,
            light_ms: 500,
            settle_ms: 1000,
            advance_ms: 1000,
        }
    }
}

impl Timing {
    /// Creates a timing set, validating it.
    #[instrument]
    pub fn new(
        step_ms: u64,
        light_ms: u64,
        settle_ms: u64,
        advance_ms: u64,
    ) -> Result<Self, SimonError> {
        let timing = Self {
            step_ms,
            light_ms,
            settle_ms,
            advance_ms,
        };
        timing.validate()?;
        Ok(timing)
    }

    /// Checks that the cadence is usable.
    pub fn validate(&self) -> Result<(), SimonError> {
        if self.step_ms == 0 {
            return Err(SimonError::InvalidTiming("step_ms must be positive".to_string()));
        }
        if self.light_ms == 0 {
            return Err(SimonError::InvalidTiming("light_ms must be positive".to_string()));
        }
        if self.light_ms >= self.step_ms {
            return Err(SimonError::InvalidTiming(format!(
                "light_ms ({}) must be shorter than step_ms ({})",
                self.light_ms, self.step_ms
            )));
        }
        Ok(())
    }

    /// Activation cadence.
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    /// Lit duration of one activation.
    pub fn light(&self) -> Duration {
        Duration::from_millis(self.light_ms)
    }

    /// Delay between the end of playback and the player's turn.
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Delay between a completed round and the next computer turn.
    pub fn advance(&self) -> Duration {
        Duration::from_millis(self.advance_ms)
    }

    /// Time from the start of a computer turn until input opens.
    pub fn computer_turn(&self, sequence_len: usize) -> Duration {
        self.step() * sequence_len as u32 + self.settle()
    }
}
