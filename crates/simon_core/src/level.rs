//! Difficulty levels and their round targets.

use crate::SimonError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Difficulty level, selected by the numbers 1-4.
///
/// Defaults to [`Difficulty::Easy`], matching an absent selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Difficulty {
    /// Level 1: 8 rounds.
    #[default]
    Easy,
    /// Level 2: 14 rounds.
    Normal,
    /// Level 3: 20 rounds.
    Hard,
    /// Level 4: 31 rounds.
    Expert,
}

impl Difficulty {
    /// Resolves a numeric selector.
    #[instrument]
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Normal),
            3 => Some(Difficulty::Hard),
            4 => Some(Difficulty::Expert),
            _ => None,
        }
    }

    /// The numeric selector (1-4).
    pub fn selector(self) -> i64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    /// Number of rounds needed to win.
    pub fn max_rounds(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Normal => 14,
            Difficulty::Hard => 20,
            Difficulty::Expert => 31,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Maps a level selector to its round target.
///
/// `None` selects level 1. Any value outside 1-4 fails with
/// [`SimonError::InvalidLevel`]; the caller must not apply anything then.
#[instrument]
pub fn configure_level(level: Option<i64>) -> Result<usize, SimonError> {
    let selector = level.unwrap_or(1);
    match Difficulty::from_selector(selector) {
        Some(difficulty) => {
            debug!(?difficulty, max_rounds = difficulty.max_rounds(), "Level configured");
            Ok(difficulty.max_rounds())
        }
        None => {
            warn!(selector, "Rejected level selector");
            Err(SimonError::InvalidLevel(selector))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_valid_levels_map_to_round_targets() {
        assert_eq!(configure_level(Some(1)), Ok(8));
        assert_eq!(configure_level(Some(2)), Ok(14));
        assert_eq!(configure_level(Some(3)), Ok(20));
        assert_eq!(configure_level(Some(4)), Ok(31));
    }

    #[test]
    fn test_absent_level_defaults_to_one() {
        assert_eq!(configure_level(None), Ok(8));
    }

    #[test]
    fn test_out_of_range_levels_are_rejected() {
        for bad in [0, 5, -1, 31, i64::MAX] {
            assert_eq!(configure_level(Some(bad)), Err(SimonError::InvalidLevel(bad)));
        }
    }

    #[test]
    fn test_selector_round_trips() {
        for difficulty in Difficulty::iter() {
            assert_eq!(Difficulty::from_selector(difficulty.selector()), Some(difficulty));
        }
    }
}
