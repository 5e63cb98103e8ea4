//! Game phases and outcomes.

use serde::{Deserialize, Serialize};

/// Which side of the turn-taking loop is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game running.
    #[default]
    Idle,
    /// The computer is playing the sequence back; input is locked.
    ComputerTurn,
    /// The player is reproducing the sequence.
    PlayerTurn,
    /// A round just ended; deciding between advance, win and loss.
    Evaluating,
    /// The game ended and its message is showing.
    GameOver,
}

impl GamePhase {
    /// Returns true while a game is running.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            GamePhase::ComputerTurn | GamePhase::PlayerTurn | GamePhase::Evaluating
        )
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every round was reproduced.
    Won,
    /// A wrong pad was pressed.
    Lost,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "Won"),
            Outcome::Lost => write!(f, "Lost"),
        }
    }
}
