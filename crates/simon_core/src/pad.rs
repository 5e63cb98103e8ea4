//! The four colored pads.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A colored pad the player presses and the computer lights up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Pad {
    /// Top-left pad.
    Green,
    /// Top-right pad.
    Red,
    /// Bottom-left pad.
    Yellow,
    /// Bottom-right pad.
    Blue,
}

impl Pad {
    /// All pads in board order.
    pub const ALL: [Pad; 4] = [Pad::Green, Pad::Red, Pad::Yellow, Pad::Blue];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Pad::Green => "Green",
            Pad::Red => "Red",
            Pad::Yellow => "Yellow",
            Pad::Blue => "Blue",
        }
    }

    /// Keyboard binding for this pad.
    pub fn key(self) -> char {
        match self {
            Pad::Green => 'g',
            Pad::Red => 'r',
            Pad::Yellow => 'y',
            Pad::Blue => 'b',
        }
    }

    /// Looks up the pad bound to a key (case-insensitive).
    #[instrument]
    pub fn from_key(key: char) -> Option<Pad> {
        match key.to_ascii_lowercase() {
            'g' => Some(Pad::Green),
            'r' => Some(Pad::Red),
            'y' => Some(Pad::Yellow),
            'b' => Some(Pad::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
