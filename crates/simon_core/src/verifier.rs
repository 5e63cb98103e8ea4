//! Player input verification.

use crate::Pad;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of one press against the authoritative sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Correct so far, more presses expected.
    Continue,
    /// Wrong pad; the game is lost.
    Mismatch,
    /// Whole round reproduced correctly.
    RoundComplete,
}

/// Outcome plus the number of presses still expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressResult {
    /// What the press means for the round.
    pub outcome: RoundOutcome,
    /// Presses left in the round after this one.
    pub remaining: usize,
}

/// Collects the player's presses for the current round.
///
/// The verifier trusts its caller to forward presses only during the
/// player's turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputVerifier {
    presses: Vec<Pad>,
}

impl InputVerifier {
    /// Creates an empty verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses registered this round.
    pub fn presses(&self) -> &[Pad] {
        &self.presses
    }

    /// Forgets this round's presses.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// Records a press and compares it with the same position in `expected`.
    ///
    /// A press past the end of `expected` counts as a mismatch.
    #[instrument(skip(self, expected), fields(pressed = self.presses.len(), expected = expected.len()))]
    pub fn register_press(&mut self, pad: Pad, expected: &[Pad]) -> PressResult {
        self.presses.push(pad);
        let index = self.presses.len() - 1;
        let remaining = expected.len().saturating_sub(self.presses.len());

        let outcome = if expected.get(index) != Some(&pad) {
            RoundOutcome::Mismatch
        } else if remaining == 0 {
            RoundOutcome::RoundComplete
        } else {
            RoundOutcome::Continue
        };

        debug!(%pad, index, remaining, ?outcome, "Press verified");
        PressResult { outcome, remaining }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_on_second_press() {
        let expected = [Pad::Red, Pad::Blue];
        let mut verifier = InputVerifier::new();

        let first = verifier.register_press(Pad::Red, &expected);
        assert_eq!(first.outcome, RoundOutcome::Continue);
        assert_eq!(first.remaining, 1);

        let second = verifier.register_press(Pad::Green, &expected);
        assert_eq!(second.outcome, RoundOutcome::Mismatch);
        assert_eq!(second.remaining, 0);
    }

    #[test]
    fn test_single_pad_round_completes() {
        let mut verifier = InputVerifier::new();
        let result = verifier.register_press(Pad::Red, &[Pad::Red]);
        assert_eq!(
            result,
            PressResult {
                outcome: RoundOutcome::RoundComplete,
                remaining: 0
            }
        );
    }

    #[test]
    fn test_press_beyond_sequence_is_mismatch() {
        let mut verifier = InputVerifier::new();
        verifier.register_press(Pad::Red, &[Pad::Red]);
        let extra = verifier.register_press(Pad::Red, &[Pad::Red]);
        assert_eq!(extra.outcome, RoundOutcome::Mismatch);
    }

    #[test]
    fn test_clear_starts_round_over() {
        let mut verifier = InputVerifier::new();
        verifier.register_press(Pad::Yellow, &[Pad::Yellow, Pad::Blue]);
        verifier.clear();
        assert!(verifier.presses().is_empty());
        let result = verifier.register_press(Pad::Yellow, &[Pad::Yellow, Pad::Blue]);
        assert_eq!(result.outcome, RoundOutcome::Continue);
    }
}
