//! Player prefix invariant: the player never runs ahead of the sequence.

use super::Invariant;
use crate::RoundState;

/// Invariant: the player's presses are a prefix of the sequence.
///
/// Only the latest press may differ, since a mismatch ends the round
/// right after it is recorded.
pub struct PlayerPrefixInvariant;

impl Invariant<RoundState> for PlayerPrefixInvariant {
    fn holds(state: &RoundState) -> bool {
        let presses = state.presses();
        let sequence = state.sequence();

        if presses.len() > sequence.len() {
            return false;
        }

        let settled = presses.len().saturating_sub(1);
        presses[..settled] == sequence[..settled]
    }

    fn description() -> &'static str {
        "Player presses never exceed or diverge from the sequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, InputVerifier, Pad};

    fn state_with(sequence: Vec<Pad>, presses: &[Pad]) -> RoundState {
        let mut verifier = InputVerifier::new();
        for &pad in presses {
            verifier.register_press(pad, &sequence);
        }
        RoundState {
            phase: GamePhase::PlayerTurn,
            round: sequence.len(),
            sequence,
            verifier,
            max_rounds: 8,
        }
    }

    #[test]
    fn test_matching_prefix_holds() {
        let state = state_with(vec![Pad::Red, Pad::Blue, Pad::Green], &[Pad::Red, Pad::Blue]);
        assert!(PlayerPrefixInvariant::holds(&state));
    }

    #[test]
    fn test_latest_mismatch_is_tolerated() {
        let state = state_with(vec![Pad::Red, Pad::Blue], &[Pad::Red, Pad::Green]);
        assert!(PlayerPrefixInvariant::holds(&state));
    }

    #[test]
    fn test_running_ahead_violates() {
        let state = state_with(vec![Pad::Red], &[Pad::Red, Pad::Red]);
        assert!(!PlayerPrefixInvariant::holds(&state));
    }
}
