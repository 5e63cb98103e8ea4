//! Round bounds invariant: 1 <= round <= max while playing.

use super::Invariant;
use crate::RoundState;

/// Invariant: during a game the round counter stays within the level target.
pub struct RoundBoundsInvariant;

impl Invariant<RoundState> for RoundBoundsInvariant {
    fn holds(state: &RoundState) -> bool {
        if !state.phase().is_active() {
            return true;
        }
        (1..=state.max_rounds()).contains(&state.round())
    }

    fn description() -> &'static str {
        "Round counter stays between 1 and the level's round target"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, InputVerifier, Pad};

    fn active(round: usize, max_rounds: usize) -> RoundState {
        RoundState {
            phase: GamePhase::ComputerTurn,
            sequence: vec![Pad::Yellow; round],
            verifier: InputVerifier::new(),
            round,
            max_rounds,
        }
    }

    #[test]
    fn test_within_bounds_holds() {
        assert!(RoundBoundsInvariant::holds(&active(1, 8)));
        assert!(RoundBoundsInvariant::holds(&active(8, 8)));
    }

    #[test]
    fn test_out_of_bounds_violates() {
        assert!(!RoundBoundsInvariant::holds(&active(0, 8)));
        assert!(!RoundBoundsInvariant::holds(&active(9, 8)));
    }

    #[test]
    fn test_idle_is_unconstrained() {
        assert!(RoundBoundsInvariant::holds(&RoundState::new()));
    }
}
