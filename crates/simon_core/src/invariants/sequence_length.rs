//! Sequence length invariant: one pad per round.

use super::Invariant;
use crate::RoundState;

/// Invariant: the authoritative sequence has exactly `round` pads.
///
/// Outside a game both the round counter and the sequences are empty.
pub struct SequenceLengthInvariant;

impl Invariant<RoundState> for SequenceLengthInvariant {
    fn holds(state: &RoundState) -> bool {
        if state.phase().is_active() {
            state.sequence().len() == state.round()
        } else {
            state.round() == 0 && state.sequence().is_empty() && state.presses().is_empty()
        }
    }

    fn description() -> &'static str {
        "Sequence length equals the round counter"
    }
}
