//! First-class invariants for the round state.
//!
//! Invariants are logical properties that must hold between transitions.
//! They are testable independently and checked in debug builds after every
//! session transition.

use crate::RoundState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod player_prefix;
pub mod round_bounds;
pub mod sequence_length;

pub use player_prefix::PlayerPrefixInvariant;
pub use round_bounds::RoundBoundsInvariant;
pub use sequence_length::SequenceLengthInvariant;

/// All round-state invariants as a composable set.
pub type SimonInvariants = (
    SequenceLengthInvariant,
    PlayerPrefixInvariant,
    RoundBoundsInvariant,
);

/// Asserts that every invariant holds (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &RoundState) {
    if let Err(violations) = SimonInvariants::check_all(state) {
        for violation in &violations {
            warn!(description = %violation.description, ?state, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, InputVerifier, Pad};

    #[test]
    fn test_invariant_set_holds_for_idle_state() {
        assert!(SimonInvariants::check_all(&RoundState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_mid_round() {
        let mut verifier = InputVerifier::new();
        verifier.register_press(Pad::Red, &[Pad::Red, Pad::Blue]);
        let state = RoundState {
            phase: GamePhase::PlayerTurn,
            sequence: vec![Pad::Red, Pad::Blue],
            verifier,
            round: 2,
            max_rounds: 8,
        };
        assert!(SimonInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let state = RoundState {
            phase: GamePhase::PlayerTurn,
            sequence: vec![Pad::Red],
            verifier: InputVerifier::new(),
            round: 3,
            max_rounds: 2,
        };
        let violations = SimonInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SequenceLengthInvariant, RoundBoundsInvariant);
        assert!(TwoInvariants::check_all(&RoundState::new()).is_ok());
    }
}
