//! User-facing texts.

/// Heading shown while no game is running.
pub const IDLE_TITLE: &str = "Simon Says";

/// Status shown during the computer's turn.
pub const COMPUTER_TURN: &str = "Wait for the computer";

/// Status shown between a completed round and the next playback.
pub const ENCOURAGEMENT: &str = "Success! Keep going!";

/// Game-over message after a wrong press.
pub const FAILURE: &str = "Oops! Game over, you pressed the wrong pad.";

/// Game-over message after the final round.
pub const SUCCESS: &str = "Congrats! You completed all the rounds!";

/// Heading for the round in progress, e.g. `Round 3 of 8`.
pub fn round_heading(round: usize, max_rounds: usize) -> String {
    format!("Round {round} of {max_rounds}")
}

/// Remaining-press status for the player's turn.
///
/// Only exactly one press reads singular, so zero reads "0 Presses Left".
pub fn remaining_presses(remaining: usize) -> String {
    let noun = if remaining == 1 { "Press" } else { "Presses" };
    format!("Your turn: {remaining} {noun} Left")
}
