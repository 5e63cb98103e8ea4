//! Error types for the Simon core.

/// Errors raised by game operations.
///
/// A wrong pad press is not an error; it is reported as
/// [`RoundOutcome::Mismatch`](crate::RoundOutcome::Mismatch).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SimonError {
    /// The difficulty selector is outside 1-4.
    #[display("Invalid level {}: choose 1, 2, 3 or 4", _0)]
    InvalidLevel(i64),

    /// Random selection was asked to pick from nothing.
    #[display("Cannot pick from an empty collection")]
    EmptyCollection,

    /// A game is running; it must end before another can start.
    #[display("A game is already in progress")]
    GameInProgress,

    /// Playback timing values are inconsistent.
    #[display("Invalid timing: {}", _0)]
    InvalidTiming(String),
}

impl std::error::Error for SimonError {}
