//! Simon Says core - pure game logic for the classic memory game.
//!
//! The computer plays a growing sequence of colored pads and the player
//! repeats it. Each successful round appends one random pad; a mistake ends
//! the game, and reaching the level's round target wins it.
//!
//! # Architecture
//!
//! - **Level**: difficulty selector to target round count
//! - **Sequence**: uniform random pad selection
//! - **Scheduler**: virtual-clock timer queue with epoch tags
//! - **Playback**: timed activation of a pad sequence
//! - **Verifier**: checks each press against the authoritative sequence
//! - **Session**: the turn state machine and game lifecycle
//!
//! Rendering, sound and alerts are reached through the [`View`] trait.
//!
//! # Example
//!
//! ```
//! use simon_core::{GamePhase, GameSession, SequenceGenerator, Timing, TranscriptView};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), simon_core::SimonError> {
//! let mut session = GameSession::new(
//!     TranscriptView::new(),
//!     SequenceGenerator::seeded(7),
//!     Timing::default(),
//! );
//! session.start(Some(1))?;
//! assert_eq!(session.phase(), GamePhase::ComputerTurn);
//!
//! // One pad plays at 600ms, input opens 1000ms after playback ends.
//! session.advance_to(Duration::from_millis(1600))?;
//! assert_eq!(session.phase(), GamePhase::PlayerTurn);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod level;
pub mod messages;
mod pad;
mod phases;
mod playback;
mod scheduler;
mod sequence;
mod session;
mod timing;
mod verifier;
mod view;

pub use error::SimonError;
pub use level::{Difficulty, configure_level};
pub use pad::Pad;
pub use phases::{GamePhase, Outcome};
pub use playback::{Cue, PlaybackStep, play_sequence, plan_playback};
pub use scheduler::{Epoch, Scheduled, TimerQueue};
pub use sequence::{SequenceGenerator, pick_random};
pub use session::{GameSession, RoundState, Task};
pub use timing::Timing;
pub use verifier::{InputVerifier, PressResult, RoundOutcome};
pub use view::{TranscriptView, View, ViewEvent};
