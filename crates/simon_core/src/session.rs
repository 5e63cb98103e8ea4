//! The game session: turn state machine and lifecycle.
//!
//! A [`GameSession`] owns every piece of game state. The host drives it with
//! three kinds of calls: [`GameSession::start`] when the player asks for a
//! game, [`GameSession::press`] for each pad press, and
//! [`GameSession::advance_to`] as time passes. All delays run through an
//! internal [`TimerQueue`]; a reset bumps the epoch so tasks left over from
//! the previous game are dropped instead of firing.

use crate::invariants::assert_invariants;
use crate::messages;
use crate::{
    Cue, Epoch, GamePhase, InputVerifier, Outcome, Pad, PressResult, RoundOutcome,
    SequenceGenerator, SimonError, TimerQueue, Timing, View, configure_level, play_sequence,
};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Deferred work owned by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// A pad light cue.
    Cue(Cue),
    /// Open input for the player.
    BeginPlayerTurn,
    /// Extend the sequence and play it back.
    BeginComputerTurn,
}

impl From<Cue> for Task {
    fn from(cue: Cue) -> Self {
        Task::Cue(cue)
    }
}

/// Sequence, presses and counters of the game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) phase: GamePhase,
    pub(crate) sequence: Vec<Pad>,
    pub(crate) verifier: InputVerifier,
    pub(crate) round: usize,
    pub(crate) max_rounds: usize,
}

impl RoundState {
    /// Creates the pre-game state.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            sequence: Vec::new(),
            verifier: InputVerifier::new(),
            round: 0,
            max_rounds: 0,
        }
    }

    /// Active phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Authoritative sequence.
    pub fn sequence(&self) -> &[Pad] {
        &self.sequence
    }

    /// Player presses this round.
    pub fn presses(&self) -> &[Pad] {
        self.verifier.presses()
    }

    /// Current round, 1-indexed; 0 outside a game.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Round target of the current game.
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    fn clear(&mut self) {
        self.sequence.clear();
        self.verifier.clear();
        self.round = 0;
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

/// A Simon game bound to a view.
#[derive(Debug)]
pub struct GameSession<V, R = StdRng> {
    view: V,
    generator: SequenceGenerator<R>,
    timing: Timing,
    state: RoundState,
    queue: TimerQueue<Task>,
    epoch: Epoch,
    outcome: Option<Outcome>,
}

impl<V: View, R: Rng> GameSession<V, R> {
    /// Creates an idle session.
    #[instrument(skip_all, fields(timing = ?timing))]
    pub fn new(view: V, generator: SequenceGenerator<R>, timing: Timing) -> Self {
        info!("Creating game session");
        Self {
            view,
            generator,
            timing,
            state: RoundState::new(),
            queue: TimerQueue::new(),
            epoch: 0,
            outcome: None,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Active phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Round state snapshot.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Authoritative sequence.
    pub fn sequence(&self) -> &[Pad] {
        &self.state.sequence
    }

    /// Player presses this round.
    pub fn player_sequence(&self) -> &[Pad] {
        self.state.presses()
    }

    /// Current round, 1-indexed; 0 outside a game.
    pub fn round(&self) -> usize {
        self.state.round
    }

    /// Round target of the current game.
    pub fn max_rounds(&self) -> usize {
        self.state.max_rounds
    }

    /// Result of the last finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Current epoch; tasks from older epochs are discarded.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Session clock.
    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    /// When the next pending task falls due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_due()
    }

    /// Tasks still queued, stale ones included.
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// Timing in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The bound view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The bound view, mutably (for host-side notices).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // ─────────────────────────────────────────────────────────────
    //  Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Starts a game at `level` (1-4, `None` for 1).
    ///
    /// # Errors
    ///
    /// [`SimonError::InvalidLevel`] leaves the session untouched.
    /// [`SimonError::GameInProgress`] if a game is running.
    #[instrument(skip(self), fields(phase = ?self.state.phase))]
    pub fn start(&mut self, level: Option<i64>) -> Result<(), SimonError> {
        if self.state.phase.is_active() {
            warn!("Start requested while a game is running");
            return Err(SimonError::GameInProgress);
        }
        let max_rounds = configure_level(level)?;

        info!(max_rounds, "Starting game");
        self.state.clear();
        self.state.max_rounds = max_rounds;
        self.outcome = None;
        self.view.set_start_enabled(false);
        self.view.set_status_visible(true);
        self.begin_computer_turn()
    }

    /// Ends the game and shows `message`.
    ///
    /// Clears the sequences and the round counter, invalidates every pending
    /// task and returns the view to its idle layout. Calling it twice leaves
    /// the same round state as calling it once.
    #[instrument(skip(self), fields(phase = ?self.state.phase, round = self.state.round))]
    pub fn reset(&mut self, message: &str) {
        self.epoch += 1;
        self.state.clear();
        self.state.phase = GamePhase::GameOver;
        info!(epoch = self.epoch, "Game reset");

        self.view.notify(message);
        self.view.display_heading(messages::IDLE_TITLE);
        self.view.set_start_enabled(true);
        self.view.set_status_visible(false);
        self.view.set_input_locked(true);
        for pad in Pad::ALL {
            self.view.deactivate_feedback(pad);
        }
        assert_invariants(&self.state);
    }

    /// Acknowledges the game-over message and returns to idle.
    #[instrument(skip(self))]
    pub fn dismiss(&mut self) {
        if self.state.phase == GamePhase::GameOver {
            debug!("Game over dismissed");
            self.state.phase = GamePhase::Idle;
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Player input
    // ─────────────────────────────────────────────────────────────

    /// Handles a pad press.
    ///
    /// Returns `None` when the press arrives outside the player's turn; such
    /// presses change nothing.
    #[instrument(skip(self), fields(phase = ?self.state.phase, round = self.state.round))]
    pub fn press(&mut self, pad: Pad) -> Option<PressResult> {
        if self.state.phase != GamePhase::PlayerTurn {
            debug!("Ignoring press outside the player's turn");
            return None;
        }

        self.view.activate_feedback(pad);
        self.queue
            .schedule(self.timing.light(), self.epoch, Task::Cue(Cue::Deactivate(pad)));

        let result = self.state.verifier.register_press(pad, &self.state.sequence);
        self.view.display_status(&messages::remaining_presses(result.remaining));

        match result.outcome {
            RoundOutcome::Continue => {}
            RoundOutcome::Mismatch => {
                self.state.phase = GamePhase::Evaluating;
                info!(%pad, "Wrong pad");
                self.finish(Outcome::Lost);
            }
            RoundOutcome::RoundComplete => {
                self.state.phase = GamePhase::Evaluating;
                self.complete_round();
            }
        }

        assert_invariants(&self.state);
        Some(result)
    }

    // ─────────────────────────────────────────────────────────────
    //  Time
    // ─────────────────────────────────────────────────────────────

    /// Runs every task due at or before `now`, then moves the clock there.
    ///
    /// Tasks from an older epoch are dropped.
    pub fn advance_to(&mut self, now: Duration) -> Result<(), SimonError> {
        while let Some(scheduled) = self.queue.pop_due(now) {
            if scheduled.epoch != self.epoch {
                debug!(
                    task = ?scheduled.task,
                    task_epoch = scheduled.epoch,
                    epoch = self.epoch,
                    "Dropping stale task"
                );
                continue;
            }
            self.dispatch(scheduled.task)?;
        }
        self.queue.advance_clock(now);
        Ok(())
    }

    fn dispatch(&mut self, task: Task) -> Result<(), SimonError> {
        match task {
            Task::Cue(Cue::Activate(pad)) => self.view.activate_feedback(pad),
            Task::Cue(Cue::Deactivate(pad)) => self.view.deactivate_feedback(pad),
            Task::BeginPlayerTurn => self.begin_player_turn(),
            Task::BeginComputerTurn => self.begin_computer_turn()?,
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    #[instrument(skip(self), fields(round = self.state.round + 1))]
    fn begin_computer_turn(&mut self) -> Result<(), SimonError> {
        let pad = self.generator.next_pad()?;

        self.state.phase = GamePhase::ComputerTurn;
        self.view.set_input_locked(true);
        self.view.display_status(messages::COMPUTER_TURN);

        self.state.round += 1;
        self.view
            .display_heading(&messages::round_heading(self.state.round, self.state.max_rounds));
        self.state.sequence.push(pad);
        debug!(%pad, len = self.state.sequence.len(), "Sequence extended");

        play_sequence(&mut self.queue, self.epoch, &self.state.sequence, &self.timing);
        self.queue.schedule(
            self.timing.computer_turn(self.state.round),
            self.epoch,
            Task::BeginPlayerTurn,
        );

        assert_invariants(&self.state);
        Ok(())
    }

    #[instrument(skip(self), fields(round = self.state.round))]
    fn begin_player_turn(&mut self) {
        self.state.phase = GamePhase::PlayerTurn;
        self.state.verifier.clear();
        self.view.set_input_locked(false);
        self.view
            .display_status(&messages::remaining_presses(self.state.round));
        debug!("Player turn");
        assert_invariants(&self.state);
    }

    fn complete_round(&mut self) {
        if self.state.presses().len() == self.state.max_rounds {
            info!(rounds = self.state.max_rounds, "All rounds completed");
            self.finish(Outcome::Won);
            return;
        }

        info!(round = self.state.round, "Round completed");
        self.state.verifier.clear();
        self.view.set_input_locked(true);
        self.view.display_status(messages::ENCOURAGEMENT);
        self.queue
            .schedule(self.timing.advance(), self.epoch, Task::BeginComputerTurn);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        let message = match outcome {
            Outcome::Won => messages::SUCCESS,
            Outcome::Lost => messages::FAILURE,
        };
        self.reset(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TranscriptView;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn session() -> GameSession<TranscriptView> {
        GameSession::new(
            TranscriptView::new(),
            SequenceGenerator::seeded(11),
            Timing::default(),
        )
    }

    #[test]
    fn test_start_enters_computer_turn() {
        let mut session = session();
        session.start(None).expect("level 1");

        assert_eq!(session.phase(), GamePhase::ComputerTurn);
        assert_eq!(session.round(), 1);
        assert_eq!(session.sequence().len(), 1);
        assert_eq!(session.max_rounds(), 8);
        assert_eq!(session.view().heading(), "Round 1 of 8");
        assert_eq!(session.view().status(), messages::COMPUTER_TURN);
        assert!(*session.view().input_locked());
        assert!(!*session.view().start_enabled());
    }

    #[test]
    fn test_invalid_level_changes_nothing() {
        let mut session = session();
        assert_eq!(session.start(Some(9)), Err(SimonError::InvalidLevel(9)));
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.pending_tasks(), 0);
        assert!(session.view().events().is_empty());
    }

    #[test]
    fn test_start_refused_while_running() {
        let mut session = session();
        session.start(Some(2)).expect("level 2");
        assert_eq!(session.start(Some(1)), Err(SimonError::GameInProgress));
        assert_eq!(session.max_rounds(), 14);
    }

    #[test]
    fn test_player_turn_opens_after_playback_and_settle() {
        let mut session = session();
        session.start(None).expect("level 1");

        session.advance_to(ms(1599)).expect("advance");
        assert_eq!(session.phase(), GamePhase::ComputerTurn);

        session.advance_to(ms(1600)).expect("advance");
        assert_eq!(session.phase(), GamePhase::PlayerTurn);
        assert!(!*session.view().input_locked());
        assert_eq!(session.view().status(), "Your turn: 1 Press Left");
    }

    #[test]
    fn test_press_ignored_during_computer_turn() {
        let mut session = session();
        session.start(None).expect("level 1");
        let before = session.state().clone();

        assert_eq!(session.press(Pad::Green), None);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = session();
        session.start(None).expect("level 1");

        session.reset("stop");
        let once = session.state().clone();
        session.reset("stop");

        assert_eq!(session.state(), &once);
        assert_eq!(session.round(), 0);
        assert!(session.sequence().is_empty());
        assert!(session.player_sequence().is_empty());
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut session = session();
        session.start(None).expect("level 1");
        session.dismiss();
        assert_eq!(session.phase(), GamePhase::ComputerTurn);

        session.reset("bye");
        session.dismiss();
        assert_eq!(session.phase(), GamePhase::Idle);
    }
}
