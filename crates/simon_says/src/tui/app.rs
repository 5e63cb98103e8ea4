//! Application state and key handling.

use super::input::{Action, action_for};
use super::view::TerminalView;
use crate::GameConfig;
use crossterm::event::KeyEvent;
use simon_core::{Difficulty, GameSession, SequenceGenerator, SimonError, View};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Main application state.
pub struct App {
    session: GameSession<TerminalView>,
    level: i64,
    should_quit: bool,
}

impl App {
    /// Creates the application at the pre-game screen.
    ///
    /// `level` overrides the configured level; a seed makes the sequence
    /// reproducible.
    pub fn new(config: &GameConfig, level: Option<i64>, seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(seed) => SequenceGenerator::seeded(seed),
            None => SequenceGenerator::new(),
        };
        let view = TerminalView::new(*config.bell());
        Self {
            session: GameSession::new(view, generator, *config.timing()),
            level: level.unwrap_or(*config.level()),
            should_quit: false,
        }
    }

    /// The running session.
    pub fn session(&self) -> &GameSession<TerminalView> {
        &self.session
    }

    /// What the session last told the screen.
    pub fn view(&self) -> &TerminalView {
        self.session.view()
    }

    /// Level selected for the next game.
    pub fn level(&self) -> i64 {
        self.level
    }

    /// Description of the selected level, if it is one.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_selector(self.level)
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Tones the loop should emit now.
    pub fn take_chimes(&mut self) -> usize {
        self.session.view_mut().take_chimes()
    }

    /// Moves the game clock to `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), SimonError> {
        self.session.advance_to(elapsed)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(phase = ?self.session.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = action_for(key);
        if action == Some(Action::Quit) {
            info!("User quit");
            self.should_quit = true;
            return;
        }

        // Any key acknowledges a notice.
        if self.session.view_mut().dismiss_notice().is_some() {
            debug!("Notice dismissed");
            self.session.dismiss();
            return;
        }

        match action {
            Some(Action::Press(pad)) => {
                if *self.view().input_locked() {
                    debug!(%pad, "Input locked, ignoring press");
                } else {
                    self.session.press(pad);
                }
            }
            Some(Action::SelectLevel(level)) => {
                if *self.view().start_enabled() {
                    debug!(level, "Level selected");
                    self.level = level;
                }
            }
            Some(Action::Start) => self.start(),
            Some(Action::Quit) | None => {}
        }
    }

    fn start(&mut self) {
        if !*self.view().start_enabled() {
            return;
        }
        if let Err(e) = self.session.start(Some(self.level)) {
            warn!(error = %e, level = self.level, "Start refused");
            self.session.view_mut().notify(&e.to_string());
        }
    }
}
