//! Screen state the renderer draws from.

use derive_getters::Getters;
use simon_core::{Pad, View, messages};
use std::collections::BTreeSet;
use tracing::debug;

/// View backing the terminal UI.
///
/// Holds what the session last said; [`super::ui::draw`] turns it into
/// widgets every frame. Tones are queued as bell rings for the loop to emit.
#[derive(Debug, Clone, Getters)]
pub struct TerminalView {
    heading: String,
    status: String,
    notice: Option<String>,
    input_locked: bool,
    start_enabled: bool,
    status_visible: bool,
    lit: BTreeSet<Pad>,
    bell: bool,
    pending_chimes: usize,
}

impl TerminalView {
    /// Creates the pre-game screen.
    pub fn new(bell: bool) -> Self {
        Self {
            heading: messages::IDLE_TITLE.to_string(),
            status: String::new(),
            notice: None,
            input_locked: true,
            start_enabled: true,
            status_visible: false,
            lit: BTreeSet::new(),
            bell,
            pending_chimes: 0,
        }
    }

    /// Clears the notice, returning it.
    pub fn dismiss_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Returns how many tones are due and forgets them.
    pub fn take_chimes(&mut self) -> usize {
        std::mem::take(&mut self.pending_chimes)
    }

    /// Whether `pad` is lit.
    pub fn is_lit(&self, pad: Pad) -> bool {
        self.lit.contains(&pad)
    }
}

impl View for TerminalView {
    fn display_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn display_heading(&mut self, text: &str) {
        self.heading = text.to_string();
    }

    fn notify(&mut self, message: &str) {
        debug!(message, "Notice");
        self.notice = Some(message.to_string());
    }

    fn set_input_locked(&mut self, locked: bool) {
        self.input_locked = locked;
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
    }

    fn activate_feedback(&mut self, pad: Pad) {
        self.lit.insert(pad);
        if self.bell {
            self.pending_chimes += 1;
        }
    }

    fn deactivate_feedback(&mut self, pad: Pad) {
        self.lit.remove(&pad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chimes_follow_bell_setting() {
        let mut view = TerminalView::new(true);
        view.activate_feedback(Pad::Red);
        view.activate_feedback(Pad::Blue);
        assert_eq!(view.take_chimes(), 2);
        assert_eq!(view.take_chimes(), 0);

        let mut silent = TerminalView::new(false);
        silent.activate_feedback(Pad::Red);
        assert_eq!(silent.take_chimes(), 0);
        assert!(silent.is_lit(Pad::Red));
    }

    #[test]
    fn test_notice_dismissed_once() {
        let mut view = TerminalView::new(false);
        view.notify("over");
        assert_eq!(view.dismiss_notice().as_deref(), Some("over"));
        assert_eq!(view.dismiss_notice(), None);
    }
}
