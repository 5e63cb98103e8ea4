//! The interface between the game and whatever presents it.

use crate::Pad;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Presentation capabilities the session drives.
///
/// Implementations must not block. Feedback calls start a cue and return;
/// the session switches the light off itself.
pub trait View {
    /// Replaces the status line.
    fn display_status(&mut self, text: &str);

    /// Replaces the heading.
    fn display_heading(&mut self, text: &str);

    /// Surfaces a message the user must see (game over).
    fn notify(&mut self, message: &str);

    /// Enables or disables pad input.
    fn set_input_locked(&mut self, locked: bool);

    /// Enables or disables the start action.
    fn set_start_enabled(&mut self, enabled: bool);

    /// Shows or hides the in-progress status area.
    fn set_status_visible(&mut self, visible: bool);

    /// Lights a pad and plays its tone.
    fn activate_feedback(&mut self, pad: Pad);

    /// Switches a pad's light off.
    fn deactivate_feedback(&mut self, pad: Pad);
}

/// One recorded view call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Status line changed.
    Status(String),
    /// Heading changed.
    Heading(String),
    /// User notification.
    Notify(String),
    /// Input lock changed.
    InputLocked(bool),
    /// Start action toggled.
    StartEnabled(bool),
    /// Status area toggled.
    StatusVisible(bool),
    /// Pad lit.
    Activate(Pad),
    /// Pad dark.
    Deactivate(Pad),
}

/// A view that records every call and tracks the resulting screen state.
///
/// Used headless: by tests and by the simulator.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct TranscriptView {
    /// Every call in order.
    events: Vec<ViewEvent>,
    /// Current status line.
    status: String,
    /// Current heading.
    heading: String,
    /// Notifications received so far.
    notices: Vec<String>,
    /// Whether pad input is locked.
    input_locked: bool,
    /// Whether the start action is enabled.
    start_enabled: bool,
    /// Whether the status area is shown.
    status_visible: bool,
    /// Pads currently lit.
    lit: BTreeSet<Pad>,
}

impl TranscriptView {
    /// Creates a view in the pre-game state.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            status: String::new(),
            heading: crate::messages::IDLE_TITLE.to_string(),
            notices: Vec::new(),
            input_locked: true,
            start_enabled: true,
            status_visible: false,
            lit: BTreeSet::new(),
        }
    }

    /// Removes and returns the events recorded so far.
    pub fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pads lit by activation events, in order.
    pub fn activations(&self) -> Vec<Pad> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Activate(pad) => Some(*pad),
                _ => None,
            })
            .collect()
    }
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TranscriptView {
    fn display_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.events.push(ViewEvent::Status(text.to_string()));
    }

    fn display_heading(&mut self, text: &str) {
        self.heading = text.to_string();
        self.events.push(ViewEvent::Heading(text.to_string()));
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
        self.events.push(ViewEvent::Notify(message.to_string()));
    }

    fn set_input_locked(&mut self, locked: bool) {
        self.input_locked = locked;
        self.events.push(ViewEvent::InputLocked(locked));
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
        self.events.push(ViewEvent::StartEnabled(enabled));
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
        self.events.push(ViewEvent::StatusVisible(visible));
    }

    fn activate_feedback(&mut self, pad: Pad) {
        self.lit.insert(pad);
        self.events.push(ViewEvent::Activate(pad));
    }

    fn deactivate_feedback(&mut self, pad: Pad) {
        self.lit.remove(&pad);
        self.events.push(ViewEvent::Deactivate(pad));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_tagged() {
        let json = serde_json::to_value(ViewEvent::Activate(Pad::Green)).expect("serialize");
        assert_eq!(json, serde_json::json!({"event": "activate", "value": "green"}));

        let json = serde_json::to_value(ViewEvent::InputLocked(false)).expect("serialize");
        assert_eq!(json, serde_json::json!({"event": "input_locked", "value": false}));
    }

    #[test]
    fn test_transcript_tracks_screen_state() {
        let mut view = TranscriptView::new();
        view.display_heading("Round 1 of 8");
        view.activate_feedback(Pad::Blue);
        view.activate_feedback(Pad::Red);
        view.deactivate_feedback(Pad::Blue);

        assert_eq!(view.heading(), "Round 1 of 8");
        assert_eq!(view.activations(), vec![Pad::Blue, Pad::Red]);
        assert!(view.lit().contains(&Pad::Red));
        assert!(!view.lit().contains(&Pad::Blue));

        assert_eq!(view.take_events().len(), 4);
        assert!(view.events().is_empty());
    }
}
