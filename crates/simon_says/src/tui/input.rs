//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use simon_core::Pad;

/// What a key asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press a pad.
    Press(Pad),
    /// Choose the level for the next game.
    SelectLevel(i64),
    /// Start a game at the selected level.
    Start,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Start),
        KeyCode::Char(c @ '1'..='4') => c.to_digit(10).map(|d| Action::SelectLevel(i64::from(d))),
        KeyCode::Char(c) => Pad::from_key(c).map(Action::Press),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_pad_keys() {
        assert_eq!(action_for(key(KeyCode::Char('g'))), Some(Action::Press(Pad::Green)));
        assert_eq!(action_for(key(KeyCode::Char('R'))), Some(Action::Press(Pad::Red)));
        assert_eq!(action_for(key(KeyCode::Char('y'))), Some(Action::Press(Pad::Yellow)));
        assert_eq!(action_for(key(KeyCode::Char('b'))), Some(Action::Press(Pad::Blue)));
    }

    #[test]
    fn test_level_keys() {
        assert_eq!(action_for(key(KeyCode::Char('3'))), Some(Action::SelectLevel(3)));
        assert_eq!(action_for(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_start_and_quit() {
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Start));
        assert_eq!(action_for(key(KeyCode::Char('s'))), Some(Action::Start));
        assert_eq!(action_for(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(key(KeyCode::Char('x'))), None);
        assert_eq!(action_for(key(KeyCode::Tab)), None);
    }
}
