//! Keyboard input handling for the dashboard.
//!
//! Pure mapping from key events to dashboard intents; the event loop
//! turns intents into engine commands or a clean exit.

use crossterm::event::{KeyCode, KeyEvent};

use super::keys::QuitKey;

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// End the main loop cleanly
    Quit,
    /// Flip the pause flag
    TogglePause,
    /// Move the ticker panel by (dx, dy)
    Nudge(i32, i32),
    /// Key has no binding
    Ignored,
}

/// Map a key event to its action under the resolved quit chord.
pub fn action_for(key: &KeyEvent, quit: QuitKey) -> InputAction {
    if quit.matches(key) {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char(' ') => InputAction::TogglePause,
        KeyCode::Left => InputAction::Nudge(-1, 0),
        KeyCode::Right => InputAction::Nudge(1, 0),
        KeyCode::Up => InputAction::Nudge(0, -1),
        KeyCode::Down => InputAction::Nudge(0, 1),
        _ => InputAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_pause() {
        let action = action_for(&press(KeyCode::Char(' ')), QuitKey::CtrlC);
        assert_eq!(action, InputAction::TogglePause);
    }

    #[test]
    fn arrows_nudge_one_cell() {
        let quit = QuitKey::CtrlC;
        assert_eq!(
            action_for(&press(KeyCode::Left), quit),
            InputAction::Nudge(-1, 0)
        );
        assert_eq!(
            action_for(&press(KeyCode::Right), quit),
            InputAction::Nudge(1, 0)
        );
        assert_eq!(
            action_for(&press(KeyCode::Up), quit),
            InputAction::Nudge(0, -1)
        );
        assert_eq!(
            action_for(&press(KeyCode::Down), quit),
            InputAction::Nudge(0, 1)
        );
    }

    #[test]
    fn quit_follows_the_resolved_chord() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);

        assert_eq!(action_for(&ctrl_c, QuitKey::CtrlC), InputAction::Quit);
        assert_eq!(action_for(&ctrl_w, QuitKey::CtrlC), InputAction::Ignored);
        assert_eq!(action_for(&ctrl_w, QuitKey::CtrlW), InputAction::Quit);
        assert_eq!(action_for(&ctrl_c, QuitKey::CtrlW), InputAction::Ignored);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let quit = QuitKey::CtrlC;
        assert_eq!(action_for(&press(KeyCode::Char('q')), quit), InputAction::Ignored);
        assert_eq!(action_for(&press(KeyCode::Enter), quit), InputAction::Ignored);
        assert_eq!(action_for(&press(KeyCode::Esc), quit), InputAction::Ignored);
    }
}
