//! Quit key selection.
//!
//! The quit chord differs by OS family. It is resolved once at startup
//! into a plain enum instead of branching on the platform in the event
//! loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The chord that ends the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitKey {
    /// Ctrl-C (Unix-like terminals; raw mode delivers it as a key event)
    CtrlC,
    /// Ctrl-W (Windows consoles, where Ctrl-C is often swallowed)
    CtrlW,
}

impl QuitKey {
    /// Resolve the quit chord for the current platform.
    pub fn for_platform() -> Self {
        if cfg!(windows) {
            QuitKey::CtrlW
        } else {
            QuitKey::CtrlC
        }
    }

    /// Whether `key` is this chord.
    pub fn matches(self, key: &KeyEvent) -> bool {
        let wanted = match self {
            QuitKey::CtrlC => 'c',
            QuitKey::CtrlW => 'w',
        };
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(wanted)
    }

    /// Label for the status bar hint.
    pub fn label(self) -> &'static str {
        match self {
            QuitKey::CtrlC => "ctrl+c",
            QuitKey::CtrlW => "ctrl+w",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn platform_resolution_is_fixed_at_startup() {
        let key = QuitKey::for_platform();
        if cfg!(windows) {
            assert_eq!(key, QuitKey::CtrlW);
        } else {
            assert_eq!(key, QuitKey::CtrlC);
        }
    }

    #[test]
    fn ctrl_c_matches_only_the_ctrl_c_chord() {
        assert!(QuitKey::CtrlC.matches(&ctrl('c')));
        assert!(!QuitKey::CtrlC.matches(&ctrl('w')));
        assert!(!QuitKey::CtrlW.matches(&ctrl('c')));
        assert!(QuitKey::CtrlW.matches(&ctrl('w')));
    }

    #[test]
    fn plain_letter_does_not_quit() {
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!QuitKey::CtrlC.matches(&plain));
    }

    #[test]
    fn labels_name_the_chord() {
        assert_eq!(QuitKey::CtrlC.label(), "ctrl+c");
        assert_eq!(QuitKey::CtrlW.label(), "ctrl+w");
    }
}
