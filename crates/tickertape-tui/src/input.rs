use crossterm::event::KeyEvent;
use tickertape_core::Direction;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    Faster,
    Slower,
    SetDirection(Direction),
    ToggleReverse,
    CycleFade,
    TogglePauseOnHover,
    TogglePauseOnItemHover,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    keymap
        .get(&KeyBinding::from_event(&key))
        .copied()
        .unwrap_or(Action::None)
}
