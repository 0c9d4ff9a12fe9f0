use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tickertape_core::config::KeymapConfig;
use tickertape_core::Direction;
use tracing::warn;

use crate::input::Action;

/// Names accepted inside `<...>`, compared case-insensitively
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("cr", KeyCode::Enter),
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("escape", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("space", KeyCode::Char(' ')),
    ("spc", KeyCode::Char(' ')),
    ("bs", KeyCode::Backspace),
    ("backspace", KeyCode::Backspace),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pgup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("pgdn", KeyCode::PageDown),
    ("lt", KeyCode::Char('<')),
    ("gt", KeyCode::Char('>')),
];

/// A key plus the modifiers held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Binding for a pressed key
    ///
    /// Terminals report symbols such as `+` or `?` with SHIFT set; that
    /// modifier is dropped so "+" in the config matches.
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers;
        if let KeyCode::Char(c) = key.code {
            if !c.is_ascii_alphabetic() {
                modifiers.remove(KeyModifiers::SHIFT);
            }
        }
        Self::new(key.code, modifiers)
    }
}

/// Configured key string for every bindable action
fn configured_bindings(config: &KeymapConfig) -> [(&str, Action); 12] {
    [
        (config.quit.as_str(), Action::Quit),
        (config.toggle_pause.as_str(), Action::TogglePause),
        (config.faster.as_str(), Action::Faster),
        (config.slower.as_str(), Action::Slower),
        (config.direction_up.as_str(), Action::SetDirection(Direction::Up)),
        (config.direction_down.as_str(), Action::SetDirection(Direction::Down)),
        (config.direction_left.as_str(), Action::SetDirection(Direction::Left)),
        (config.direction_right.as_str(), Action::SetDirection(Direction::Right)),
        (config.reverse.as_str(), Action::ToggleReverse),
        (config.cycle_fade.as_str(), Action::CycleFade),
        (config.toggle_pause_on_hover.as_str(), Action::TogglePauseOnHover),
        (config.toggle_pause_on_item_hover.as_str(), Action::TogglePauseOnItemHover),
    ]
}

/// Fixed keys that work unless the config claims them
const FALLBACK_BINDINGS: [(KeyCode, Action); 5] = [
    (KeyCode::Up, Action::SetDirection(Direction::Up)),
    (KeyCode::Down, Action::SetDirection(Direction::Down)),
    (KeyCode::Left, Action::SetDirection(Direction::Left)),
    (KeyCode::Right, Action::SetDirection(Direction::Right)),
    (KeyCode::Esc, Action::Quit),
];

/// Lookup table from pressed keys to actions
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Build the table; on a conflict the earlier action keeps the key
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings: HashMap<KeyBinding, Action> = HashMap::new();

        for (notation, action) in configured_bindings(config) {
            let Some(binding) = parse_key_binding(notation) else {
                warn!("Invalid key binding '{}' for {:?}, ignoring", notation, action);
                continue;
            };
            match bindings.get(&binding) {
                Some(existing) => warn!(
                    "Key '{}' is already bound to {:?}, not binding it to {:?}",
                    notation, existing, action
                ),
                None => {
                    bindings.insert(binding, action);
                }
            }
        }

        // Ctrl+C quits no matter what
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        for (code, action) in FALLBACK_BINDINGS {
            bindings.entry(KeyBinding::simple(code)).or_insert(action);
        }

        Self { bindings }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }
}

/// Parse Vim-style key notation
///
/// A lone character binds that key, with uppercase letters implying Shift.
/// Bracketed forms take named keys and stacked modifiers, e.g. `<Space>`,
/// `<C-j>`, `<S-Tab>` or `<C-S-Left>`.
pub fn parse_key_binding(notation: &str) -> Option<KeyBinding> {
    let notation = notation.trim();

    if let Some(inner) = notation
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .filter(|inner| !inner.is_empty())
    {
        return parse_bracketed(inner);
    }

    let c = single_char(notation)?;
    let modifiers = if c.is_ascii_uppercase() {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    Some(KeyBinding::new(KeyCode::Char(c), modifiers))
}

fn parse_bracketed(inner: &str) -> Option<KeyBinding> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = inner;
    // Peel `C-`, `S-` and `A-` prefixes; a bare "-" is a key, not a modifier
    while rest.len() > 2 {
        let modifier = match rest.get(..2)? {
            "C-" | "c-" => KeyModifiers::CONTROL,
            "S-" | "s-" => KeyModifiers::SHIFT,
            "A-" | "a-" | "M-" | "m-" => KeyModifiers::ALT,
            _ => break,
        };
        modifiers |= modifier;
        rest = &rest[2..];
    }

    let code = named_key(rest).or_else(|| {
        // Letters after a modifier are stored lowercase, as terminals send them
        single_char(rest).map(|c| KeyCode::Char(c.to_ascii_lowercase()))
    })?;
    Some(KeyBinding::new(code, modifiers))
}

fn named_key(name: &str) -> Option<KeyCode> {
    NAMED_KEYS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
