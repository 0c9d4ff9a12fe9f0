//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2a, 0x36),     // Background
        bg_alt: Color::Rgb(0x44, 0x47, 0x5a), // Selection
        fg: Color::Rgb(0xf8, 0xf8, 0xf2),     // Foreground
        fg_dim: Color::Rgb(0x62, 0x72, 0xa4), // Comment
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
        code: Color::Rgb(0xff, 0xb8, 0x6c),
        paused: Color::Rgb(0xf1, 0xfa, 0x8c),
        running: Color::Rgb(0x50, 0xfa, 0x7b),
        palette: vec![
            Color::Rgb(0xf8, 0xf8, 0xf2), // Foreground
            Color::Rgb(0xff, 0x55, 0x55), // Red
            Color::Rgb(0xff, 0xb8, 0x6c), // Orange
            Color::Rgb(0xf1, 0xfa, 0x8c), // Yellow
            Color::Rgb(0x50, 0xfa, 0x7b), // Green
            Color::Rgb(0x8b, 0xe9, 0xfd), // Cyan
            Color::Rgb(0xff, 0x79, 0xc6), // Pink
        ],
    }
}
