//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark (material palette)
pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),
        bg_alt: Color::Rgb(0x45, 0x40, 0x3d),
        fg: Color::Rgb(0xd4, 0xbe, 0x98),
        fg_dim: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        code: Color::Rgb(0xe7, 0x8a, 0x4e),
        paused: Color::Rgb(0xd8, 0xa6, 0x57),
        running: Color::Rgb(0xa9, 0xb6, 0x65),
        palette: vec![
            Color::Rgb(0xd4, 0xbe, 0x98), // fg
            Color::Rgb(0xea, 0x69, 0x62), // red
            Color::Rgb(0xe7, 0x8a, 0x4e), // orange
            Color::Rgb(0xd8, 0xa6, 0x57), // yellow
            Color::Rgb(0xa9, 0xb6, 0x65), // green
            Color::Rgb(0x7d, 0xae, 0xa3), // blue
            Color::Rgb(0xd3, 0x86, 0x9b), // purple
        ],
    }
}
