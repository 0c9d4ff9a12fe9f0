//! Monokai theme
//! https://monokai.pro/

use ratatui::style::Color;
use crate::theme::Theme;

/// Monokai default theme
pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x27, 0x28, 0x22),     // background
        bg_alt: Color::Rgb(0x3e, 0x3d, 0x32), // selection
        fg: Color::Rgb(0xf8, 0xf8, 0xf2),     // foreground
        fg_dim: Color::Rgb(0x75, 0x71, 0x5e), // comment
        accent: Color::Rgb(0xae, 0x81, 0xff),
        code: Color::Rgb(0xfd, 0x97, 0x1f),
        paused: Color::Rgb(0xe6, 0xdb, 0x74),
        running: Color::Rgb(0xa6, 0xe2, 0x2e),
        palette: vec![
            Color::Rgb(0xf8, 0xf8, 0xf2), // foreground
            Color::Rgb(0xf9, 0x26, 0x72), // magenta/red
            Color::Rgb(0xfd, 0x97, 0x1f), // orange
            Color::Rgb(0xe6, 0xdb, 0x74), // yellow
            Color::Rgb(0xa6, 0xe2, 0x2e), // green
            Color::Rgb(0x66, 0xd9, 0xef), // cyan
            Color::Rgb(0xae, 0x81, 0xff), // purple
        ],
    }
}
