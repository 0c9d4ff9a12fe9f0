//! One Dark theme
//! https://github.com/atom/atom/tree/master/packages/one-dark-syntax

use ratatui::style::Color;
use crate::theme::Theme;

/// One Dark default theme
pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2c, 0x34),     // bg
        bg_alt: Color::Rgb(0x3e, 0x44, 0x51), // bg-highlight
        fg: Color::Rgb(0xab, 0xb2, 0xbf),     // fg
        fg_dim: Color::Rgb(0x5c, 0x63, 0x70), // comment
        accent: Color::Rgb(0x56, 0xb6, 0xc2),
        code: Color::Rgb(0xd1, 0x9a, 0x66),
        paused: Color::Rgb(0xe5, 0xc0, 0x7b),
        running: Color::Rgb(0x98, 0xc3, 0x79),
        palette: vec![
            Color::Rgb(0xab, 0xb2, 0xbf), // fg
            Color::Rgb(0xe0, 0x6c, 0x75), // red
            Color::Rgb(0xd1, 0x9a, 0x66), // orange
            Color::Rgb(0xe5, 0xc0, 0x7b), // yellow
            Color::Rgb(0x98, 0xc3, 0x79), // green
            Color::Rgb(0x61, 0xaf, 0xef), // blue
            Color::Rgb(0xc6, 0x78, 0xdd), // purple
        ],
    }
}
