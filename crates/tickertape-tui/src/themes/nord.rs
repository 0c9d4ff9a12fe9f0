//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        // Polar Night
        bg: Color::Rgb(0x2e, 0x34, 0x40),     // nord0
        bg_alt: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        // Snow Storm
        fg: Color::Rgb(0xec, 0xef, 0xf4),     // nord6
        fg_dim: Color::Rgb(0x5e, 0x68, 0x7a), // nord3 lighter
        accent: Color::Rgb(0x8f, 0xbc, 0xbb), // nord7
        code: Color::Rgb(0xd0, 0x87, 0x70),   // nord12
        paused: Color::Rgb(0xeb, 0xcb, 0x8b), // nord13
        running: Color::Rgb(0xa3, 0xbe, 0x8c), // nord14
        palette: vec![
            Color::Rgb(0xec, 0xef, 0xf4), // nord6
            Color::Rgb(0xbf, 0x61, 0x6a), // nord11
            Color::Rgb(0xd0, 0x87, 0x70), // nord12
            Color::Rgb(0xeb, 0xcb, 0x8b), // nord13
            Color::Rgb(0xa3, 0xbe, 0x8c), // nord14
            Color::Rgb(0x88, 0xc0, 0xd0), // nord8
            Color::Rgb(0xb4, 0x8e, 0xad), // nord15
        ],
    }
}
