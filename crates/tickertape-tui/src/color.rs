//! Color blending for the edge fade.

use ratatui::style::Color;
use tickertape_core::FadeMaskColor;

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Blend `color` toward `target` by `t` in [0, 1]; only RGB colors blend
pub fn blend(color: Color, target: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (color, target) {
        (Color::Rgb(r, g, b), Color::Rgb(tr, tg, tb)) => {
            let mix = |from: u8, to: u8| lerp(from as f64, to as f64, t).round() as u8;
            Color::Rgb(mix(r, tr), mix(g, tg), mix(b, tb))
        }
        _ => color,
    }
}

/// Color the edges fade into
pub fn fade_target(color: FadeMaskColor) -> Option<Color> {
    match color {
        FadeMaskColor::None => None,
        FadeMaskColor::White => Some(Color::Rgb(0xff, 0xff, 0xff)),
        FadeMaskColor::Black => Some(Color::Rgb(0x00, 0x00, 0x00)),
    }
}

/// Fade strength for a cell `distance` cells in from the nearest edge
///
/// The outermost cell is strongest; cells at `width` or further are untouched.
pub fn fade_strength(distance: u16, width: u16) -> f64 {
    if distance >= width {
        0.0
    } else {
        (width - distance) as f64 / (width + 1) as f64
    }
}
