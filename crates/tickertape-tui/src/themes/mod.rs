//! Built-in color schemes and the config-driven loader.

mod dracula;
pub(crate) mod gruvbox;
mod monokai;
mod nord;
mod one_dark;

use ratatui::style::Color;
use tickertape_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

/// `#rrggbb` or `#rgb` (the `#` is optional) as an RGB color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let channel = |shift: u32, mask: u32| ((value >> shift) & mask) as u8;

    match digits.len() {
        6 => Some(Color::Rgb(channel(16, 0xff), channel(8, 0xff), channel(0, 0xff))),
        // Each short digit doubles up: f -> ff
        3 => Some(Color::Rgb(
            channel(8, 0xf) * 0x11,
            channel(4, 0xf) * 0x11,
            channel(0, 0xf) * 0x11,
        )),
        _ => None,
    }
}

/// Built-in theme names and their constructors
const BUILTIN: &[(&[&str], fn() -> Theme)] = &[
    (&["gruvbox-dark", "gruvbox"], gruvbox::dark),
    (&["nord"], nord::default),
    (&["dracula"], dracula::default),
    (&["one-dark", "onedark"], one_dark::default),
    (&["monokai"], monokai::default),
];

/// Resolve the configured theme and apply its color overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let name = config.name.trim();
    let base = BUILTIN
        .iter()
        .find(|(aliases, _)| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name)))
        .map(|(_, build)| build())
        .unwrap_or_else(|| {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", name);
            gruvbox::dark()
        });

    apply_overrides(base, &config.colors)
}

fn override_color(slot: &mut Color, hex: &Option<String>) {
    if let Some(ref hex) = hex {
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid color override '{}'", hex),
        }
    }
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    override_color(&mut theme.bg, &overrides.bg);
    override_color(&mut theme.bg_alt, &overrides.bg_alt);
    override_color(&mut theme.fg, &overrides.fg);
    override_color(&mut theme.fg_dim, &overrides.fg_dim);
    override_color(&mut theme.accent, &overrides.accent);
    override_color(&mut theme.code, &overrides.code);
    override_color(&mut theme.paused, &overrides.paused);
    override_color(&mut theme.running, &overrides.running);

    if let Some(ref palette) = overrides.palette {
        let colors: Vec<Color> = palette.iter().filter_map(|hex| parse_hex_color(hex)).collect();
        if colors.is_empty() {
            warn!("Palette override has no valid colors, keeping theme palette");
        } else {
            theme.palette = colors;
        }
    }

    theme
}

/// Canonical name of every built-in theme
pub fn available_themes() -> Vec<&'static str> {
    BUILTIN.iter().map(|(aliases, _)| aliases[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_hex_color("#ff5500"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color("FF5500"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color("#f50"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color(" #0a0b0c "), Some(Color::Rgb(10, 11, 12)));
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        for bad in ["", "#", "invalid", "#gg0000", "#ff550", "+fff", "#ééé"] {
            assert_eq!(parse_hex_color(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let theme = load_theme(&ThemeConfig {
            name: "Gruvbox".to_string(),
            colors: ThemeColorOverrides::default(),
        });
        assert_eq!(theme.bg, Color::Rgb(0x28, 0x28, 0x28));
        assert_eq!(load_theme(&ThemeConfig::default()).bg, theme.bg);
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            let theme = load_theme(&ThemeConfig {
                name: name.to_string(),
                colors: ThemeColorOverrides::default(),
            });
            assert!(!theme.palette.is_empty(), "{name} has no palette");
        }
    }

    #[test]
    fn test_overrides_replace_colors_and_palette() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                fg: Some("nonsense".to_string()),
                palette: Some(vec!["#010203".to_string(), "bogus".to_string()]),
                ..ThemeColorOverrides::default()
            },
        };
        let nord = nord::default();
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.fg, nord.fg);
        assert_eq!(theme.palette, vec![Color::Rgb(1, 2, 3)]);
    }
}
