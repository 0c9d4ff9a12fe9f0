use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::direction::{Direction, FadeMaskColor};
use super::engine::DEFAULT_STEP;

/// Default milliseconds between ticks
pub const DEFAULT_TICK_DELAY_MS: u64 = 40;

/// Slowest speed reachable through [`MarqueeOptions::slower`]
pub const MAX_TICK_DELAY_MS: u64 = 1000;
/// Fastest speed reachable through [`MarqueeOptions::faster`]
pub const MIN_TICK_DELAY_MS: u64 = 5;

/// Behaviour knobs of a marquee, also the `[marquee]` config section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueeOptions {
    #[serde(default)]
    pub direction: Direction,
    /// Inverse speed: milliseconds between ticks
    #[serde(default = "default_tick_delay")]
    pub tick_delay_ms: u64,
    /// Offset units advanced per tick
    #[serde(default = "default_step")]
    pub step: f32,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub pause_on_hover: bool,
    #[serde(default)]
    pub pause_on_item_hover: bool,
    #[serde(default = "default_true")]
    pub apply_fade_mask: bool,
    #[serde(default)]
    pub fade_mask_color: FadeMaskColor,
    #[serde(default)]
    pub reverse_initial_order: bool,
    /// Fixed viewport height; wins over `min_viewport_height`
    #[serde(default)]
    pub viewport_height: Option<f32>,
    #[serde(default = "default_min_viewport_height")]
    pub min_viewport_height: Option<f32>,
    /// Caller classes appended to the built-in ones
    #[serde(default)]
    pub classes: ExtraClasses,
}

/// Extra class names for the container, the moving strip and every item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraClasses {
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub marquee: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            tick_delay_ms: default_tick_delay(),
            step: default_step(),
            paused: false,
            pause_on_hover: false,
            pause_on_item_hover: false,
            apply_fade_mask: default_true(),
            fade_mask_color: FadeMaskColor::default(),
            reverse_initial_order: false,
            viewport_height: None,
            min_viewport_height: default_min_viewport_height(),
            classes: ExtraClasses::default(),
        }
    }
}

impl MarqueeOptions {
    /// Tick period; a zero delay falls back to the default
    pub fn tick_delay(&self) -> Duration {
        if self.tick_delay_ms == 0 {
            Duration::from_millis(DEFAULT_TICK_DELAY_MS)
        } else {
            Duration::from_millis(self.tick_delay_ms)
        }
    }

    /// Shorten the tick delay by a fifth, bounded below
    pub fn faster(&mut self) {
        let delay = self.tick_delay_ms.max(MIN_TICK_DELAY_MS);
        self.tick_delay_ms = (delay - (delay / 5).max(1)).max(MIN_TICK_DELAY_MS);
    }

    /// Lengthen the tick delay by a quarter, bounded above
    pub fn slower(&mut self) {
        let delay = self.tick_delay_ms.max(MIN_TICK_DELAY_MS);
        self.tick_delay_ms = (delay + (delay / 4).max(1)).min(MAX_TICK_DELAY_MS);
    }
}

fn default_tick_delay() -> u64 {
    DEFAULT_TICK_DELAY_MS
}

fn default_step() -> f32 {
    DEFAULT_STEP
}

fn default_true() -> bool {
    true
}

fn default_min_viewport_height() -> Option<f32> {
    Some(8.0) // terminal rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MarqueeOptions::default();
        assert_eq!(options.direction, Direction::Up);
        assert_eq!(options.tick_delay(), Duration::from_millis(40));
        assert_eq!(options.step, 1.0);
        assert!(options.apply_fade_mask);
        assert_eq!(options.fade_mask_color, FadeMaskColor::White);
        assert!(!options.paused);
    }

    #[test]
    fn test_zero_delay_falls_back() {
        let options = MarqueeOptions {
            tick_delay_ms: 0,
            ..Default::default()
        };
        assert_eq!(options.tick_delay(), Duration::from_millis(DEFAULT_TICK_DELAY_MS));
    }

    #[test]
    fn test_speed_bounds() {
        let mut options = MarqueeOptions::default();
        options.faster();
        assert_eq!(options.tick_delay_ms, 32);
        options.slower();
        assert_eq!(options.tick_delay_ms, 40);

        for _ in 0..100 {
            options.faster();
        }
        assert_eq!(options.tick_delay_ms, MIN_TICK_DELAY_MS);
        for _ in 0..100 {
            options.slower();
        }
        assert_eq!(options.tick_delay_ms, MAX_TICK_DELAY_MS);
    }

    #[test]
    fn test_partial_toml_section() {
        let options: MarqueeOptions = toml::from_str(
            r#"
            direction = "left"
            fade_mask_color = "black"
            pause_on_hover = true
            "#,
        )
        .unwrap();
        assert_eq!(options.direction, Direction::Left);
        assert_eq!(options.fade_mask_color, FadeMaskColor::Black);
        assert!(options.pause_on_hover);
        assert_eq!(options.tick_delay_ms, DEFAULT_TICK_DELAY_MS);
        assert_eq!(options.classes, ExtraClasses::default());
    }

    #[test]
    fn test_extra_classes_table() {
        let options: MarqueeOptions = toml::from_str(
            r#"
            [classes]
            item = "headline"
            "#,
        )
        .unwrap();
        assert_eq!(options.classes.item.as_deref(), Some("headline"));
        assert_eq!(options.classes.container, None);
    }
}
