use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::marquee::MarqueeOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub marquee: MarqueeOptions,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file for the interactive ticker
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// JSON or TOML file with the items to scroll
    #[serde(default)]
    pub items_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: default_log_file(),
            items_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Quiet period before a terminal resize is applied
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
    /// Cells blended into the background at each edge
    #[serde(default = "default_fade_width")]
    pub fade_width: u16,
    /// Blank cells after every item
    #[serde(default = "default_item_gap")]
    pub item_gap: u16,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            resize_debounce_ms: default_resize_debounce(),
            fade_width: default_fade_width(),
            item_gap: default_item_gap(),
            show_status_bar: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Hex overrides applied on top of the named theme
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// `theme = "nord"` or `[ui.theme]` with `name` and `colors`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Ticker background
    pub bg: Option<String>,
    /// Status bar background
    pub bg_alt: Option<String>,
    /// Default item text
    pub fg: Option<String>,
    /// Dimmed text (status bar, separators)
    pub fg_dim: Option<String>,
    /// Hovered item and icons
    pub accent: Option<String>,
    /// Inline `code` runs
    pub code: Option<String>,
    /// Paused indicator
    pub paused: Option<String>,
    /// Running indicator
    pub running: Option<String>,
    /// Item palette, indexed by an item's `color`
    pub palette: Option<Vec<String>>,
}

/// Key bindings in Vim notation (`q`, `<Space>`, `<C-c>`)
/// Format: "j", "<C-j>" (Ctrl+j), "<S-Up>" (Shift+Up), "<CR>", "<Esc>", "<Space>", "<Left>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Pause or resume scrolling
    #[serde(default = "default_key_toggle_pause")]
    pub toggle_pause: String,
    /// Shorten the tick delay
    #[serde(default = "default_key_faster")]
    pub faster: String,
    /// Lengthen the tick delay
    #[serde(default = "default_key_slower")]
    pub slower: String,

    // Direction
    #[serde(default = "default_key_direction_up")]
    pub direction_up: String,
    #[serde(default = "default_key_direction_down")]
    pub direction_down: String,
    #[serde(default = "default_key_direction_left")]
    pub direction_left: String,
    #[serde(default = "default_key_direction_right")]
    pub direction_right: String,

    /// Reverse the initial item order and restart
    #[serde(default = "default_key_reverse")]
    pub reverse: String,
    /// Cycle the edge fade through none, white and black
    #[serde(default = "default_key_cycle_fade")]
    pub cycle_fade: String,
    #[serde(default = "default_key_toggle_pause_on_hover")]
    pub toggle_pause_on_hover: String,
    #[serde(default = "default_key_toggle_pause_on_item_hover")]
    pub toggle_pause_on_item_hover: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            toggle_pause: default_key_toggle_pause(),
            faster: default_key_faster(),
            slower: default_key_slower(),
            direction_up: default_key_direction_up(),
            direction_down: default_key_direction_down(),
            direction_left: default_key_direction_left(),
            direction_right: default_key_direction_right(),
            reverse: default_key_reverse(),
            cycle_fade: default_key_cycle_fade(),
            toggle_pause_on_hover: default_key_toggle_pause_on_hover(),
            toggle_pause_on_item_hover: default_key_toggle_pause_on_item_hover(),
        }
    }
}

// Keymap defaults
fn default_key_quit() -> String { "q".to_string() }
fn default_key_toggle_pause() -> String { "<Space>".to_string() }
fn default_key_faster() -> String { "+".to_string() }
fn default_key_slower() -> String { "-".to_string() }
fn default_key_direction_up() -> String { "k".to_string() }
fn default_key_direction_down() -> String { "j".to_string() }
fn default_key_direction_left() -> String { "h".to_string() }
fn default_key_direction_right() -> String { "l".to_string() }
fn default_key_reverse() -> String { "r".to_string() }
fn default_key_cycle_fade() -> String { "f".to_string() }
fn default_key_toggle_pause_on_hover() -> String { "p".to_string() }
fn default_key_toggle_pause_on_item_hover() -> String { "P".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    data_dir().join("tickertape.log")
}

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    16
}

fn default_resize_debounce() -> u64 {
    crate::marquee::measure::DEFAULT_RESIZE_DEBOUNCE_MS
}

fn default_fade_width() -> u16 {
    4
}

fn default_item_gap() -> u16 {
    3
}

/// Local data directory for logs
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickertape")
}

/// Replace a leading `~` with the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let path = expand_tilde(path);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// `~/.config/tickertape/config.toml`
    /// Always uses ~/.config/tickertape/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tickertape")
            .join("config.toml")
    }

    /// Log file path (with tilde expansion)
    pub fn log_file(&self) -> PathBuf {
        expand_tilde(&self.general.log_file)
    }

    /// Item file path (with tilde expansion)
    pub fn items_path(&self) -> Option<PathBuf> {
        self.general.items_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marquee::{Direction, FadeMaskColor};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.marquee, MarqueeOptions::default());
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.resize_debounce_ms, 100);
        assert_eq!(config.keymap.toggle_pause, "<Space>");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [marquee]
            direction = "left"
            fade_mask_color = "black"

            [ui]
            item_gap = 1

            [keymap]
            quit = "<Esc>"
            "#,
        )
        .unwrap();

        assert_eq!(config.marquee.direction, Direction::Left);
        assert_eq!(config.marquee.fade_mask_color, FadeMaskColor::Black);
        assert_eq!(config.marquee.tick_delay_ms, 40);
        assert_eq!(config.ui.item_gap, 1);
        assert_eq!(config.ui.fade_width, 4);
        assert_eq!(config.keymap.quit, "<Esc>");
        assert_eq!(config.keymap.faster, "+");
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config: AppConfig = toml::from_str("[ui]\ntheme = \"nord\"").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());

        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { accent = "#ff0000", palette = ["#111111", "#222222"] }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
        assert_eq!(config.ui.theme.colors.palette.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = std::env::temp_dir().join(format!("tickertape-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.marquee.direction = Direction::Right;
        config.general.items_path = Some(PathBuf::from("/tmp/items.json"));
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.marquee.direction, Direction::Right);
        assert_eq!(loaded.items_path(), Some(PathBuf::from("/tmp/items.json")));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/tickertape.toml")).unwrap();
        assert_eq!(config.ui.poll_interval_ms, 16);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = std::env::temp_dir().join(format!("tickertape-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[marquee\n").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(crate::Error::Config(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde(Path::new("/a/b")), PathBuf::from("/a/b"));
    }
}
