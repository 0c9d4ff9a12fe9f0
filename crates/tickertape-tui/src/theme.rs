use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg: Color,
    pub bg_alt: Color,

    // Foreground colors
    pub fg: Color,
    pub fg_dim: Color,

    // Semantic colors
    pub accent: Color,
    pub code: Color,
    pub paused: Color,
    pub running: Color,

    /// Item colors, picked by an item's `color` index
    pub palette: Vec<Color>,
}

impl Theme {
    /// Foreground for an item with the given palette index
    pub fn item_color(&self, index: Option<u8>) -> Color {
        match index {
            Some(i) if !self.palette.is_empty() => self.palette[i as usize % self.palette.len()],
            _ => self.fg,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}
