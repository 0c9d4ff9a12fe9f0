use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
    Frame,
};
use tickertape_core::marquee::{
    ItemView, ItemViewKind, Orientation, Placement, Presentation, ResolvedContent,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::color::{blend, fade_strength, fade_target};
use crate::theme::Theme;

pub struct MarqueeWidget;

impl MarqueeWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme.fg_dim).bg(app.theme.bg))
            .title(format!(" tickertape · {} ", app.marquee.options().direction));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let presentation = app.marquee.present();
        let view = MarqueeView::new(&presentation, &app.theme)
            .hovered(app.marquee.interaction().hovered_item())
            .fade_width(app.fade_width);
        frame.render_widget(view, inner);
    }
}

/// Draws one marquee frame into a buffer area
pub struct MarqueeView<'a> {
    presentation: &'a Presentation,
    theme: &'a Theme,
    hovered: Option<usize>,
    fade_width: u16,
}

impl<'a> MarqueeView<'a> {
    pub fn new(presentation: &'a Presentation, theme: &'a Theme) -> Self {
        Self {
            presentation,
            theme,
            hovered: None,
            fade_width: 0,
        }
    }

    pub fn hovered(mut self, index: Option<usize>) -> Self {
        self.hovered = index;
        self
    }

    pub fn fade_width(mut self, width: u16) -> Self {
        self.fade_width = width;
        self
    }

    fn item_cells(&self, view: &ItemView) -> Vec<(char, Style)> {
        let ItemViewKind::Item {
            content,
            color,
            icon,
        } = &view.kind
        else {
            return Vec::new();
        };

        let hovered = self.hovered == Some(view.index);
        let mut base = Style::default()
            .fg(self.theme.item_color(*color))
            .bg(self.theme.bg);
        if hovered {
            base = base.bg(self.theme.bg_alt).add_modifier(Modifier::BOLD);
        }

        let mut cells = Vec::new();
        if let Some(icon) = icon {
            let style = base.fg(self.theme.accent);
            cells.extend(icon.chars().map(|c| (c, style)));
            cells.push((' ', base));
        }

        match content {
            ResolvedContent::Plain(text) => cells.extend(text.chars().map(|c| (c, base))),
            ResolvedContent::Rich(segments) => {
                for segment in segments {
                    let mut style = base;
                    if segment.style.bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if segment.style.italic {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    if segment.style.code {
                        style = style.fg(self.theme.code);
                    }
                    cells.extend(segment.text.chars().map(|c| (c, style)));
                }
            }
        }
        cells
    }

    fn draw_horizontal(&self, buf: &mut Buffer, area: Rect, placement: &Placement, cells: &[(char, Style)]) {
        let y = area.y + area.height / 2;
        let mut col = placement.start.floor() as i64;
        for &(c, style) in cells {
            let width = c.width().unwrap_or(0) as i64;
            if width == 0 {
                continue;
            }
            if col >= 0 && col + width <= area.width as i64 {
                put(buf, area.x + col as u16, y, c, style, width as u16);
            }
            col += width;
        }
    }

    fn draw_vertical(&self, buf: &mut Buffer, area: Rect, placement: &Placement, cells: &[(char, Style)]) {
        let row = placement.start.floor() as i64;
        if row < 0 || row >= area.height as i64 {
            return;
        }
        let y = area.y + row as u16;
        // One cell of padding on each side
        let limit = area.width.saturating_sub(1) as i64;
        let mut col = 1i64;
        for &(c, style) in cells {
            let width = c.width().unwrap_or(0) as i64;
            if width == 0 {
                continue;
            }
            if col + width > limit {
                break;
            }
            put(buf, area.x + col as u16, y, c, style, width as u16);
            col += width;
        }
    }

    fn apply_fade(&self, buf: &mut Buffer, area: Rect, orientation: Orientation) {
        let Some(target) = self.presentation.container.fade.and_then(fade_target) else {
            return;
        };
        if self.fade_width == 0 {
            return;
        }

        let length = match orientation {
            Orientation::Horizontal => area.width,
            Orientation::Vertical => area.height,
        };
        for along in 0..length {
            let distance = along.min(length - 1 - along);
            let t = fade_strength(distance, self.fade_width);
            if t <= 0.0 {
                continue;
            }
            let across = match orientation {
                Orientation::Horizontal => area.height,
                Orientation::Vertical => area.width,
            };
            for other in 0..across {
                let (x, y) = match orientation {
                    Orientation::Horizontal => (area.x + along, area.y + other),
                    Orientation::Vertical => (area.x + other, area.y + along),
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let fg = blend(cell.fg, target, t);
                    let bg = blend(cell.bg, target, t);
                    cell.set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, c: char, style: Style, width: u16) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(c).set_style(style);
    }
    // Cells hidden behind a wide character
    for i in 1..width {
        if let Some(cell) = buf.cell_mut((x + i, y)) {
            cell.reset();
            cell.set_style(style);
        }
    }
}

impl Widget for MarqueeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().fg(self.theme.fg).bg(self.theme.bg));

        let orientation = self.presentation.direction.orientation();
        // The filler is transparent: nothing to draw
        for placement in self.presentation.visible().filter(|p| !p.is_filler) {
            let Some(view) = self.presentation.item(placement.index) else {
                continue;
            };
            let cells = self.item_cells(view);
            match orientation {
                Orientation::Horizontal => self.draw_horizontal(buf, area, placement, &cells),
                Orientation::Vertical => self.draw_vertical(buf, area, placement, &cells),
            }
        }

        self.apply_fade(buf, area, orientation);
    }
}

/// Item index under the terminal cell at `column`, `row`
///
/// `area` is the viewport the presentation was drawn into.
pub fn hit_test_cell(presentation: &Presentation, area: Rect, column: u16, row: u16) -> Option<usize> {
    if column < area.x || column >= area.x + area.width || row < area.y || row >= area.y + area.height {
        return None;
    }
    let cell = match presentation.direction.orientation() {
        Orientation::Horizontal => column - area.x,
        Orientation::Vertical => row - area.y,
    } as f32;
    // Entries are drawn at floor(start); shift by the shared fractional part
    let fraction = presentation
        .placements
        .first()
        .map(|p| p.start - p.start.floor())
        .unwrap_or(0.0);
    presentation.hit_test(cell + fraction)
}

/// Render a frame off-screen and return its rows as plain text
pub fn render_lines(view: MarqueeView<'_>, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf);
    (0..height)
        .map(|y| {
            (0..width)
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect()
        })
        .collect()
}
