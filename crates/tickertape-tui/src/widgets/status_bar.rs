use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let options = app.marquee.options();
        let bar = Style::default().bg(theme.bg_alt);

        let (state, state_color) = if app.marquee.effective_pause() {
            (" PAUSED ", theme.paused)
        } else {
            (" RUNNING ", theme.running)
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " {} | {}ms | fade:{} | hover:{} item-hover:{}{}",
                options.direction,
                options.tick_delay_ms,
                if options.apply_fade_mask {
                    options.fade_mask_color.name()
                } else {
                    "none"
                },
                on_off(options.pause_on_hover),
                on_off(options.pause_on_item_hover),
                if options.reverse_initial_order { " | reversed" } else { "" },
            ),
        };

        let help_hint = " q:quit space:pause +/-:speed hjkl:direction r:reverse f:fade ";
        let used = state.width() + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                state,
                Style::default()
                    .fg(theme.bg)
                    .bg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, bar.fg(theme.fg)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(theme.fg_dim)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
