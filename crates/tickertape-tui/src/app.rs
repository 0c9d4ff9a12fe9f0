use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use tickertape_core::marquee::presentation::ViewportSizing;
use tickertape_core::marquee::{ContainerClass, FadeMaskColor, ResizeDebouncer};
use tickertape_core::{Marquee, MarqueeEvent, UiConfig};
use tracing::{debug, info};

use crate::input::Action;
use crate::measure::{item_text, measure_items, viewport_extent};
use crate::theme::Theme;
use crate::widgets::hit_test_cell;

/// How long a status message stays in the status bar
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Bordered marquee block
    pub marquee: Rect,
    /// Marquee viewport inside the border
    pub viewport: Rect,
    pub status: Option<Rect>,
}

/// Application state
pub struct App {
    pub marquee: Marquee,
    pub theme: Theme,
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,
    pub should_quit: bool,
    pub fade_width: u16,
    pub item_gap: u16,
    pub show_status_bar: bool,
    /// Marquee viewport from the last layout
    pub viewport_area: Rect,
    last_mouse: Option<(u16, u16)>,
    resize: ResizeDebouncer,
    /// Sizes must be reported before the next frame
    needs_measure: bool,
}

impl App {
    pub fn new(marquee: Marquee, ui: &UiConfig, theme: Theme) -> Self {
        Self {
            marquee,
            theme,
            status_message: None,
            status_set_at: None,
            should_quit: false,
            fade_width: ui.fade_width,
            item_gap: ui.item_gap,
            show_status_bar: ui.show_status_bar,
            viewport_area: Rect::default(),
            last_mouse: None,
            resize: ResizeDebouncer::new(Duration::from_millis(ui.resize_debounce_ms)),
            needs_measure: true,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Split the terminal into marquee and status bar
    pub fn layout(&self, area: Rect) -> AppLayout {
        let (main, status) = if self.show_status_bar && area.height > 1 {
            let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
            (rows[0], Some(rows[1]))
        } else {
            (area, None)
        };

        let options = self.marquee.options();
        let marquee = if options.direction.is_horizontal() {
            // One text row plus the border, centered
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)])
                .split(main)[1]
        } else {
            match ContainerClass::from_options(options).sizing {
                ViewportSizing::Fixed(height) => {
                    let rows = height.max(1.0).round() as u16 + 2;
                    Layout::vertical([Constraint::Length(rows), Constraint::Fill(1)]).split(main)[0]
                }
                ViewportSizing::Min(_) | ViewportSizing::Auto => main,
            }
        };

        let viewport = Rect {
            x: marquee.x.saturating_add(1),
            y: marquee.y.saturating_add(1),
            width: marquee.width.saturating_sub(2),
            height: marquee.height.saturating_sub(2),
        };

        AppLayout {
            marquee,
            viewport,
            status,
        }
    }

    /// Track the viewport drawn this frame, measuring once resizes settle
    pub fn sync_viewport(&mut self, viewport: Rect, now: Instant) {
        self.viewport_area = viewport;
        let orientation = self.marquee.options().direction.orientation();
        let extent = viewport_extent(viewport, orientation);

        // Anything that left the marquee unmeasured is served this frame
        let unmeasured = !self.marquee.state().is_ready();
        if self.needs_measure || unmeasured || self.resize.applied().is_none() {
            self.needs_measure = false;
            self.resize.settle(extent);
            self.apply_measurements(extent);
            return;
        }

        self.resize.push(extent, now);
        if let Some(settled) = self.resize.poll(now) {
            debug!(viewport = settled, "Viewport resize settled");
            self.apply_measurements(settled);
        }
    }

    fn apply_measurements(&mut self, viewport: f32) {
        let orientation = self.marquee.options().direction.orientation();
        let measurements = measure_items(self.marquee.items(), orientation, self.item_gap, viewport);
        self.marquee.measure(measurements);
    }

    /// Apply a user action
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => {
                let paused = !self.marquee.options().paused;
                self.marquee.set_paused(paused);
            }
            Action::Faster => {
                self.marquee.faster();
                self.set_status(format!("Tick delay {}ms", self.marquee.options().tick_delay_ms));
            }
            Action::Slower => {
                self.marquee.slower();
                self.set_status(format!("Tick delay {}ms", self.marquee.options().tick_delay_ms));
            }
            Action::SetDirection(direction) => {
                if self.marquee.options().direction != direction {
                    self.marquee.set_direction(direction);
                    self.needs_measure = true;
                    self.set_status(format!("Scrolling {}", direction));
                }
            }
            Action::ToggleReverse => {
                let reverse = !self.marquee.options().reverse_initial_order;
                self.marquee.set_reverse_initial_order(reverse);
                self.set_status(if reverse { "Order reversed" } else { "Original order" });
            }
            Action::CycleFade => {
                let options = self.marquee.options();
                let current = if options.apply_fade_mask {
                    options.fade_mask_color
                } else {
                    FadeMaskColor::None
                };
                let next = current.cycle();
                self.marquee.set_fade_mask(next != FadeMaskColor::None, next);
                self.set_status(format!("Fade mask: {}", next.name()));
            }
            Action::TogglePauseOnHover => {
                let enabled = !self.marquee.options().pause_on_hover;
                self.marquee.set_pause_on_hover(enabled);
                self.set_status(format!("Pause on hover: {}", if enabled { "on" } else { "off" }));
            }
            Action::TogglePauseOnItemHover => {
                let enabled = !self.marquee.options().pause_on_item_hover;
                self.marquee.set_pause_on_item_hover(enabled);
                self.set_status(format!(
                    "Pause on item hover: {}",
                    if enabled { "on" } else { "off" }
                ));
            }
            Action::None => {}
        }
    }

    /// Pointer movement and clicks over the marquee
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.last_mouse = Some((mouse.column, mouse.row));
                self.refresh_hover();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.last_mouse = Some((mouse.column, mouse.row));
                self.refresh_hover();
                if let Some(index) = self.item_at(mouse.column, mouse.row) {
                    self.marquee.activate_item(index);
                }
            }
            _ => {}
        }
    }

    /// The pointer left the terminal
    pub fn on_focus_lost(&mut self) {
        self.last_mouse = None;
        self.marquee.set_container_hover(false);
    }

    /// Re-resolve hover after items moved under a still pointer
    pub fn refresh_hover(&mut self) {
        let Some((column, row)) = self.last_mouse else {
            return;
        };
        let area = self.viewport_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;

        self.marquee.set_container_hover(inside);
        let index = if inside { self.item_at(column, row) } else { None };
        self.marquee.set_item_hover(index);
    }

    fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        hit_test_cell(&self.marquee.present(), self.viewport_area, column, row)
    }

    /// React to a notification from the marquee
    pub fn handle_marquee_event(&mut self, event: MarqueeEvent) {
        match event {
            MarqueeEvent::Paused => debug!("Paused"),
            MarqueeEvent::Resumed => debug!("Resumed"),
            MarqueeEvent::ContainerHovered => debug!("Pointer entered marquee"),
            MarqueeEvent::ItemHovered { item, index } => {
                debug!(id = %item.id, index, "Item hovered");
            }
            MarqueeEvent::ItemActivated { item, index } => {
                let text = item_text(&item);
                info!(id = %item.id, index, "Item selected: {}", text);
                self.set_status(format!("Selected: {}", text));
            }
        }
    }

    /// Housekeeping between frames
    pub fn on_idle(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at {
            if now.duration_since(set_at) >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tickertape_core::{Direction, DisplayItem, ItemId, MarqueeOptions};

    fn app(direction: Direction) -> App {
        let items = vec![DisplayItem::text(1, "ab"), DisplayItem::text(2, "cd")];
        let options = MarqueeOptions {
            direction,
            ..MarqueeOptions::default()
        };
        let ui = UiConfig {
            item_gap: 1,
            ..UiConfig::default()
        };
        App::new(Marquee::new(items, options), &ui, Theme::default())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_horizontal_layout_is_three_rows() {
        let app = app(Direction::Left);
        let layout = app.layout(Rect::new(0, 0, 40, 10));
        assert_eq!(layout.marquee.height, 3);
        assert_eq!(layout.viewport, Rect::new(1, 4, 38, 1));
        assert_eq!(layout.status, Some(Rect::new(0, 9, 40, 1)));
    }

    #[test]
    fn test_fixed_height_vertical_layout() {
        let mut app = app(Direction::Up);
        let mut options = app.marquee.options().clone();
        options.viewport_height = Some(4.0);
        app.marquee.set_options(options);

        let layout = app.layout(Rect::new(0, 0, 20, 20));
        assert_eq!(layout.viewport.height, 4);
    }

    #[test]
    fn test_first_sync_measures_immediately() {
        let mut app = app(Direction::Left);
        assert!(!app.marquee.state().is_ready());

        app.sync_viewport(Rect::new(0, 0, 10, 1), Instant::now());
        assert!(app.marquee.state().is_ready());
        assert_eq!(app.marquee.measurements().viewport_size(), 10.0);
        assert_eq!(app.marquee.measurements().size_of(&ItemId::Num(1)), 3.0);
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut app = app(Direction::Left);
        let start = Instant::now();
        app.sync_viewport(Rect::new(0, 0, 10, 1), start);

        app.sync_viewport(Rect::new(0, 0, 30, 1), start + Duration::from_millis(10));
        assert_eq!(app.marquee.measurements().viewport_size(), 10.0);

        app.sync_viewport(Rect::new(0, 0, 30, 1), start + Duration::from_millis(200));
        assert_eq!(app.marquee.measurements().viewport_size(), 30.0);
    }

    #[test]
    fn test_direction_change_remeasures_new_axis() {
        let mut app = app(Direction::Left);
        app.sync_viewport(Rect::new(0, 0, 10, 6), Instant::now());

        app.apply_action(Action::SetDirection(Direction::Up));
        assert!(!app.marquee.state().is_ready());

        app.sync_viewport(Rect::new(0, 0, 10, 6), Instant::now());
        assert!(app.marquee.state().is_ready());
        assert_eq!(app.marquee.measurements().viewport_size(), 6.0);
        assert_eq!(app.marquee.measurements().size_of(&ItemId::Num(1)), 2.0);
    }

    #[test]
    fn test_option_axis_switch_remeasures_next_frame() {
        let mut app = app(Direction::Left);
        let start = Instant::now();
        app.sync_viewport(Rect::new(0, 0, 10, 6), start);

        let mut options = app.marquee.options().clone();
        options.direction = Direction::Down;
        app.marquee.set_options(options);
        assert!(!app.marquee.state().is_ready());

        app.sync_viewport(Rect::new(0, 0, 10, 6), start + Duration::from_millis(1));
        assert!(app.marquee.state().is_ready());
        assert_eq!(app.marquee.measurements().viewport_size(), 6.0);
        assert!(app.marquee.tick());
    }

    #[test]
    fn test_hover_and_click() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut app = app(Direction::Left);
        app.marquee = Marquee::new(
            vec![DisplayItem::text(1, "ab"), DisplayItem::text(2, "cd")],
            MarqueeOptions {
                direction: Direction::Left,
                pause_on_item_hover: true,
                ..MarqueeOptions::default()
            },
        )
        .with_event_sender(tx);
        app.sync_viewport(Rect::new(5, 2, 10, 1), Instant::now());

        app.on_mouse(mouse(MouseEventKind::Moved, 8, 2));
        assert_eq!(app.marquee.interaction().hovered_item(), Some(1));
        assert!(app.marquee.effective_pause());

        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
        let mut activated = None;
        while let Ok(event) = rx.try_recv() {
            if let MarqueeEvent::ItemActivated { item, .. } = event {
                activated = Some(item.id);
            }
        }
        assert_eq!(activated, Some(ItemId::Num(1)));

        app.on_mouse(mouse(MouseEventKind::Moved, 0, 0));
        assert!(!app.marquee.interaction().container_hovered());
        assert_eq!(app.marquee.interaction().hovered_item(), None);
        assert!(!app.marquee.effective_pause());
    }

    #[test]
    fn test_cycle_fade() {
        let mut app = app(Direction::Left);
        app.apply_action(Action::CycleFade);
        assert_eq!(app.marquee.options().fade_mask_color, FadeMaskColor::Black);
        app.apply_action(Action::CycleFade);
        assert!(!app.marquee.options().apply_fade_mask);
        app.apply_action(Action::CycleFade);
        assert!(app.marquee.options().apply_fade_mask);
        assert_eq!(app.marquee.options().fade_mask_color, FadeMaskColor::White);
    }

    #[test]
    fn test_toggle_pause_and_quit() {
        let mut app = app(Direction::Left);
        app.apply_action(Action::TogglePause);
        assert!(app.marquee.effective_pause());
        app.apply_action(Action::TogglePause);
        assert!(!app.marquee.effective_pause());

        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_expires() {
        let mut app = app(Direction::Left);
        app.set_status("hello");
        app.on_idle(Instant::now());
        assert!(app.status_message.is_some());
        app.on_idle(Instant::now() + STATUS_TIMEOUT);
        assert!(app.status_message.is_none());
    }
}
