use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::direction::{Direction, FadeMaskColor};
use super::engine::{advance, MarqueeState, Phase};
use super::interaction::{InteractionState, MarqueeEvent, PauseEdge};
use super::item::{reassign_filler_ids, DisplayItem, Entry};
use super::measure::Measurements;
use super::options::MarqueeOptions;
use super::presentation::{present, Presentation};

/// The scrolling ticker component
///
/// Owns the caller's item list, the current [`MarqueeState`] snapshot and the
/// interaction flags. Hosts feed it measurements, pointer events and ticks,
/// and draw whatever [`Marquee::present`] returns.
#[derive(Debug)]
pub struct Marquee {
    options: MarqueeOptions,
    items: Vec<DisplayItem>,
    state: MarqueeState,
    measurements: Measurements,
    /// Viewport size the filler was last computed for
    filler_viewport: Option<f32>,
    interaction: InteractionState,
    event_tx: Option<mpsc::UnboundedSender<MarqueeEvent>>,
}

impl Marquee {
    /// Items claiming the filler's id are renumbered, see [`reassign_filler_ids`]
    pub fn new(mut items: Vec<DisplayItem>, options: MarqueeOptions) -> Self {
        reassign_filler_ids(&mut items);
        let state = MarqueeState::initial(&items, options.direction, options.reverse_initial_order);
        let interaction = InteractionState::new(options.paused);
        Self {
            options,
            items,
            state,
            measurements: Measurements::default(),
            filler_viewport: None,
            interaction,
            event_tx: None,
        }
    }

    /// Set the event sender for host notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<MarqueeEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&self, event: MarqueeEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send marquee event: receiver dropped");
            }
        }
    }

    pub fn options(&self) -> &MarqueeOptions {
        &self.options
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn state(&self) -> &MarqueeState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Throw away the belt and rebuild it from the caller's items
    fn reinitialize(&mut self) {
        debug!(
            items = self.items.len(),
            direction = %self.options.direction,
            reverse = self.options.reverse_initial_order,
            "Reinitializing marquee"
        );
        self.state = MarqueeState::initial(
            &self.items,
            self.options.direction,
            self.options.reverse_initial_order,
        );
        self.filler_viewport = None;
        self.interaction.set_item_hover(None);
        self.refresh_layout();
    }

    /// Replace the item list; always a full re-init
    pub fn set_items(&mut self, mut items: Vec<DisplayItem>) {
        reassign_filler_ids(&mut items);
        self.items = items;
        self.reinitialize();
    }

    /// Change direction; switching axis drops the measurements until the
    /// host reports sizes along the new one
    pub fn set_direction(&mut self, direction: Direction) {
        if self.options.direction != direction {
            self.forget_measurements_on_axis_switch(direction);
            self.options.direction = direction;
            self.reinitialize();
        }
    }

    fn forget_measurements_on_axis_switch(&mut self, direction: Direction) {
        if self.options.direction.orientation() != direction.orientation() {
            debug!(from = %self.options.direction, to = %direction, "Axis switch, dropping measurements");
            self.measurements = Measurements::default();
        }
    }

    pub fn set_reverse_initial_order(&mut self, reverse: bool) {
        if self.options.reverse_initial_order != reverse {
            self.options.reverse_initial_order = reverse;
            self.reinitialize();
        }
    }

    /// Apply a whole new option set, re-initializing or emitting edges as needed
    pub fn set_options(&mut self, options: MarqueeOptions) {
        let paused = options.paused;
        let needs_reinit = options.direction != self.options.direction
            || options.reverse_initial_order != self.options.reverse_initial_order;
        self.forget_measurements_on_axis_switch(options.direction);
        self.options = options;
        if needs_reinit {
            self.reinitialize();
        }
        self.apply_paused(paused);
    }

    pub fn set_tick_delay_ms(&mut self, delay_ms: u64) {
        self.options.tick_delay_ms = delay_ms;
    }

    pub fn faster(&mut self) {
        self.options.faster();
    }

    pub fn slower(&mut self) {
        self.options.slower();
    }

    pub fn set_pause_on_hover(&mut self, enabled: bool) {
        self.options.pause_on_hover = enabled;
    }

    pub fn set_pause_on_item_hover(&mut self, enabled: bool) {
        self.options.pause_on_item_hover = enabled;
    }

    pub fn set_fade_mask(&mut self, apply: bool, color: FadeMaskColor) {
        self.options.apply_fade_mask = apply;
        self.options.fade_mask_color = color;
    }

    /// Update the external pause flag
    pub fn set_paused(&mut self, paused: bool) {
        self.apply_paused(paused);
    }

    fn apply_paused(&mut self, paused: bool) {
        self.options.paused = paused;
        match self.interaction.set_paused(paused) {
            Some(PauseEdge::Paused) => {
                debug!("Marquee paused");
                self.send_event(MarqueeEvent::Paused);
            }
            Some(PauseEdge::Resumed) => {
                debug!("Marquee resumed");
                self.send_event(MarqueeEvent::Resumed);
            }
            None => {}
        }
    }

    /// Track container hover; `ContainerHovered` is only sent with `pause_on_hover` on
    pub fn set_container_hover(&mut self, hovered: bool) {
        if self.interaction.set_container_hover(hovered) && self.options.pause_on_hover {
            self.send_event(MarqueeEvent::ContainerHovered);
        }
    }

    /// Update the hovered entry by sequence index; the filler is never hoverable
    ///
    /// `ItemHovered` is only sent with `pause_on_item_hover` on.
    pub fn set_item_hover(&mut self, index: Option<usize>) {
        let index = index.filter(|i| self.real_item(*i).is_some());
        let Some(entered) = self.interaction.set_item_hover(index) else {
            return;
        };
        if !self.options.pause_on_item_hover {
            return;
        }
        if let Some(item) = self.real_item(entered).cloned() {
            self.send_event(MarqueeEvent::ItemHovered { item, index: entered });
        }
    }

    /// Click-equivalent on the entry at `index`
    pub fn activate_item(&mut self, index: usize) {
        if let Some(item) = self.real_item(index).cloned() {
            debug!(id = %item.id, index, "Marquee item activated");
            self.send_event(MarqueeEvent::ItemActivated { item, index });
        }
    }

    fn real_item(&self, index: usize) -> Option<&DisplayItem> {
        self.state.sequence.get(index).and_then(Entry::as_item)
    }

    pub fn effective_pause(&self) -> bool {
        self.interaction.effective_pause(&self.options)
    }

    /// Delay to hand to the tick scheduler; `None` while suspended
    pub fn tick_delay(&self) -> Option<Duration> {
        if self.effective_pause() {
            None
        } else {
            Some(self.options.tick_delay())
        }
    }

    /// Accept fresh sizes from the rendering layer
    ///
    /// The filler is only recomputed after a re-init or when the viewport
    /// size changed.
    pub fn measure(&mut self, measurements: Measurements) {
        self.measurements = measurements;
        self.refresh_layout();
    }

    fn refresh_layout(&mut self) {
        if !self.measurements.is_ready(&self.state.sequence) {
            if self.state.phase == Phase::Ready {
                trace!("Marquee measurement not ready, holding motion");
            }
            return;
        }

        let viewport = self.measurements.viewport_size();
        if self.filler_viewport != Some(viewport) || self.state.phase != Phase::Ready {
            let size = self.measurements.required_filler_size(&self.state.sequence);
            debug!(viewport, filler = size, "Sizing marquee filler");
            let mut next = self.state.clone();
            next.sequence = next.sequence.with_filler_size(size);
            next.phase = Phase::Ready;
            self.state = next;
            self.filler_viewport = Some(viewport);
        }
    }

    /// Tick handler; returns whether the snapshot changed
    pub fn tick(&mut self) -> bool {
        if self.effective_pause() {
            return false;
        }
        match advance(
            &self.state,
            self.options.direction,
            self.options.step,
            &self.measurements,
        ) {
            Some(transition) => {
                for id in &transition.recycled {
                    trace!(%id, "Recycled marquee entry");
                }
                self.state = transition.state;
                true
            }
            None => false,
        }
    }

    pub fn present(&self) -> Presentation {
        present(&self.state, &self.options, &self.measurements)
    }
}
