use super::item::DisplayItem;
use super::options::MarqueeOptions;

/// Events emitted by the marquee to its host
#[derive(Debug, Clone, PartialEq)]
pub enum MarqueeEvent {
    /// The external `paused` flag switched on
    Paused,
    /// The external `paused` flag switched off
    Resumed,
    /// The pointer entered the viewport
    ContainerHovered,
    /// The pointer entered an item
    ItemHovered { item: DisplayItem, index: usize },
    /// An item was clicked or otherwise activated
    ItemActivated { item: DisplayItem, index: usize },
}

/// Hover and pause flags that decide whether motion is suspended
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    container_hovered: bool,
    hovered_item: Option<usize>,
    paused: bool,
}

/// Edge produced by a change of the external pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseEdge {
    Paused,
    Resumed,
}

impl InteractionState {
    pub fn new(paused: bool) -> Self {
        Self {
            paused,
            ..Default::default()
        }
    }

    pub fn container_hovered(&self) -> bool {
        self.container_hovered
    }

    pub fn hovered_item(&self) -> Option<usize> {
        self.hovered_item
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Returns true when the pointer just entered the viewport
    pub fn set_container_hover(&mut self, hovered: bool) -> bool {
        let entered = hovered && !self.container_hovered;
        self.container_hovered = hovered;
        if !hovered {
            self.hovered_item = None;
        }
        entered
    }

    /// Returns the index the pointer just entered, if it changed
    pub fn set_item_hover(&mut self, index: Option<usize>) -> Option<usize> {
        let previous = std::mem::replace(&mut self.hovered_item, index);
        match index {
            Some(i) if previous != Some(i) => Some(i),
            _ => None,
        }
    }

    /// Update the external flag; yields an edge only when the value changed
    pub fn set_paused(&mut self, paused: bool) -> Option<PauseEdge> {
        if paused == self.paused {
            return None;
        }
        self.paused = paused;
        Some(if paused {
            PauseEdge::Paused
        } else {
            PauseEdge::Resumed
        })
    }

    /// Whether motion is suspended right now
    pub fn effective_pause(&self, options: &MarqueeOptions) -> bool {
        self.paused
            || (options.pause_on_hover && self.container_hovered)
            || (options.pause_on_item_hover && self.hovered_item.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_edges_fire_once() {
        let mut state = InteractionState::new(false);
        assert_eq!(state.set_paused(false), None);
        assert_eq!(state.set_paused(true), Some(PauseEdge::Paused));
        assert_eq!(state.set_paused(true), None);
        assert_eq!(state.set_paused(false), Some(PauseEdge::Resumed));
        assert_eq!(state.set_paused(false), None);
    }

    #[test]
    fn test_container_hover_fires_on_entry_only() {
        let mut state = InteractionState::default();
        assert!(state.set_container_hover(true));
        assert!(!state.set_container_hover(true));
        assert!(!state.set_container_hover(false));
        assert!(state.set_container_hover(true));
    }

    #[test]
    fn test_item_hover_fires_on_new_index() {
        let mut state = InteractionState::default();
        assert_eq!(state.set_item_hover(Some(2)), Some(2));
        assert_eq!(state.set_item_hover(Some(2)), None);
        assert_eq!(state.set_item_hover(Some(3)), Some(3));
        assert_eq!(state.set_item_hover(None), None);
        assert_eq!(state.set_item_hover(Some(3)), Some(3));
    }

    #[test]
    fn test_effective_pause_formula() {
        let mut options = MarqueeOptions::default();
        let mut state = InteractionState::default();
        state.set_container_hover(true);
        state.set_item_hover(Some(0));
        assert!(!state.effective_pause(&options));

        options.pause_on_hover = true;
        assert!(state.effective_pause(&options));

        options.pause_on_hover = false;
        options.pause_on_item_hover = true;
        assert!(state.effective_pause(&options));

        state.set_item_hover(None);
        assert!(!state.effective_pause(&options));

        state.set_paused(true);
        assert!(state.effective_pause(&options));
    }

    #[test]
    fn test_leaving_container_clears_item_hover() {
        let mut state = InteractionState::default();
        state.set_container_hover(true);
        state.set_item_hover(Some(1));
        state.set_container_hover(false);
        assert_eq!(state.hovered_item(), None);
    }
}
