//! Layout measurement handed to the engine by the rendering layer.
//!
//! Sizes are along the scroll axis: widths for Left/Right, heights for
//! Up/Down. Units are whatever the host lays out in (terminal cells in the
//! TUI).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::item::{Entry, ItemId};
use super::sequence::Sequence;

/// Default quiet period before a viewport size change is applied
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

/// Rendered sizes of the viewport and of each item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    viewport: f32,
    sizes: HashMap<ItemId, f32>,
}

impl Measurements {
    pub fn new(viewport: f32) -> Self {
        Self {
            viewport,
            sizes: HashMap::new(),
        }
    }

    pub fn with_size(mut self, id: impl Into<ItemId>, size: f32) -> Self {
        self.set_size(id.into(), size);
        self
    }

    pub fn set_viewport(&mut self, viewport: f32) {
        self.viewport = viewport;
    }

    pub fn set_size(&mut self, id: ItemId, size: f32) {
        self.sizes.insert(id, size);
    }

    /// Viewport extent along the scroll axis
    #[inline]
    pub fn viewport_size(&self) -> f32 {
        self.viewport
    }

    /// Measured size of an item, zero when not yet laid out
    pub fn size_of(&self, id: &ItemId) -> f32 {
        self.sizes.get(id).copied().unwrap_or(0.0)
    }

    /// Size of an entry; the filler reports its own dimension
    pub fn entry_size(&self, entry: &Entry) -> f32 {
        match entry {
            Entry::Item(item) => self.size_of(&item.id),
            Entry::Filler(filler) => filler.size,
        }
    }

    /// Size of the first non-filler item
    pub fn leading_item_size(&self, sequence: &Sequence) -> f32 {
        sequence
            .first_item()
            .map(|item| self.size_of(&item.id))
            .unwrap_or(0.0)
    }

    /// Size of the last non-filler item
    pub fn trailing_item_size(&self, sequence: &Sequence) -> f32 {
        sequence
            .last_item()
            .map(|item| self.size_of(&item.id))
            .unwrap_or(0.0)
    }

    /// Combined size of every real item
    pub fn total_item_size(&self, sequence: &Sequence) -> f32 {
        sequence.items().map(|item| self.size_of(&item.id)).sum()
    }

    /// Filler extent that keeps the belt at least one item longer than the viewport
    ///
    /// The largest item stands in for "the next item to recycle" so the
    /// filler does not need resizing as the belt turns.
    pub fn required_filler_size(&self, sequence: &Sequence) -> f32 {
        let next_incoming = sequence
            .items()
            .map(|item| self.size_of(&item.id))
            .fold(0.0_f32, f32::max);
        (self.viewport + next_incoming - self.total_item_size(sequence)).max(0.0)
    }

    /// Whether the viewport and every real item have a usable size
    pub fn is_ready(&self, sequence: &Sequence) -> bool {
        self.viewport > 0.0 && sequence.items().all(|item| self.size_of(&item.id) > 0.0)
    }
}

/// Debounces "viewport size changed" notifications at the host boundary
///
/// Sizes are pushed as they arrive; [`ResizeDebouncer::poll`] releases the
/// latest one once no new size has been pushed for the quiet period.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(f32, Instant)>,
    applied: Option<f32>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_RESIZE_DEBOUNCE_MS))
    }
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            applied: None,
        }
    }

    /// Record a new size observed at `now`
    pub fn push(&mut self, size: f32, now: Instant) {
        match self.pending {
            // Same size again: keep waiting from the first sighting
            Some((pending, _)) if pending == size => {}
            None if self.applied == Some(size) => {}
            _ => self.pending = Some((size, now)),
        }
    }

    /// Return the settled size, once, after the quiet period
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        let (size, at) = self.pending?;
        if now.duration_since(at) < self.quiet {
            return None;
        }
        self.pending = None;
        if self.applied == Some(size) {
            return None;
        }
        self.applied = Some(size);
        Some(size)
    }

    /// Apply `size` immediately, dropping anything pending
    ///
    /// For sizes that are not resizes: the first layout, or a switch of the
    /// scroll axis.
    pub fn settle(&mut self, size: f32) {
        self.pending = None;
        self.applied = Some(size);
    }

    /// Last size released by [`ResizeDebouncer::poll`]
    pub fn applied(&self) -> Option<f32> {
        self.applied
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
