//! Ordered conveyor belt of display items plus the single filler entry.

use super::direction::Direction;
use super::item::{reassign_filler_ids, DisplayItem, Entry, Filler};

/// Working order of the marquee
///
/// Holds the caller's items (possibly reversed) and exactly one [`Filler`].
/// The filler starts at the trailing end of the recycle order: behind the
/// items for Up/Left, in front of them for Down/Right. From then on it rides
/// the belt like any other entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    entries: Vec<Entry>,
}

impl Sequence {
    /// Build a fresh sequence from the caller's list
    ///
    /// Items carrying [`FILLER_ID`](super::item::FILLER_ID) are renumbered so
    /// the belt holds exactly one filler.
    pub fn initialize(items: &[DisplayItem], direction: Direction, reverse: bool) -> Self {
        let mut items = items.to_vec();
        reassign_filler_ids(&mut items);
        if reverse {
            items.reverse();
        }
        let mut entries: Vec<Entry> = items.into_iter().map(Entry::Item).collect();

        let filler = Entry::Filler(Filler { size: 0.0 });
        if direction.recycles_from_front() {
            entries.push(filler);
        } else {
            entries.insert(0, filler);
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for an initialized sequence; the filler is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Real items in belt order
    pub fn items(&self) -> impl Iterator<Item = &DisplayItem> + '_ {
        self.entries.iter().filter_map(Entry::as_item)
    }

    pub fn has_items(&self) -> bool {
        self.entries.iter().any(|e| !e.is_filler())
    }

    pub fn first_item(&self) -> Option<&DisplayItem> {
        self.entries.iter().find_map(Entry::as_item)
    }

    pub fn last_item(&self) -> Option<&DisplayItem> {
        self.entries.iter().rev().find_map(Entry::as_item)
    }

    pub fn filler(&self) -> Option<&Filler> {
        self.entries.iter().find_map(|e| match e {
            Entry::Filler(filler) => Some(filler),
            Entry::Item(_) => None,
        })
    }

    pub fn filler_index(&self) -> Option<usize> {
        self.entries.iter().position(Entry::is_filler)
    }

    /// Copy of this sequence with the filler resized
    pub fn with_filler_size(&self, size: f32) -> Self {
        let mut next = self.clone();
        for entry in &mut next.entries {
            if let Entry::Filler(filler) = entry {
                filler.size = size.max(0.0);
            }
        }
        next
    }

    /// Entry that leaves the viewport next for `direction`
    pub fn exiting(&self, direction: Direction) -> Option<&Entry> {
        if direction.recycles_from_front() {
            self.entries.first()
        } else {
            self.entries.last()
        }
    }

    /// Move the exiting entry to the opposite end of the belt
    pub fn recycle(&mut self, direction: Direction) {
        if self.entries.len() < 2 {
            return;
        }
        if direction.recycles_from_front() {
            self.entries.rotate_left(1);
        } else {
            self.entries.rotate_right(1);
        }
    }
}
