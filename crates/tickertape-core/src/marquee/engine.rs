//! Motion engine: one pure transition per tick.
//!
//! Every direction moves its live offset from zero toward negative values.
//! Once the exiting entry has fully left the viewport (the offset magnitude
//! reaches its size) the entry rotates to the opposite end of the belt and
//! its size is added back, so nothing on screen jumps.

use super::direction::Direction;
use super::item::{DisplayItem, Entry, ItemId};
use super::measure::Measurements;
use super::scroll::ScrollState;
use super::sequence::Sequence;

/// Default offset units advanced per tick
pub const DEFAULT_STEP: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No usable measurement yet; ticks are ignored
    #[default]
    Uninitialized,
    /// Measured and scrolling
    Ready,
}

/// Immutable snapshot of everything a tick changes
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    pub sequence: Sequence,
    pub scroll: ScrollState,
    pub phase: Phase,
}

impl MarqueeState {
    /// Fresh state for a new item list, offset at zero
    pub fn initial(items: &[DisplayItem], direction: Direction, reverse: bool) -> Self {
        Self {
            sequence: Sequence::initialize(items, direction, reverse),
            scroll: ScrollState::default(),
            phase: Phase::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }
}

/// Result of a tick that moved something
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: MarqueeState,
    /// Entries moved to the opposite end during this tick, in order
    pub recycled: Vec<ItemId>,
}

/// Compute the next snapshot, or `None` when the tick is a no-op
pub fn advance(
    state: &MarqueeState,
    direction: Direction,
    step: f32,
    measurements: &Measurements,
) -> Option<Transition> {
    if state.phase != Phase::Ready || step <= 0.0 {
        return None;
    }
    if !state.sequence.has_items() || !measurements.is_ready(&state.sequence) {
        return None;
    }

    let mut sequence = state.sequence.clone();
    let mut offset = state.scroll.live(direction) - step;

    // A whole lap leaves the belt in the same order, so drop complete laps
    let lap: f32 = sequence
        .entries()
        .iter()
        .map(|entry| measurements.entry_size(entry))
        .sum();
    if lap > 0.0 {
        offset %= lap;
    }

    // A step can carry more than one entry past the edge
    let mut recycled = Vec::new();
    for _ in 0..sequence.len() {
        let Some(exiting) = sequence.exiting(direction) else {
            break;
        };
        // A collapsed filler has no extent to scroll past
        if matches!(exiting, Entry::Filler(f) if f.size <= 0.0) {
            sequence.recycle(direction);
            continue;
        }
        let size = measurements.entry_size(exiting);
        if size <= 0.0 || offset.abs() < size {
            break;
        }
        recycled.push(exiting.id());
        sequence.recycle(direction);
        offset += size;
    }

    Some(Transition {
        state: MarqueeState {
            sequence,
            scroll: ScrollState::with_live(direction, offset),
            phase: Phase::Ready,
        },
        recycled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(ids: &[u64], size: f32, viewport: f32) -> (Vec<DisplayItem>, Measurements) {
        let items: Vec<DisplayItem> = ids
            .iter()
            .map(|id| DisplayItem::text(*id, format!("#{}", id)))
            .collect();
        let mut m = Measurements::new(viewport);
        for id in ids {
            m.set_size(ItemId::Num(*id), size);
        }
        (items, m)
    }

    fn ready(items: &[DisplayItem], direction: Direction, m: &Measurements) -> MarqueeState {
        let mut state = MarqueeState::initial(items, direction, false);
        let filler = m.required_filler_size(&state.sequence);
        state.sequence = state.sequence.with_filler_size(filler);
        state.phase = Phase::Ready;
        state
    }

    fn item_order(state: &MarqueeState) -> Vec<ItemId> {
        state.sequence.items().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_uninitialized_tick_is_noop() {
        let (items, m) = uniform(&[1, 2], 10.0, 20.0);
        let state = MarqueeState::initial(&items, Direction::Up, false);
        assert!(advance(&state, Direction::Up, 1.0, &m).is_none());
    }

    #[test]
    fn test_step_moves_only_live_offset() {
        let (items, m) = uniform(&[1, 2, 3], 10.0, 20.0);
        for direction in Direction::ALL {
            let state = ready(&items, direction, &m);
            let next = advance(&state, direction, 1.0, &m).unwrap().state;
            assert_eq!(next.scroll.live(direction), -1.0);
            assert!(next.scroll.is_consistent(direction));
        }
    }

    #[test]
    fn test_up_recycles_first_item_after_full_size() {
        let s = 10.0;
        let (items, m) = uniform(&[1, 2, 3], s, 2.0 * s);
        let mut state = ready(&items, Direction::Up, &m);
        assert_eq!(state.sequence.filler().map(|f| f.size), Some(0.0));

        for _ in 0..9 {
            state = advance(&state, Direction::Up, 1.0, &m).unwrap().state;
        }
        assert_eq!(item_order(&state), vec![ItemId::Num(1), ItemId::Num(2), ItemId::Num(3)]);
        assert_eq!(state.scroll.top, -9.0);

        let transition = advance(&state, Direction::Up, 1.0, &m).unwrap();
        assert_eq!(transition.recycled, vec![ItemId::Num(1)]);
        let state = transition.state;
        assert_eq!(item_order(&state), vec![ItemId::Num(2), ItemId::Num(3), ItemId::Num(1)]);
        assert_eq!(state.sequence.entries().last().map(Entry::id), Some(ItemId::Num(1)));
        assert!(state.scroll.top > -s && state.scroll.top <= 0.0);
    }

    #[test]
    fn test_down_recycles_last_item_to_front() {
        let (items, m) = uniform(&[1, 2, 3], 4.0, 8.0);
        let mut state = ready(&items, Direction::Down, &m);
        for _ in 0..4 {
            state = advance(&state, Direction::Down, 1.0, &m).unwrap().state;
        }
        assert_eq!(item_order(&state), vec![ItemId::Num(3), ItemId::Num(1), ItemId::Num(2)]);
        assert_eq!(state.scroll.bottom, 0.0);
        assert!(state.scroll.is_consistent(Direction::Down));
    }

    #[test]
    fn test_filler_scrolls_through_like_an_entry() {
        // Left, two items of 50 in a viewport of 100: filler is 50 wide
        let (items, m) = uniform(&[1, 2], 50.0, 100.0);
        let mut state = ready(&items, Direction::Left, &m);
        assert_eq!(state.sequence.filler().map(|f| f.size), Some(50.0));

        let mut recycled = Vec::new();
        for _ in 0..150 {
            let t = advance(&state, Direction::Left, 1.0, &m).unwrap();
            recycled.extend(t.recycled.clone());
            state = t.state;
        }
        assert_eq!(recycled, vec![ItemId::Num(1), ItemId::Num(2), ItemId::filler()]);
        assert_eq!(item_order(&state), vec![ItemId::Num(1), ItemId::Num(2)]);
        assert_eq!(state.scroll.left, 0.0);
    }

    #[test]
    fn test_zero_size_item_never_recycles() {
        let (items, mut m) = uniform(&[1, 2], 10.0, 20.0);
        let state = ready(&items, Direction::Up, &m);
        m.set_size(ItemId::Num(1), 0.0);
        assert!(advance(&state, Direction::Up, 1.0, &m).is_none());
    }

    #[test]
    fn test_empty_list_stays_still() {
        let m = Measurements::new(40.0);
        let state = ready(&[], Direction::Right, &m);
        assert!(advance(&state, Direction::Right, 1.0, &m).is_none());
    }

    #[test]
    fn test_half_step_matches_full_step_over_time() {
        let (items, m) = uniform(&[1, 2, 3], 6.0, 12.0);
        let mut coarse = ready(&items, Direction::Left, &m);
        let mut fine = coarse.clone();
        for _ in 0..13 {
            coarse = advance(&coarse, Direction::Left, 1.0, &m).unwrap().state;
        }
        for _ in 0..26 {
            fine = advance(&fine, Direction::Left, 0.5, &m).unwrap().state;
        }
        assert_eq!(coarse, fine);
    }

    #[test]
    fn test_step_larger_than_items_keeps_offset_in_range() {
        // Three one-cell rows in a three-row viewport, moving 1.5 per tick
        let (items, m) = uniform(&[1, 2, 3], 1.0, 3.0);
        let mut state = ready(&items, Direction::Up, &m);
        assert_eq!(state.sequence.filler().map(|f| f.size), Some(1.0));

        let mut recycled = 0;
        for _ in 0..100 {
            let t = advance(&state, Direction::Up, 1.5, &m).unwrap();
            recycled += t.recycled.len();
            state = t.state;
            let exiting = state.sequence.exiting(Direction::Up).map(|e| m.entry_size(e));
            assert!(state.scroll.top <= 0.0);
            assert!(state.scroll.top > -exiting.unwrap_or(0.0), "offset {}", state.scroll.top);
        }
        // 150 cells over a four-cell lap
        assert!(recycled >= 140);
        assert_eq!(state.sequence.len(), 4);
    }

    #[test]
    fn test_step_beyond_a_full_lap() {
        let (items, m) = uniform(&[1, 2], 5.0, 10.0);
        let state = ready(&items, Direction::Left, &m);
        // Lap is 5 + 5 + 5; 17 cells is one lap plus two
        let next = advance(&state, Direction::Left, 17.0, &m).unwrap().state;
        assert_eq!(next.scroll.left, -2.0);
        assert_eq!(item_order(&next), vec![ItemId::Num(1), ItemId::Num(2)]);
        assert_eq!(next.sequence.filler_index(), Some(2));
    }
}
