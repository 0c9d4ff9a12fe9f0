use super::direction::{Direction, Edge};

/// Position of the scrolled content relative to the viewport
///
/// Only the field matching the active direction is ever written; the others
/// stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl ScrollState {
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Live offset for `direction`
    #[inline]
    pub fn live(&self, direction: Direction) -> f32 {
        self.edge(direction.edge())
    }

    /// Copy with only the live field for `direction` set to `offset`
    pub fn with_live(direction: Direction, offset: f32) -> Self {
        let mut state = Self::default();
        match direction.edge() {
            Edge::Top => state.top = offset,
            Edge::Right => state.right = offset,
            Edge::Bottom => state.bottom = offset,
            Edge::Left => state.left = offset,
        }
        state
    }

    /// True when every field other than the live one is zero
    pub fn is_consistent(&self, direction: Direction) -> bool {
        let live = direction.edge();
        [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left]
            .into_iter()
            .filter(|edge| *edge != live)
            .all(|edge| self.edge(edge) == 0.0)
    }
}
