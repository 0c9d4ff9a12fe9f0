use serde::{Deserialize, Serialize};

/// Scroll direction of the marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

/// Axis along which a direction scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One of the four positioning edges of the scrolled content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Vertical,
            Direction::Left | Direction::Right => Orientation::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.orientation() == Orientation::Horizontal
    }

    /// Edge the content is anchored to; its offset is the live scroll value
    pub fn edge(self) -> Edge {
        match self {
            Direction::Up => Edge::Top,
            Direction::Right => Edge::Right,
            Direction::Down => Edge::Bottom,
            Direction::Left => Edge::Left,
        }
    }

    /// Up and Left move entries out through the front of the sequence,
    /// Down and Right through the back.
    #[inline]
    pub fn recycles_from_front(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            other => Err(crate::Error::Config(format!(
                "unknown direction '{}', expected up, down, left or right",
                other
            ))),
        }
    }
}

/// Color of the edge fade overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeMaskColor {
    None,
    #[default]
    White,
    Black,
}

impl FadeMaskColor {
    pub fn name(self) -> &'static str {
        match self {
            FadeMaskColor::None => "none",
            FadeMaskColor::White => "white",
            FadeMaskColor::Black => "black",
        }
    }

    /// Next color in the None -> White -> Black cycle
    pub fn cycle(self) -> Self {
        match self {
            FadeMaskColor::None => FadeMaskColor::White,
            FadeMaskColor::White => FadeMaskColor::Black,
            FadeMaskColor::Black => FadeMaskColor::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_follow_direction() {
        assert_eq!(Direction::Up.edge(), Edge::Top);
        assert_eq!(Direction::Right.edge(), Edge::Right);
        assert_eq!(Direction::Down.edge(), Edge::Bottom);
        assert_eq!(Direction::Left.edge(), Edge::Left);
    }

    #[test]
    fn test_recycle_end() {
        assert!(Direction::Up.recycles_from_front());
        assert!(Direction::Left.recycles_from_front());
        assert!(!Direction::Down.recycles_from_front());
        assert!(!Direction::Right.recycles_from_front());
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" down ".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_fade_cycle() {
        let mut color = FadeMaskColor::None;
        color = color.cycle();
        assert_eq!(color, FadeMaskColor::White);
        color = color.cycle();
        assert_eq!(color, FadeMaskColor::Black);
        assert_eq!(color.cycle(), FadeMaskColor::None);
    }
}
