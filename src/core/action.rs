//! Robot actions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::GridCoord;

/// Orthogonal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in the fixed neighbor priority order.
    ///
    /// Search tie-breaking depends on this order, do not reorder.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Coordinate delta for one step in this direction
    #[inline]
    pub fn delta(self) -> GridCoord {
        match self {
            Direction::Up => GridCoord::new(0, -1),
            Direction::Right => GridCoord::new(1, 0),
            Direction::Down => GridCoord::new(0, 1),
            Direction::Left => GridCoord::new(-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// A single robot action, chosen once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Step one cell in a direction
    Move(Direction),
    /// Clean the cell under the robot
    Clean,
}

impl Action {
    /// Is this a movement action?
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(d) => write!(f, "move {}", d),
            Action::Clean => f.write_str("clean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Move(Direction::Left).to_string(), "move left");
        assert_eq!(Action::Clean.to_string(), "clean");
        assert!(Action::Move(Direction::Up).is_move());
        assert!(!Action::Clean.is_move());
    }
}
