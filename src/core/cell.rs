//! Cell states for the cleaning grid.
//!
//! A cell is either floor the robot can stand on (`Clean` or `Dirty`) or an
//! `Obstacle`. Obstacles are fixed when the world is generated; the only
//! transition during a run is `Dirty` -> `Clean` through the clean action.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellState {
    /// Traversable floor with nothing to clean
    #[default]
    Clean = 0,

    /// Traversable floor that still needs cleaning
    Dirty = 1,

    /// Impassable cell (wall, furniture)
    Obstacle = 2,
}

impl CellState {
    /// Can the robot stand on this cell?
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellState::Obstacle)
    }

    /// Does this cell need cleaning?
    #[inline]
    pub fn is_dirty(self) -> bool {
        matches!(self, CellState::Dirty)
    }

    /// Is this cell an obstacle?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellState::Obstacle)
    }

    /// Single character representation (used by the ASCII grid format)
    pub fn as_char(self) -> char {
        match self {
            CellState::Clean => '.',
            CellState::Dirty => '*',
            CellState::Obstacle => '#',
        }
    }

    /// Parse a cell character. Robot markers are handled by the grid parser.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Clean),
            '*' => Some(CellState::Dirty),
            '#' => Some(CellState::Obstacle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkable() {
        assert!(CellState::Clean.is_walkable());
        assert!(CellState::Dirty.is_walkable());
        assert!(!CellState::Obstacle.is_walkable());
    }

    #[test]
    fn test_char_roundtrip() {
        for state in [CellState::Clean, CellState::Dirty, CellState::Obstacle] {
            assert_eq!(CellState::from_char(state.as_char()), Some(state));
        }
        assert_eq!(CellState::from_char('R'), None);
    }
}
