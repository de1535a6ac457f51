//! Grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::action::Direction;

/// Grid coordinates (integer cell indices)
///
/// `(0, 0)` is the top-left cell and rows grow downward, so moving `Up`
/// decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The adjacent coordinate in the given direction (may be out of bounds)
    #[inline]
    pub fn offset(&self, direction: Direction) -> GridCoord {
        *self + direction.delta()
    }

    /// Get the 4 cardinal neighbors in the fixed order Up, Right, Down, Left
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        Direction::ALL.map(|d| self.offset(d))
    }

    /// Direction of a single orthogonal step from `self` to `other`.
    ///
    /// Returns `None` unless the two coordinates are 4-adjacent.
    pub fn direction_to(&self, other: &GridCoord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| self.offset(*d) == *other)
    }

    /// Key for row-major scan ordering
    #[inline]
    pub fn row_major_key(&self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}
