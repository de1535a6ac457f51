//! The cleaning world: a fixed rectangle of cells plus the robot position.
//!
//! Cells are stored row-major in a flat vector. The dirty count is kept
//! in step with the cells on every clean, so goal checks are O(1).

use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::core::{CellState, Direction, GridCoord};
use crate::error::{GridError, InvalidMove};

use super::config::GridConfig;

/// Grid world with robot.
///
/// Invariants:
/// - the robot always stands on a walkable cell
/// - `dirty_count` equals the number of `Dirty` cells
/// - obstacles never change after construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridWorld {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
    robot: GridCoord,
    dirty_count: usize,
    initial_dirt: usize,
}

impl GridWorld {
    /// Generate a randomized world.
    ///
    /// Every cell except the start independently becomes an obstacle with
    /// `obstacle_probability`; otherwise a second draw makes it dirty with
    /// `dirt_probability`. The start cell is always clean.
    pub fn generate<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Self, GridError> {
        config.validate()?;

        let mut cells = Vec::with_capacity(config.cell_count());
        let mut dirty_count = 0;
        for y in 0..config.height {
            for x in 0..config.width {
                let coord = GridCoord::new(x as i32, y as i32);
                if coord == config.start {
                    cells.push(CellState::Clean);
                    continue;
                }

                let state = if rng.random::<f64>() < config.obstacle_probability {
                    CellState::Obstacle
                } else if rng.random::<f64>() < config.dirt_probability {
                    dirty_count += 1;
                    CellState::Dirty
                } else {
                    CellState::Clean
                };
                cells.push(state);
            }
        }

        debug!(
            "[GridWorld] generated {}x{} world: {} dirty, {} obstacles",
            config.width,
            config.height,
            dirty_count,
            cells.iter().filter(|c| c.is_obstacle()).count()
        );

        Ok(Self {
            cells,
            width: config.width,
            height: config.height,
            robot: config.start,
            dirty_count,
            initial_dirt: dirty_count,
        })
    }

    /// Build a world from the ASCII layout format.
    ///
    /// `.` clean, `*` dirty, `#` obstacle, `R` robot on a clean cell,
    /// `r` robot on a dirty cell. Blank lines and surrounding whitespace
    /// are ignored, so indented raw strings work.
    ///
    /// ```
    /// use marjana::grid::GridWorld;
    ///
    /// let world = GridWorld::from_ascii(
    ///     "R.*
    ///      .#.
    ///      *..",
    /// )
    /// .unwrap();
    /// assert_eq!(world.dirty_count(), 2);
    /// ```
    pub fn from_ascii(layout: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyLayout);
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut robots = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                let state = match ch {
                    'R' => {
                        robots.push(GridCoord::new(column as i32, row as i32));
                        CellState::Clean
                    }
                    'r' => {
                        robots.push(GridCoord::new(column as i32, row as i32));
                        CellState::Dirty
                    }
                    other => CellState::from_char(other)
                        .ok_or(GridError::UnknownCell { ch, row, column })?,
                };
                cells.push(state);
            }
        }

        if robots.len() != 1 {
            return Err(GridError::RobotCount(robots.len()));
        }

        let dirty_count = cells.iter().filter(|c| c.is_dirty()).count();
        Ok(Self {
            cells,
            width,
            height: rows.len(),
            robot: robots[0],
            dirty_count,
            initial_dirt: dirty_count,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Current robot position
    #[inline]
    pub fn robot(&self) -> GridCoord {
        self.robot
    }

    /// Number of cells still dirty
    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty_count
    }

    /// Number of dirty cells when the world was created
    #[inline]
    pub fn initial_dirt(&self) -> usize {
        self.initial_dirt
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Cell state, `None` when out of bounds
    #[inline]
    pub fn state(&self, coord: GridCoord) -> Option<CellState> {
        self.coord_to_index(coord).map(|i| self.cells[i])
    }

    /// Is the cell in bounds and not an obstacle?
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.state(coord).is_some_and(CellState::is_walkable)
    }

    /// Is the cell in bounds and dirty?
    #[inline]
    pub fn is_dirty(&self, coord: GridCoord) -> bool {
        self.state(coord).is_some_and(CellState::is_dirty)
    }

    /// Is the robot standing on a dirty cell?
    #[inline]
    pub fn is_current_dirty(&self) -> bool {
        self.is_dirty(self.robot)
    }

    /// True once no dirty cell remains
    #[inline]
    pub fn is_goal_state(&self) -> bool {
        self.dirty_count == 0
    }

    /// Walkable orthogonal neighbors in the fixed order Up, Right, Down, Left.
    pub fn neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        coord
            .neighbors_4()
            .into_iter()
            .filter(|n| self.is_walkable(*n))
            .collect()
    }

    /// Directions the robot can currently move in, in neighbor order.
    pub fn available_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_walkable(self.robot.offset(*d)))
            .collect()
    }

    /// All dirty cells in row-major order
    pub fn dirty_tiles(&self) -> Vec<GridCoord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_dirty())
            .map(|(i, _)| self.index_to_coord(i))
            .collect()
    }

    /// Move the robot one cell.
    ///
    /// On failure nothing is mutated.
    pub fn try_move(&mut self, direction: Direction) -> Result<GridCoord, InvalidMove> {
        let target = self.robot.offset(direction);
        match self.state(target) {
            None => Err(InvalidMove::OutOfBounds(target)),
            Some(CellState::Obstacle) => Err(InvalidMove::Obstacle(target)),
            Some(_) => {
                trace!("[GridWorld] robot {} -> {}", self.robot, target);
                self.robot = target;
                Ok(target)
            }
        }
    }

    /// Move the robot one cell, returning whether the move happened.
    pub fn move_robot(&mut self, direction: Direction) -> bool {
        self.try_move(direction).is_ok()
    }

    /// Clean the cell under the robot.
    ///
    /// Returns true if the cell was dirty. Cleaning a clean cell is a no-op.
    pub fn clean_current(&mut self) -> bool {
        let Some(index) = self.coord_to_index(self.robot) else {
            return false;
        };
        if self.cells[index].is_dirty() {
            self.cells[index] = CellState::Clean;
            self.dirty_count -= 1;
            trace!(
                "[GridWorld] cleaned {}, {} dirty left",
                self.robot, self.dirty_count
            );
            true
        } else {
            false
        }
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let coord = GridCoord::new(x as i32, y as i32);
                let state = self.cells[y * self.width + x];
                let ch = if coord == self.robot {
                    if state.is_dirty() { 'r' } else { 'R' }
                } else {
                    state.as_char()
                };
                write!(f, "{}", ch)?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
