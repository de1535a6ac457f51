//! Search goals, algorithm tags and per-call results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Direction, GridCoord};
use crate::grid::GridWorld;

/// Which search algorithm produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Breadth-first search (FIFO frontier)
    Bfs,
    /// Depth-first search (LIFO frontier)
    Dfs,
    /// A* with Manhattan heuristic (priority frontier)
    AStar,
}

impl SearchAlgorithm {
    /// Short name for logging
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "BFS",
            SearchAlgorithm::Dfs => "DFS",
            SearchAlgorithm::AStar => "AStar",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Goal test for a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Reach one fixed cell
    Position(GridCoord),
    /// Reach any dirty cell
    Dirty,
}

impl Goal {
    /// Does `coord` satisfy this goal in `world`?
    #[inline]
    pub fn is_satisfied(&self, world: &GridWorld, coord: GridCoord) -> bool {
        match self {
            Goal::Position(target) => *target == coord,
            Goal::Dirty => world.is_dirty(coord),
        }
    }
}

/// Result of one search call.
///
/// Always carries the exploration statistics, even when no goal was
/// reached, so callers can visualise failed searches and detect
/// unreachable dirt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Algorithm that produced this result
    pub algorithm: SearchAlgorithm,
    /// Path from start to goal, both inclusive (empty if no goal was reached)
    pub path: Vec<GridCoord>,
    /// Expanded cells in expansion order
    pub explored: Vec<GridCoord>,
    /// Cells still queued when the search stopped
    pub frontier: Vec<GridCoord>,
    /// Number of node expansions
    pub nodes_expanded: usize,
    /// Largest frontier size seen during the search
    pub max_frontier: usize,
}

impl SearchResult {
    /// Create an empty, unsuccessful result
    pub fn not_found(algorithm: SearchAlgorithm) -> Self {
        Self {
            algorithm,
            path: Vec::new(),
            explored: Vec::new(),
            frontier: Vec::new(),
            nodes_expanded: 0,
            max_frontier: 0,
        }
    }

    /// Whether a goal was reached
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (0 when the start was the goal or no path)
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The reached goal cell
    #[inline]
    pub fn goal(&self) -> Option<GridCoord> {
        self.path.last().copied()
    }

    /// The first cell to move to, if the path has at least one move
    #[inline]
    pub fn first_step(&self) -> Option<GridCoord> {
        self.path.get(1).copied()
    }

    /// Direction of the first move along the path
    pub fn first_direction(&self) -> Option<Direction> {
        let start = self.path.first()?;
        let next = self.first_step()?;
        start.direction_to(&next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let result = SearchResult::not_found(SearchAlgorithm::Dfs);
        assert!(!result.found());
        assert_eq!(result.steps(), 0);
        assert_eq!(result.goal(), None);
        assert_eq!(result.first_step(), None);
        assert_eq!(result.first_direction(), None);
    }

    #[test]
    fn test_path_helpers() {
        let mut result = SearchResult::not_found(SearchAlgorithm::Bfs);
        result.path = vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 0),
            GridCoord::new(1, 1),
        ];
        assert!(result.found());
        assert_eq!(result.steps(), 2);
        assert_eq!(result.goal(), Some(GridCoord::new(1, 1)));
        assert_eq!(result.first_step(), Some(GridCoord::new(1, 0)));
        assert_eq!(result.first_direction(), Some(Direction::Right));
    }

    #[test]
    fn test_goal_at_start_has_no_step() {
        let mut result = SearchResult::not_found(SearchAlgorithm::AStar);
        result.path = vec![GridCoord::new(2, 2)];
        assert!(result.found());
        assert_eq!(result.steps(), 0);
        assert_eq!(result.first_step(), None);
    }

    #[test]
    fn test_goal_test() {
        let world = GridWorld::from_ascii("R*").unwrap();
        assert!(Goal::Dirty.is_satisfied(&world, GridCoord::new(1, 0)));
        assert!(!Goal::Dirty.is_satisfied(&world, GridCoord::new(0, 0)));
        assert!(Goal::Position(GridCoord::new(0, 0)).is_satisfied(&world, GridCoord::new(0, 0)));
    }
}
