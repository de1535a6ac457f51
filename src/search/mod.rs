//! Graph search over the grid world.
//!
//! Cells are nodes; [`GridWorld::neighbors`] pairs are unit-cost edges.
//! All three algorithms run the same traversal loop and differ only in
//! frontier discipline:
//!
//! - [`bfs`]: FIFO, shortest path in edges, cells marked when enqueued
//! - [`dfs`]: explicit stack, first path found, cells marked when popped
//! - [`astar`]: `f = g + h` with Manhattan `h`, FIFO among equal `f`
//!
//! Searches never mutate the world. An unreachable goal is not an error:
//! the result simply has an empty path, with statistics still filled in.
//!
//! ```rust
//! use marjana::grid::GridWorld;
//! use marjana::search::{Goal, bfs};
//!
//! let world = GridWorld::from_ascii(
//!     "R.*
//!      .#.
//!      *..",
//! )
//! .unwrap();
//! let result = bfs(&world, world.robot(), &Goal::Dirty);
//! assert_eq!(result.steps(), 2);
//! ```

mod frontier;
mod nearest;
mod result;
mod traversal;

use crate::core::GridCoord;
use crate::grid::GridWorld;

use frontier::{FifoFrontier, LifoFrontier, PriorityFrontier};
use traversal::traverse;

pub use nearest::{distance_field, nearest_dirty_astar, nearest_dirty_bfs};
pub use result::{Goal, SearchAlgorithm, SearchResult};

/// Breadth-first search.
pub fn bfs(world: &GridWorld, start: GridCoord, goal: &Goal) -> SearchResult {
    traverse(
        world,
        start,
        goal,
        FifoFrontier::default(),
        SearchAlgorithm::Bfs,
        |_| 0,
    )
}

/// Depth-first search with an explicit stack.
pub fn dfs(world: &GridWorld, start: GridCoord, goal: &Goal) -> SearchResult {
    traverse(
        world,
        start,
        goal,
        LifoFrontier::default(),
        SearchAlgorithm::Dfs,
        |_| 0,
    )
}

/// A* search with Manhattan distance heuristic.
///
/// For [`Goal::Dirty`] the heuristic is the distance to the closest dirty
/// cell, which stays admissible and consistent.
pub fn astar(world: &GridWorld, start: GridCoord, goal: &Goal) -> SearchResult {
    match goal {
        Goal::Position(target) => {
            let target = *target;
            traverse(
                world,
                start,
                goal,
                PriorityFrontier::default(),
                SearchAlgorithm::AStar,
                move |c| c.manhattan_distance(&target),
            )
        }
        Goal::Dirty => {
            let dirty = world.dirty_tiles();
            traverse(
                world,
                start,
                goal,
                PriorityFrontier::default(),
                SearchAlgorithm::AStar,
                |c| {
                    dirty
                        .iter()
                        .map(|d| c.manhattan_distance(d))
                        .min()
                        .unwrap_or(0)
                },
            )
        }
    }
}

/// Run the given algorithm.
pub fn search(
    algorithm: SearchAlgorithm,
    world: &GridWorld,
    start: GridCoord,
    goal: &Goal,
) -> SearchResult {
    match algorithm {
        SearchAlgorithm::Bfs => bfs(world, start, goal),
        SearchAlgorithm::Dfs => dfs(world, start, goal),
        SearchAlgorithm::AStar => astar(world, start, goal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGORITHMS: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::AStar,
    ];

    fn scenario() -> GridWorld {
        GridWorld::from_ascii(
            "R.*
             .#.
             *..",
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_nearest_dirty_scenario() {
        let world = scenario();
        let result = bfs(&world, world.robot(), &Goal::Dirty);

        assert_eq!(
            result.path,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(1, 0),
                GridCoord::new(2, 0)
            ]
        );
        assert!(result.nodes_expanded <= 6);
        assert_eq!(
            result.explored,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(1, 0),
                GridCoord::new(0, 1),
                GridCoord::new(2, 0)
            ]
        );
        // (0,2) was enqueued from (0,1) and never expanded
        assert_eq!(result.frontier, vec![GridCoord::new(0, 2)]);
    }

    #[test]
    fn test_start_is_goal() {
        let world = scenario();
        for algorithm in ALGORITHMS {
            let result = search(
                algorithm,
                &world,
                world.robot(),
                &Goal::Position(world.robot()),
            );
            assert_eq!(result.path, vec![world.robot()]);
            assert_eq!(result.steps(), 0);
            assert_eq!(result.nodes_expanded, 1);
        }
    }

    #[test]
    fn test_sealed_goal_returns_empty_path() {
        let world = GridWorld::from_ascii(
            "R..#.
             ...#*
             ...##",
        )
        .unwrap();
        for algorithm in ALGORITHMS {
            let result = search(
                algorithm,
                &world,
                world.robot(),
                &Goal::Position(GridCoord::new(4, 1)),
            );
            assert!(!result.found(), "{} found a sealed goal", algorithm);
            assert_eq!(result.nodes_expanded, 9);
            assert!(result.frontier.is_empty());
            assert!(result.nodes_expanded <= world.cell_count());
        }
    }

    #[test]
    fn test_dfs_follows_neighbor_priority() {
        // Open 3x3: DFS goes Right first (Up is out of bounds), then keeps
        // preferring Up/Right before Down.
        let world = GridWorld::from_ascii(
            "R..
             ...
             ...",
        )
        .unwrap();
        let result = dfs(&world, world.robot(), &Goal::Position(GridCoord::new(0, 2)));

        assert_eq!(
            &result.explored[..4],
            &[
                GridCoord::new(0, 0),
                GridCoord::new(1, 0),
                GridCoord::new(2, 0),
                GridCoord::new(2, 1)
            ]
        );
        assert!(result.found());
        assert_eq!(result.path.first(), Some(&world.robot()));
        assert_eq!(result.goal(), Some(GridCoord::new(0, 2)));
    }

    #[test]
    fn test_dfs_path_may_be_longer_than_bfs() {
        let world = GridWorld::from_ascii(
            "R..
             ...
             ...",
        )
        .unwrap();
        let goal = Goal::Position(GridCoord::new(0, 2));
        let shortest = bfs(&world, world.robot(), &goal);
        let deep = dfs(&world, world.robot(), &goal);

        assert_eq!(shortest.steps(), 2);
        assert!(deep.steps() >= shortest.steps());
    }

    #[test]
    fn test_astar_matches_bfs_length() {
        let world = GridWorld::from_ascii(
            "R....
             .###.
             ...#.
             .#...",
        )
        .unwrap();
        let goal = Goal::Position(GridCoord::new(2, 2));
        let a = astar(&world, world.robot(), &goal);
        let b = bfs(&world, world.robot(), &goal);

        assert!(a.found());
        assert_eq!(a.steps(), b.steps());
        assert_eq!(a.steps(), 4);
    }

    #[test]
    fn test_astar_expands_fewer_than_bfs_in_open_space() {
        let world = GridWorld::from_ascii(
            "R.......
             ........
             ........
             ........",
        )
        .unwrap();
        let goal = Goal::Position(GridCoord::new(7, 0));
        let a = astar(&world, world.robot(), &goal);
        let b = bfs(&world, world.robot(), &goal);

        assert_eq!(a.steps(), 7);
        assert!(a.nodes_expanded < b.nodes_expanded);
    }

    #[test]
    fn test_astar_dirty_goal() {
        let world = scenario();
        let result = astar(&world, world.robot(), &Goal::Dirty);
        assert_eq!(result.steps(), 2);
        assert!(world.is_dirty(result.goal().unwrap()));
    }

    #[test]
    fn test_search_does_not_mutate_world() {
        let world = scenario();
        let before = world.clone();
        for algorithm in ALGORITHMS {
            search(algorithm, &world, world.robot(), &Goal::Dirty);
        }
        assert_eq!(world, before);
    }

    #[test]
    fn test_paths_are_connected() {
        let world = GridWorld::from_ascii(
            "R.#..
             ..#.#
             .....
             #.#.*",
        )
        .unwrap();
        for algorithm in ALGORITHMS {
            let result = search(algorithm, &world, world.robot(), &Goal::Dirty);
            assert!(result.found());
            for pair in result.path.windows(2) {
                assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
                assert!(world.is_walkable(pair[1]));
            }
        }
    }
}
