//! Nearest-dirty-cell queries and distance fields.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::core::GridCoord;
use crate::grid::GridWorld;

use super::result::{Goal, SearchAlgorithm, SearchResult};
use super::{astar, bfs};

/// Closest dirty cell by edge count (BFS with a dirty goal test).
///
/// Ties at equal distance go to the cell BFS discovers first, which follows
/// the fixed neighbor order.
pub fn nearest_dirty_bfs(world: &GridWorld, from: GridCoord) -> SearchResult {
    bfs(world, from, &Goal::Dirty)
}

/// Closest dirty cell by A* path cost.
///
/// Dirty cells are tried in ascending Manhattan distance with one
/// fixed-goal A* each. Because the path cost can never be below the
/// Manhattan distance, the scan stops as soon as the next candidate's
/// Manhattan distance exceeds the best cost found. Equal costs resolve to
/// the first cell in row-major order.
///
/// Returns the A* result for the chosen cell, or an empty result (with the
/// last attempt's statistics) when no dirty cell is reachable.
pub fn nearest_dirty_astar(world: &GridWorld, from: GridCoord) -> SearchResult {
    let mut candidates = world.dirty_tiles();
    // Stable sort keeps row-major order within equal Manhattan distance
    candidates.sort_by_key(|c| from.manhattan_distance(c));

    let mut best: Option<SearchResult> = None;
    let mut last_attempt = SearchResult::not_found(SearchAlgorithm::AStar);
    let mut searches = 0;

    for candidate in candidates {
        if let Some(best) = &best
            && from.manhattan_distance(&candidate) as usize > best.steps()
        {
            break;
        }

        searches += 1;
        let result = astar(world, from, &Goal::Position(candidate));
        if !result.found() {
            trace!("[AStar] dirty cell {} is unreachable", candidate);
            last_attempt = result;
            continue;
        }

        let better = match &best {
            None => true,
            Some(current) => {
                result.steps() < current.steps()
                    || (result.steps() == current.steps()
                        && candidate.row_major_key() < current_goal(current).row_major_key())
            }
        };
        if better {
            best = Some(result);
        }
    }

    match best {
        Some(result) => {
            trace!(
                "[AStar] nearest dirty {} at cost {} ({} searches)",
                current_goal(&result),
                result.steps(),
                searches
            );
            result
        }
        None => {
            debug!(
                "[AStar] no reachable dirty cell from {} ({} searches)",
                from, searches
            );
            last_attempt
        }
    }
}

fn current_goal(result: &SearchResult) -> GridCoord {
    // Only called on found results, whose path is non-empty
    result.goal().unwrap_or_default()
}

/// BFS edge distance from `source` to every reachable cell.
pub fn distance_field(world: &GridWorld, source: GridCoord) -> HashMap<GridCoord, u32> {
    let mut distances = HashMap::new();
    if !world.is_walkable(source) {
        return distances;
    }

    let mut queue = VecDeque::new();
    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let d = distances[&current];
        for neighbor in world.neighbors(current) {
            if let Entry::Vacant(e) = distances.entry(neighbor) {
                e.insert(d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_and_astar_agree_on_scenario() {
        let world = GridWorld::from_ascii(
            "R.*
             .#.
             *..",
        )
        .unwrap();
        let by_bfs = nearest_dirty_bfs(&world, world.robot());
        let by_astar = nearest_dirty_astar(&world, world.robot());

        assert_eq!(by_bfs.goal(), Some(GridCoord::new(2, 0)));
        // Both dirty cells cost 2; (2,0) is first in row-major order
        assert_eq!(by_astar.goal(), Some(GridCoord::new(2, 0)));
        assert_eq!(by_astar.steps(), 2);
    }

    #[test]
    fn test_astar_prefers_accessible_over_manhattan_close() {
        // (2,0) is Manhattan-closest but walled off behind a detour
        let world = GridWorld::from_ascii(
            "R#*..
             .#.#.
             ...#.
             *....",
        )
        .unwrap();
        let result = nearest_dirty_astar(&world, world.robot());
        assert_eq!(result.goal(), Some(GridCoord::new(0, 3)));
        assert_eq!(result.steps(), 3);
    }

    #[test]
    fn test_astar_row_major_tie_break() {
        // Both dirty cells are 2 steps away; (1,1) precedes (3,1) in row-major order
        let world = GridWorld::from_ascii(
            "#.R.#
             #*#*#",
        )
        .unwrap();
        let result = nearest_dirty_astar(&world, world.robot());
        assert_eq!(result.goal(), Some(GridCoord::new(1, 1)));
    }

    #[test]
    fn test_astar_no_reachable_dirt() {
        let world = GridWorld::from_ascii(
            "R.#*
             ..##",
        )
        .unwrap();
        let result = nearest_dirty_astar(&world, world.robot());
        assert!(!result.found());
        assert_eq!(result.algorithm, SearchAlgorithm::AStar);
        assert_eq!(result.nodes_expanded, 4);
    }

    #[test]
    fn test_astar_no_dirt_at_all() {
        let world = GridWorld::from_ascii("R..").unwrap();
        let result = nearest_dirty_astar(&world, world.robot());
        assert!(!result.found());
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_distance_field() {
        let world = GridWorld::from_ascii(
            "R.#
             ...
             #.#",
        )
        .unwrap();
        let field = distance_field(&world, world.robot());

        assert_eq!(field.len(), 6);
        assert_eq!(field[&GridCoord::new(0, 0)], 0);
        assert_eq!(field[&GridCoord::new(2, 1)], 3);
        assert_eq!(field[&GridCoord::new(1, 2)], 3);
        assert!(!field.contains_key(&GridCoord::new(2, 0)));
    }
}
