//! Shared frontier / visited-set / parent-map traversal.
//!
//! BFS, DFS and A* are all this loop with a different [`Frontier`]. Keeping
//! a single loop guarantees identical goal testing, statistics and path
//! reconstruction across the three algorithms.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::core::GridCoord;
use crate::grid::GridWorld;

use super::frontier::{Discipline, Frontier, FrontierEntry};
use super::result::{Goal, SearchAlgorithm, SearchResult};

/// Run a search from `start` until `goal` is satisfied or the frontier empties.
///
/// `heuristic` is only consulted by priority frontiers.
pub(crate) fn traverse<F, H>(
    world: &GridWorld,
    start: GridCoord,
    goal: &Goal,
    mut frontier: F,
    algorithm: SearchAlgorithm,
    heuristic: H,
) -> SearchResult
where
    F: Frontier,
    H: Fn(GridCoord) -> u32,
{
    trace!("[{}] search from {} for {:?}", algorithm, start, goal);

    if !world.is_walkable(start) {
        debug!("[{}] FAILED: start {} is not walkable", algorithm, start);
        return SearchResult::not_found(algorithm);
    }

    let discipline = F::DISCIPLINE;
    let mut parents: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut g_scores: HashMap<GridCoord, u32> = HashMap::new();
    let mut discovered: HashSet<GridCoord> = HashSet::new();
    let mut closed: HashSet<GridCoord> = HashSet::new();
    let mut explored = Vec::new();

    g_scores.insert(start, 0);
    discovered.insert(start);
    frontier.push(FrontierEntry {
        coord: start,
        g: 0,
        f: heuristic(start),
    });
    let mut max_frontier = frontier.len();

    while let Some(current) = frontier.pop() {
        // Stale duplicate (DFS re-push or superseded A* entry)
        if !closed.insert(current.coord) {
            continue;
        }
        explored.push(current.coord);

        if goal.is_satisfied(world, current.coord) {
            let path = reconstruct_path(&parents, start, current.coord);
            trace!(
                "[{}] SUCCESS: goal {} at {} steps, nodes_expanded={}",
                algorithm,
                current.coord,
                path.len() - 1,
                explored.len()
            );
            return SearchResult {
                algorithm,
                path,
                frontier: pending(&frontier, &closed),
                nodes_expanded: explored.len(),
                explored,
                max_frontier,
            };
        }

        let mut neighbors = world.neighbors(current.coord);
        if discipline == Discipline::Lifo {
            // Pushed last pops first, so reverse to expand in declared order
            neighbors.reverse();
        }

        let g = current.g + 1;
        for neighbor in neighbors {
            if closed.contains(&neighbor) {
                continue;
            }

            match discipline {
                Discipline::Fifo => {
                    if !discovered.insert(neighbor) {
                        continue;
                    }
                    parents.insert(neighbor, current.coord);
                    frontier.push(FrontierEntry {
                        coord: neighbor,
                        g,
                        f: g,
                    });
                }
                Discipline::Lifo => {
                    if discovered.insert(neighbor) {
                        parents.insert(neighbor, current.coord);
                    }
                    frontier.push(FrontierEntry {
                        coord: neighbor,
                        g,
                        f: g,
                    });
                }
                Discipline::Priority => {
                    let best = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                    if g < best {
                        g_scores.insert(neighbor, g);
                        parents.insert(neighbor, current.coord);
                        frontier.push(FrontierEntry {
                            coord: neighbor,
                            g,
                            f: g + heuristic(neighbor),
                        });
                    }
                }
            }
        }
        max_frontier = max_frontier.max(frontier.len());
    }

    debug!(
        "[{}] FAILED: NoPath from {} after expanding {} nodes",
        algorithm,
        start,
        explored.len()
    );
    SearchResult {
        algorithm,
        path: Vec::new(),
        frontier: Vec::new(),
        nodes_expanded: explored.len(),
        explored,
        max_frontier,
    }
}

/// Walk parents from `goal` back to `start` and reverse.
fn reconstruct_path(
    parents: &HashMap<GridCoord, GridCoord>,
    start: GridCoord,
    goal: GridCoord,
) -> Vec<GridCoord> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Distinct queued cells that have not been finalized yet.
fn pending<F: Frontier>(frontier: &F, closed: &HashSet<GridCoord>) -> Vec<GridCoord> {
    let mut seen = HashSet::new();
    frontier
        .positions()
        .into_iter()
        .filter(|c| !closed.contains(c) && seen.insert(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path() {
        let mut parents = HashMap::new();
        parents.insert(GridCoord::new(1, 0), GridCoord::new(0, 0));
        parents.insert(GridCoord::new(1, 1), GridCoord::new(1, 0));

        let path = reconstruct_path(&parents, GridCoord::new(0, 0), GridCoord::new(1, 1));
        assert_eq!(
            path,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(1, 0),
                GridCoord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_reconstruct_start_only() {
        let parents = HashMap::new();
        let path = reconstruct_path(&parents, GridCoord::new(3, 3), GridCoord::new(3, 3));
        assert_eq!(path, vec![GridCoord::new(3, 3)]);
    }
}
