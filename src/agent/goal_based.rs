//! Goal-based strategy: DFS to a committed target.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::core::{Direction, GridCoord};
use crate::grid::GridWorld;
use crate::search::{Goal, SearchAlgorithm, SearchResult, dfs};

use super::Plan;

/// Picks the first reachable dirty cell in row-major order and follows a
/// DFS path to it.
///
/// The path is kept until the target is clean or the robot is no longer
/// where the plan expects it. Replanning from every cell along a DFS path
/// can oscillate between two cells, since DFS paths are not shortest.
#[derive(Clone, Debug, Default)]
pub struct GoalBasedStrategy {
    target: Option<GridCoord>,
    /// Remaining cells to visit, excluding the robot's cell
    route: VecDeque<GridCoord>,
}

impl GoalBasedStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current committed target
    pub fn target(&self) -> Option<GridCoord> {
        self.target
    }

    pub(crate) fn plan_move(&mut self, world: &GridWorld) -> Plan {
        if let Some(direction) = self.next_on_route(world) {
            return Plan::continuing(direction);
        }
        self.clear();

        let from = world.robot();
        let mut last = SearchResult::not_found(SearchAlgorithm::Dfs);
        for target in world.dirty_tiles() {
            let result = dfs(world, from, &Goal::Position(target));
            if result.found() {
                debug!(
                    "[GoalBased] Committed to {} via {} steps",
                    target,
                    result.steps()
                );
                self.target = Some(target);
                self.route = result.path.iter().skip(2).copied().collect();
                return Plan::follow(result);
            }
            trace!("[GoalBased] {} unreachable from {}", target, from);
            last = result;
        }
        Plan::follow(last)
    }

    /// Next direction along the committed route, if it is still valid.
    fn next_on_route(&mut self, world: &GridWorld) -> Option<Direction> {
        let target = self.target?;
        if !world.is_dirty(target) {
            return None;
        }
        let next = *self.route.front()?;
        if !world.is_walkable(next) {
            return None;
        }
        let direction = world.robot().direction_to(&next)?;
        self.route.pop_front();
        Some(direction)
    }

    pub(crate) fn record_clean(&mut self, cell: GridCoord) {
        if self.target == Some(cell) {
            self.clear();
        }
    }

    pub(crate) fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.target = None;
        self.route.clear();
    }
}
