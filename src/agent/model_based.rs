//! Model-based strategy: BFS to the nearest dirt, steered by memory.

use log::{debug, trace};

use crate::core::{Direction, GridCoord};
use crate::grid::GridWorld;
use crate::search::{SearchResult, distance_field, nearest_dirty_bfs};

use super::Plan;
use super::memory::AgentMemory;

/// Plans with BFS and remembers where it has been.
///
/// Every move lies on a shortest path to the nearest dirty cell. When
/// several neighbors are equally close to that cell, the first one not yet
/// visited wins, so the robot drifts into unexplored territory instead of
/// retracing its steps.
#[derive(Clone, Debug, Default)]
pub struct ModelBasedStrategy {
    memory: AgentMemory,
}

impl ModelBasedStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The agent's memory of this run
    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    pub(crate) fn observe(&mut self, world: &GridWorld) {
        self.memory.mark_visited(world.robot());
    }

    pub(crate) fn record_clean(&mut self, cell: GridCoord) {
        self.memory.mark_cleaned(cell);
    }

    pub(crate) fn plan_move(&mut self, world: &GridWorld) -> Plan {
        let from = world.robot();
        let result = nearest_dirty_bfs(world, from);
        let Some(target) = result.goal() else {
            debug!(
                "[ModelBased] No reachable dirt from {} ({} nodes expanded)",
                from, result.nodes_expanded
            );
            return Plan::follow(result);
        };

        match self.choose_direction(world, from, target, &result) {
            Some(direction) => Plan::toward(direction, result),
            None => Plan::follow(result),
        }
    }

    fn choose_direction(
        &self,
        world: &GridWorld,
        from: GridCoord,
        target: GridCoord,
        result: &SearchResult,
    ) -> Option<Direction> {
        let field = distance_field(world, target);
        let Some(remaining) = field.get(&from).and_then(|d| d.checked_sub(1)) else {
            return result.first_direction();
        };

        let candidates: Vec<GridCoord> = world
            .neighbors(from)
            .into_iter()
            .filter(|n| field.get(n) == Some(&remaining))
            .collect();
        let next = self
            .memory
            .prefer_unvisited(&candidates)
            .or_else(|| result.first_step())?;

        trace!(
            "[ModelBased] {} -> {} toward {} ({} tied candidates)",
            from,
            next,
            target,
            candidates.len()
        );
        from.direction_to(&next)
    }

    pub(crate) fn reset(&mut self) {
        self.memory.clear();
    }
}
