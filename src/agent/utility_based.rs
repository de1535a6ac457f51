//! Utility-based strategy: A* toward the cheapest dirty cell.

use log::debug;

use crate::grid::GridWorld;
use crate::search::nearest_dirty_astar;

use super::Plan;

/// Maximizes utility by always heading for the dirty cell with the lowest
/// path cost. Ties are broken by row-major position.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtilityBasedStrategy;

impl UtilityBasedStrategy {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn plan_move(&mut self, world: &GridWorld) -> Plan {
        let result = nearest_dirty_astar(world, world.robot());
        if let Some(target) = result.goal() {
            debug!(
                "[Utility] Target {} at cost {} ({} nodes expanded)",
                target,
                result.steps(),
                result.nodes_expanded
            );
        }
        Plan::follow(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Decision, TerminalReason};
    use crate::core::{Action, Direction, GridCoord};

    #[test]
    fn test_heads_for_cheapest_dirt() {
        // (0,2) is two steps away, (3,0) needs a detour around the wall
        let world = GridWorld::from_ascii(
            "R.#*
             ..#.
             *...",
        )
        .unwrap();
        let mut strategy = UtilityBasedStrategy::new();
        let plan = strategy.plan_move(&world);
        assert_eq!(plan.decision, Decision::Act(Action::Move(Direction::Down)));
        assert_eq!(plan.search.unwrap().goal(), Some(GridCoord::new(0, 2)));
    }

    #[test]
    fn test_tie_goes_to_row_major_first() {
        let world = GridWorld::from_ascii(
            "*..
             .R.
             ..*",
        )
        .unwrap();
        let mut strategy = UtilityBasedStrategy::new();
        let plan = strategy.plan_move(&world);
        assert_eq!(plan.search.unwrap().goal(), Some(GridCoord::new(0, 0)));
    }

    #[test]
    fn test_no_reachable_dirt_stalls() {
        let world = GridWorld::from_ascii(
            "R#
             #*",
        )
        .unwrap();
        let mut strategy = UtilityBasedStrategy::new();
        assert_eq!(
            strategy.plan_move(&world).decision,
            Decision::Terminate(TerminalReason::Stalled)
        );
    }
}
