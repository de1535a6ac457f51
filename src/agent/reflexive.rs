//! Simple reflex strategy: a random legal move, no search.

use log::trace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::core::Action;
use crate::grid::GridWorld;

use super::Plan;
use super::state::{Decision, WaitReason};

/// Reacts to the current cell only.
///
/// Dirt is handled by the agent before this is consulted, so all that is
/// left is picking uniformly among the walkable neighbors.
#[derive(Clone, Debug)]
pub struct ReflexiveStrategy {
    rng: StdRng,
}

impl ReflexiveStrategy {
    /// Create with a fixed seed, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub(crate) fn plan_move(&mut self, world: &GridWorld) -> Plan {
        let moves = world.available_moves();
        let decision = match moves.choose(&mut self.rng) {
            Some(&direction) => {
                trace!(
                    "[Reflex] {} options from {}, picked {}",
                    moves.len(),
                    world.robot(),
                    direction
                );
                Decision::Act(Action::Move(direction))
            }
            None => Decision::Wait(WaitReason::EmptyNeighborSet),
        };
        Plan::without_search(decision)
    }
}
