//! Cleaning agents.
//!
//! An [`Agent`] wraps one of four strategies behind a common decision
//! loop. Every tick the agent:
//!
//! 1. Terminates with [`TerminalReason::Completed`] when no dirt remains
//! 2. Cleans if the robot stands on a dirty cell
//! 3. Terminates with [`TerminalReason::Stalled`] when a strategy that
//!    does not search can still move but no dirt is reachable
//! 4. Otherwise asks its strategy for a move
//!
//! | Kind | Planning | Notes |
//! |------|----------|-------|
//! | `reflexive` | none | random legal move, waits when enclosed, stalls on unreachable dirt |
//! | `model_based` | BFS | prefers unvisited cells among shortest moves |
//! | `utility_based` | A* | lowest-cost dirt, row-major tie-break |
//! | `goal_based` | DFS | commits to first reachable dirt in row-major order |
//!
//! Agents only read the world; the caller applies the returned action.

mod goal_based;
mod memory;
mod model_based;
mod reflexive;
mod state;
mod utility_based;

pub use goal_based::GoalBasedStrategy;
pub use memory::AgentMemory;
pub use model_based::ModelBasedStrategy;
pub use reflexive::ReflexiveStrategy;
pub use state::{AgentState, Decision, TerminalReason, WaitReason};
pub use utility_based::UtilityBasedStrategy;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{Action, Direction};
use crate::error::MarjanaError;
use crate::grid::GridWorld;
use crate::search::{SearchResult, distance_field};

/// Agent strategy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Reflexive,
    ModelBased,
    #[default]
    UtilityBased,
    GoalBased,
}

impl AgentKind {
    /// All kinds in menu order
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Reflexive,
        AgentKind::ModelBased,
        AgentKind::UtilityBased,
        AgentKind::GoalBased,
    ];

    /// Configuration key
    pub fn key(self) -> &'static str {
        match self {
            AgentKind::Reflexive => "reflexive",
            AgentKind::ModelBased => "model_based",
            AgentKind::UtilityBased => "utility_based",
            AgentKind::GoalBased => "goal_based",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Reflexive => "Simple Reflex Agent",
            AgentKind::ModelBased => "Model-Based Agent",
            AgentKind::UtilityBased => "Utility-Based Agent",
            AgentKind::GoalBased => "Goal-Based Agent",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AgentKind {
    type Err = MarjanaError;

    /// Accepts the configuration key, hyphenated forms, and short names
    /// (`reflex`, `model`, `utility`, `goal`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "reflexive" | "reflex" | "simple_reflex" => Ok(AgentKind::Reflexive),
            "model_based" | "model" => Ok(AgentKind::ModelBased),
            "utility_based" | "utility" => Ok(AgentKind::UtilityBased),
            "goal_based" | "goal" => Ok(AgentKind::GoalBased),
            _ => Err(MarjanaError::UnknownAgent(s.to_string())),
        }
    }
}

/// A strategy's answer for one tick, plus the search it ran (if any).
#[derive(Clone, Debug)]
pub(crate) struct Plan {
    pub decision: Decision,
    pub search: Option<SearchResult>,
}

impl Plan {
    pub(crate) fn without_search(decision: Decision) -> Self {
        Self {
            decision,
            search: None,
        }
    }

    /// Move along a previously committed route.
    pub(crate) fn continuing(direction: Direction) -> Self {
        Self::without_search(Decision::Act(Action::Move(direction)))
    }

    /// Take the first step of `result`, or stall when it found nothing.
    pub(crate) fn follow(result: SearchResult) -> Self {
        let decision = match result.first_direction() {
            Some(direction) => Decision::Act(Action::Move(direction)),
            None => Decision::Terminate(TerminalReason::Stalled),
        };
        Self {
            decision,
            search: Some(result),
        }
    }

    /// Move in `direction`, keeping `result` for inspection.
    pub(crate) fn toward(direction: Direction, result: SearchResult) -> Self {
        Self {
            decision: Decision::Act(Action::Move(direction)),
            search: Some(result),
        }
    }
}

#[derive(Clone, Debug)]
enum Strategy {
    Reflexive(ReflexiveStrategy),
    ModelBased(ModelBasedStrategy),
    UtilityBased(UtilityBasedStrategy),
    GoalBased(GoalBasedStrategy),
}

impl Strategy {
    fn new(kind: AgentKind, seed: Option<u64>) -> Self {
        match kind {
            AgentKind::Reflexive => Strategy::Reflexive(ReflexiveStrategy::new(seed)),
            AgentKind::ModelBased => Strategy::ModelBased(ModelBasedStrategy::new()),
            AgentKind::UtilityBased => Strategy::UtilityBased(UtilityBasedStrategy::new()),
            AgentKind::GoalBased => Strategy::GoalBased(GoalBasedStrategy::new()),
        }
    }

    /// Does this strategy run a search that reports unreachable dirt itself?
    fn plans(&self) -> bool {
        !matches!(self, Strategy::Reflexive(_))
    }

    fn observe(&mut self, world: &GridWorld) {
        if let Strategy::ModelBased(s) = self {
            s.observe(world);
        }
    }

    fn record_clean(&mut self, world: &GridWorld) {
        let cell = world.robot();
        match self {
            Strategy::ModelBased(s) => s.record_clean(cell),
            Strategy::GoalBased(s) => s.record_clean(cell),
            Strategy::Reflexive(_) | Strategy::UtilityBased(_) => {}
        }
    }

    fn plan_move(&mut self, world: &GridWorld) -> Plan {
        match self {
            Strategy::Reflexive(s) => s.plan_move(world),
            Strategy::ModelBased(s) => s.plan_move(world),
            Strategy::UtilityBased(s) => s.plan_move(world),
            Strategy::GoalBased(s) => s.plan_move(world),
        }
    }

    fn reset(&mut self) {
        match self {
            Strategy::ModelBased(s) => s.reset(),
            Strategy::GoalBased(s) => s.reset(),
            Strategy::Reflexive(_) | Strategy::UtilityBased(_) => {}
        }
    }
}

/// A cleaning agent: one strategy plus its lifecycle.
#[derive(Clone, Debug)]
pub struct Agent {
    kind: AgentKind,
    strategy: Strategy,
    state: AgentState,
    last_search: Option<SearchResult>,
}

impl Agent {
    /// Create an agent. `seed` only affects the reflexive strategy.
    pub fn new(kind: AgentKind, seed: Option<u64>) -> Self {
        Self {
            kind,
            strategy: Strategy::new(kind, seed),
            state: AgentState::Idle,
            last_search: None,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminal()
    }

    /// Most recent search run by the strategy, for visualisation
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// Memory of the model-based strategy
    pub fn memory(&self) -> Option<&AgentMemory> {
        match &self.strategy {
            Strategy::ModelBased(s) => Some(s.memory()),
            _ => None,
        }
    }

    /// Decide what to do this tick.
    ///
    /// Never mutates `world`. Once terminated, keeps returning the same
    /// terminal decision until [`Agent::reset`].
    pub fn decide(&mut self, world: &GridWorld) -> Decision {
        if let AgentState::Terminated(reason) = self.state {
            return Decision::Terminate(reason);
        }
        if world.is_goal_state() {
            return self.terminate(TerminalReason::Completed);
        }
        self.transition(AgentState::Deciding);

        self.strategy.observe(world);
        if world.is_current_dirty() {
            self.strategy.record_clean(world);
            return Decision::Act(Action::Clean);
        }

        // Enclosed robots keep waiting; anything else with no reachable dirt stalls
        if !self.strategy.plans()
            && !world.available_moves().is_empty()
            && !dirt_reachable(world)
        {
            debug!(
                "[{}] {} dirty cells, none reachable from {}",
                self.kind.name(),
                world.dirty_count(),
                world.robot()
            );
            return self.terminate(TerminalReason::Stalled);
        }

        let plan = self.strategy.plan_move(world);
        if let Some(search) = plan.search {
            self.last_search = Some(search);
        }
        match plan.decision {
            Decision::Terminate(reason) => self.terminate(reason),
            decision => decision,
        }
    }

    /// Return to `Idle` and forget everything learned this run.
    pub fn reset(&mut self) {
        self.strategy.reset();
        self.last_search = None;
        self.transition(AgentState::Idle);
    }

    fn terminate(&mut self, reason: TerminalReason) -> Decision {
        self.transition(AgentState::Terminated(reason));
        Decision::Terminate(reason)
    }

    fn transition(&mut self, next: AgentState) {
        if self.state == next {
            return;
        }
        match next {
            AgentState::Terminated(_) => info!(
                "[{}] {} -> {}",
                self.kind.name(),
                self.state.name(),
                next.name()
            ),
            _ => debug!(
                "[{}] {} -> {}",
                self.kind.name(),
                self.state.name(),
                next.name()
            ),
        }
        self.state = next;
    }
}

/// Is any dirty cell reachable from the robot?
fn dirt_reachable(world: &GridWorld) -> bool {
    let field = distance_field(world, world.robot());
    world.dirty_tiles().iter().any(|cell| field.contains_key(cell))
}
