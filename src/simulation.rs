//! Tick-driven run loop.
//!
//! A [`Simulation`] asks its agent for a decision, applies it to the world,
//! and records the result. Agents never mutate the world themselves.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::agent::{Agent, AgentKind, Decision, TerminalReason, WaitReason};
use crate::config::MarjanaConfig;
use crate::core::Action;
use crate::error::{InvalidMove, Result};
use crate::evaluation::{PerformanceSummary, PerformanceTracker};
use crate::grid::{GridConfig, GridWorld};
use crate::search::SearchResult;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The action was applied
    Acted(Action),
    /// A move was rejected; the world is unchanged
    MoveRejected(InvalidMove),
    /// The agent skipped this tick
    Waited(WaitReason),
    /// The agent is done; no tick was recorded
    Terminated(TerminalReason),
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Stalled,
    TickLimit,
}

impl From<TerminalReason> for RunOutcome {
    fn from(reason: TerminalReason) -> Self {
        match reason {
            TerminalReason::Completed => RunOutcome::Completed,
            TerminalReason::Stalled => RunOutcome::Stalled,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed => f.write_str("completed"),
            RunOutcome::Stalled => f.write_str("stalled"),
            RunOutcome::TickLimit => f.write_str("tick limit reached"),
        }
    }
}

/// Result of [`Simulation::run`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub agent: AgentKind,
    pub outcome: RunOutcome,
    pub summary: PerformanceSummary,
}

/// Where fresh worlds come from on reset.
#[derive(Clone, Debug)]
enum WorldSource {
    /// Regenerate from the config, continuing the RNG stream
    Generated { config: GridConfig, rng: StdRng },
    /// Restore a fixed layout
    Fixed(GridWorld),
}

impl WorldSource {
    fn next_world(&mut self) -> Result<GridWorld> {
        match self {
            WorldSource::Generated { config, rng } => Ok(GridWorld::generate(config, rng)?),
            WorldSource::Fixed(world) => Ok(world.clone()),
        }
    }
}

/// One robot cleaning one world.
#[derive(Clone, Debug)]
pub struct Simulation {
    source: WorldSource,
    world: GridWorld,
    agent: Agent,
    agent_seed: Option<u64>,
    tracker: PerformanceTracker,
}

impl Simulation {
    /// Generate a world from `grid` and attach a new agent.
    pub fn new(grid: GridConfig, kind: AgentKind, agent_seed: Option<u64>) -> Result<Self> {
        grid.validate()?;
        let rng = match grid.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut source = WorldSource::Generated { config: grid, rng };
        let world = source.next_world()?;
        Ok(Self::assemble(source, world, kind, agent_seed))
    }

    /// Build from a full configuration.
    pub fn from_config(config: &MarjanaConfig) -> Result<Self> {
        Self::new(config.grid.clone(), config.agent.kind, config.agent.seed)
    }

    /// Run on a fixed world. Reset restores this exact layout.
    pub fn with_world(world: GridWorld, kind: AgentKind, agent_seed: Option<u64>) -> Self {
        let source = WorldSource::Fixed(world.clone());
        Self::assemble(source, world, kind, agent_seed)
    }

    fn assemble(
        source: WorldSource,
        world: GridWorld,
        kind: AgentKind,
        agent_seed: Option<u64>,
    ) -> Self {
        info!(
            "[Simulation] {}x{} world, {} dirty, agent {}",
            world.width(),
            world.height(),
            world.initial_dirt(),
            kind.name()
        );
        let tracker = PerformanceTracker::new(world.initial_dirt());
        Self {
            source,
            world,
            agent: Agent::new(kind, agent_seed),
            agent_seed,
            tracker,
        }
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn tracker(&self) -> &PerformanceTracker {
        &self.tracker
    }

    /// The agent's most recent search, for visualisation
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.agent.last_search()
    }

    /// Advance one tick.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = match self.agent.decide(&self.world) {
            Decision::Terminate(reason) => return StepOutcome::Terminated(reason),
            Decision::Wait(reason) => {
                debug!("[Simulation] Waiting: {:?}", reason);
                StepOutcome::Waited(reason)
            }
            Decision::Act(Action::Clean) => {
                let cleaned = self.world.clean_current();
                self.tracker.record_clean(cleaned);
                StepOutcome::Acted(Action::Clean)
            }
            Decision::Act(Action::Move(direction)) => match self.world.try_move(direction) {
                Ok(_) => {
                    self.tracker.record_move(true);
                    StepOutcome::Acted(Action::Move(direction))
                }
                Err(err) => {
                    warn!("[Simulation] {}", err);
                    self.tracker.record_move(false);
                    StepOutcome::MoveRejected(err)
                }
            },
        };
        self.tracker.record_tick();
        outcome
    }

    /// Step until the agent terminates or `max_ticks` ticks have elapsed.
    pub fn run(&mut self, max_ticks: u64) -> RunReport {
        let mut ticks = 0;
        let outcome = loop {
            if ticks >= max_ticks {
                break if self.world.is_goal_state() {
                    RunOutcome::Completed
                } else {
                    RunOutcome::TickLimit
                };
            }
            if let StepOutcome::Terminated(reason) = self.step() {
                break RunOutcome::from(reason);
            }
            ticks += 1;
        };

        let report = RunReport {
            agent: self.agent.kind(),
            outcome,
            summary: self.tracker.summary(),
        };
        info!(
            "[Simulation] {} {}: {}",
            report.agent.name(),
            report.outcome,
            report.summary
        );
        report
    }

    /// Start a new episode: fresh world, reset agent, zeroed counters.
    pub fn reset(&mut self) -> Result<()> {
        self.world = self.source.next_world()?;
        self.agent.reset();
        self.tracker.reset(self.world.initial_dirt());
        debug!(
            "[Simulation] Reset: {} dirty cells",
            self.world.initial_dirt()
        );
        Ok(())
    }

    /// Replace the agent with a fresh one of `kind` and reset.
    pub fn switch_agent(&mut self, kind: AgentKind) -> Result<()> {
        info!(
            "[Simulation] Switching {} -> {}",
            self.agent.kind().name(),
            kind.name()
        );
        self.agent = Agent::new(kind, self.agent_seed);
        self.reset()
    }
}
