//! # Marjana: Grid-World Cleaning Agents
//!
//! A discrete grid world with a single cleaning robot, a shared search
//! engine (BFS, DFS, A*), and four agent strategies of increasing
//! sophistication.
//!
//! ## Quick Start
//!
//! ```rust
//! use marjana::{AgentKind, GridWorld, RunOutcome, Simulation};
//!
//! let world = GridWorld::from_ascii(
//!     "R.*
//!      .#.
//!      *..",
//! )
//! .unwrap();
//!
//! let mut sim = Simulation::with_world(world, AgentKind::UtilityBased, None);
//! let report = sim.run(100);
//! assert_eq!(report.outcome, RunOutcome::Completed);
//! assert_eq!(report.summary.tiles_cleaned, 2);
//! ```
//!
//! ## Coordinate Frame
//!
//! - `(0, 0)` is the top-left cell
//! - `x` grows to the right (column), `y` grows downward (row)
//! - [`Direction::Up`](crate::core::Direction::Up) decreases `y`
//! - Neighbors are always produced in Up, Right, Down, Left order
//!
//! ## Architecture
//!
//! - [`core`]: Cells, coordinates, directions and actions
//! - [`grid`]: The [`GridWorld`] and its generation parameters
//! - [`search`]: BFS, DFS and A* over one shared traversal
//! - [`agent`]: The four strategies and their lifecycle
//! - [`evaluation`]: Episode counters
//! - [`simulation`]: Tick loop applying agent decisions
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   ┌───────────┐  decide(&world)  ┌─────────┐  bfs/dfs/astar  ┌──────────┐
//!   │ GridWorld │ ───────────────► │  Agent  │ ──────────────► │  search  │
//!   └───────────┘                  └─────────┘                 └──────────┘
//!         ▲                             │ Decision
//!         │ clean / try_move            ▼
//!   ┌─────┴──────┐   record_*   ┌────────────────────┐
//!   │ Simulation │ ───────────► │ PerformanceTracker │
//!   └────────────┘              └────────────────────┘
//! ```

pub mod agent;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod grid;
pub mod search;
pub mod simulation;

pub use agent::{Agent, AgentKind, AgentState, Decision, TerminalReason, WaitReason};
pub use config::MarjanaConfig;
pub use crate::core::{Action, CellState, Direction, GridCoord};
pub use error::{ConfigError, GridError, InvalidMove, MarjanaError, Result};
pub use evaluation::{PerformanceSummary, PerformanceTracker};
pub use grid::{GridConfig, GridWorld};
pub use search::{Goal, SearchAlgorithm, SearchResult};
pub use simulation::{RunOutcome, RunReport, Simulation, StepOutcome};
