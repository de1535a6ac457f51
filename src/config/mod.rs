//! Configuration loading.
//!
//! Everything is read from a single YAML file with three optional sections:
//!
//! ```yaml
//! grid:
//!   width: 20
//!   height: 15
//!   obstacle_probability: 0.1
//!   dirt_probability: 0.3
//!   seed: 42
//!   start: { x: 0, y: 0 }
//! agent:
//!   kind: utility_based
//! simulation:
//!   max_ticks: 10000
//! ```
//!
//! Missing fields fall back to the values in `defaults`.

mod agent;
pub(crate) mod defaults;
mod marjana;
mod simulation;

pub use agent::AgentSection;
pub use marjana::{DEFAULT_CONFIG_PATH, MarjanaConfig};
pub use simulation::SimulationSection;
