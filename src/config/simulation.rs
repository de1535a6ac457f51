//! Simulation section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Run loop limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Stop a run after this many ticks even if the agent is still active
    #[serde(default = "defaults::max_ticks")]
    pub max_ticks: u64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            max_ticks: defaults::max_ticks(),
        }
    }
}
