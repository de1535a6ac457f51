//! Agent section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::agent::AgentKind;

/// Which strategy drives the robot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSection {
    /// Strategy key: reflexive, model_based, utility_based, goal_based
    #[serde(default = "defaults::agent_kind")]
    pub kind: AgentKind,

    /// Seed for the reflexive strategy's RNG (OS entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            kind: defaults::agent_kind(),
            seed: None,
        }
    }
}
