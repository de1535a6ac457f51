//! Default value functions for serde deserialization.

use crate::agent::AgentKind;

pub fn grid_width() -> usize {
    20
}

pub fn grid_height() -> usize {
    15
}

pub fn obstacle_probability() -> f64 {
    0.10
}

pub fn dirt_probability() -> f64 {
    0.30
}

pub fn agent_kind() -> AgentKind {
    AgentKind::UtilityBased
}

pub fn max_ticks() -> u64 {
    10_000
}
