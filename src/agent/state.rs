//! Agent lifecycle and decision types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Action;

/// Why an agent stopped producing actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalReason {
    /// No dirty cell remains
    Completed,
    /// Dirty cells remain but none is reachable
    Stalled,
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalReason::Completed => f.write_str("completed"),
            TerminalReason::Stalled => f.write_str("stalled"),
        }
    }
}

/// Why an agent skipped a tick without terminating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitReason {
    /// Every neighbor of the current cell is blocked
    EmptyNeighborSet,
}

/// Outcome of one `decide` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Apply this action
    Act(Action),
    /// Do nothing this tick
    Wait(WaitReason),
    /// No further actions will be produced
    Terminate(TerminalReason),
}

impl Decision {
    /// The action to apply, if any
    pub fn action(&self) -> Option<Action> {
        match self {
            Decision::Act(action) => Some(*action),
            _ => None,
        }
    }

    /// Is this a terminal decision?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Decision::Terminate(_))
    }
}

/// Agent lifecycle state.
///
/// ```text
/// Idle ──tick──► Deciding ──goal reached / nothing reachable──► Terminated
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    /// Constructed or reset, no tick seen yet
    #[default]
    Idle,
    /// Producing one action per tick
    Deciding,
    /// Finished; `decide` keeps returning the same terminal decision
    Terminated(TerminalReason),
}

impl AgentState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentState::Terminated(_))
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AgentState::Idle => "Idle",
            AgentState::Deciding => "Deciding",
            AgentState::Terminated(TerminalReason::Completed) => "Completed",
            AgentState::Terminated(TerminalReason::Stalled) => "Stalled",
        }
    }
}
