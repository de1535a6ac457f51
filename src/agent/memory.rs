//! Per-agent memory of visited and cleaned cells.

use std::collections::{HashMap, HashSet};

use crate::core::GridCoord;

/// Cells an agent has personally visited or cleaned during one run.
///
/// Owned by a single agent and cleared on reset. It only steers the choice
/// between equally good moves; search correctness never depends on it.
#[derive(Clone, Debug, Default)]
pub struct AgentMemory {
    /// Visit count per cell (saturating)
    visited: HashMap<GridCoord, u8>,
    /// Cells this agent cleaned
    cleaned: HashSet<GridCoord>,
}

impl AgentMemory {
    /// Create an empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the robot stood on `cell`.
    pub fn mark_visited(&mut self, cell: GridCoord) {
        let count = self.visited.entry(cell).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Record that the agent cleaned `cell`.
    pub fn mark_cleaned(&mut self, cell: GridCoord) {
        self.cleaned.insert(cell);
    }

    pub fn is_visited(&self, cell: GridCoord) -> bool {
        self.visited.contains_key(&cell)
    }

    pub fn is_cleaned(&self, cell: GridCoord) -> bool {
        self.cleaned.contains(&cell)
    }

    /// Get the visit count for a cell.
    pub fn visit_count(&self, cell: GridCoord) -> u8 {
        self.visited.get(&cell).copied().unwrap_or(0)
    }

    /// Number of distinct cells visited
    pub fn cells_visited(&self) -> usize {
        self.visited.len()
    }

    /// Number of cells cleaned
    pub fn cells_cleaned(&self) -> usize {
        self.cleaned.len()
    }

    /// First unvisited cell among `candidates`, else the first candidate.
    pub fn prefer_unvisited(&self, candidates: &[GridCoord]) -> Option<GridCoord> {
        candidates
            .iter()
            .find(|c| !self.is_visited(**c))
            .or_else(|| candidates.first())
            .copied()
    }

    /// Clear all memory.
    pub fn clear(&mut self) {
        self.visited.clear();
        self.cleaned.clear();
    }
}
