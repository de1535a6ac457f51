//! Run counters for a cleaning episode.
//!
//! The tracker is passive: the simulation records each applied action and
//! tick, and the core never touches it.
//!
//! ## Usage
//!
//! ```rust
//! use marjana::evaluation::PerformanceTracker;
//!
//! let mut tracker = PerformanceTracker::new(4);
//! tracker.record_move(true);
//! tracker.record_clean(true);
//! tracker.record_tick();
//!
//! let summary = tracker.summary();
//! assert_eq!(summary.tiles_cleaned, 1);
//! assert_eq!(summary.cleanliness_pct, 25.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a tracker's counters and derived ratios.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Elapsed ticks
    pub ticks: u64,
    /// Successful moves
    pub steps: u64,
    /// Rejected moves (obstacle or edge)
    pub failed_moves: u64,
    /// Clean actions applied, including ones on already clean cells
    pub cleaning_actions: u64,
    /// Cells turned from dirty to clean
    pub tiles_cleaned: usize,
    /// Dirty cells at spawn
    pub total_dirt: usize,
    /// Percentage of the spawned dirt that has been cleaned
    pub cleanliness_pct: f64,
    /// Tiles cleaned per step, as a percentage
    pub efficiency_pct: f64,
}

impl PerformanceSummary {
    /// Print a short report to stdout.
    pub fn print(&self) {
        println!("=== Run Summary ===");
        println!("Ticks:        {}", self.ticks);
        println!("Steps:        {}", self.steps);
        println!("Failed moves: {}", self.failed_moves);
        println!(
            "Cleaned:      {}/{} ({:.1}%)",
            self.tiles_cleaned, self.total_dirt, self.cleanliness_pct
        );
        println!("Efficiency:   {:.1}%", self.efficiency_pct);
    }
}

impl fmt::Display for PerformanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticks={} steps={} cleaned={}/{} ({:.1}%) efficiency={:.1}%",
            self.ticks,
            self.steps,
            self.tiles_cleaned,
            self.total_dirt,
            self.cleanliness_pct,
            self.efficiency_pct
        )
    }
}

/// Episode counters, updated by the driver after each applied action.
#[derive(Clone, Debug, Default)]
pub struct PerformanceTracker {
    ticks: u64,
    steps: u64,
    failed_moves: u64,
    cleaning_actions: u64,
    tiles_cleaned: usize,
    total_dirt: usize,
}

impl PerformanceTracker {
    /// Create a tracker for a world that spawned `total_dirt` dirty cells.
    pub fn new(total_dirt: usize) -> Self {
        Self {
            total_dirt,
            ..Default::default()
        }
    }

    /// Record one elapsed tick.
    pub fn record_tick(&mut self) {
        self.ticks += 1;
    }

    /// Record a move attempt.
    pub fn record_move(&mut self, succeeded: bool) {
        if succeeded {
            self.steps += 1;
        } else {
            self.failed_moves += 1;
        }
    }

    /// Record a clean action; `cleaned` is whether a dirty cell changed.
    pub fn record_clean(&mut self, cleaned: bool) {
        self.cleaning_actions += 1;
        if cleaned {
            self.tiles_cleaned += 1;
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn failed_moves(&self) -> u64 {
        self.failed_moves
    }

    pub fn tiles_cleaned(&self) -> usize {
        self.tiles_cleaned
    }

    pub fn total_dirt(&self) -> usize {
        self.total_dirt
    }

    /// Percentage of spawned dirt cleaned so far (100 for a spotless spawn).
    pub fn cleanliness(&self) -> f64 {
        if self.total_dirt == 0 {
            return 100.0;
        }
        self.tiles_cleaned as f64 / self.total_dirt as f64 * 100.0
    }

    /// Tiles cleaned per step as a percentage. Zero steps count as one.
    pub fn efficiency(&self) -> f64 {
        self.tiles_cleaned as f64 / self.steps.max(1) as f64 * 100.0
    }

    /// Snapshot the counters.
    pub fn summary(&self) -> PerformanceSummary {
        PerformanceSummary {
            ticks: self.ticks,
            steps: self.steps,
            failed_moves: self.failed_moves,
            cleaning_actions: self.cleaning_actions,
            tiles_cleaned: self.tiles_cleaned,
            total_dirt: self.total_dirt,
            cleanliness_pct: self.cleanliness(),
            efficiency_pct: self.efficiency(),
        }
    }

    /// Zero every counter for a new world with `total_dirt` dirty cells.
    pub fn reset(&mut self, total_dirt: usize) {
        *self = Self::new(total_dirt);
    }
}
