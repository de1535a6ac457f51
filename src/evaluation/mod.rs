//! Episode evaluation.

mod performance;

pub use performance::{PerformanceSummary, PerformanceTracker};
