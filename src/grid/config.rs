//! Configuration for world generation.

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::GridCoord;
use crate::error::GridError;

/// Parameters for randomized world generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells
    #[serde(default = "defaults::grid_width")]
    pub width: usize,

    /// Grid height in cells
    #[serde(default = "defaults::grid_height")]
    pub height: usize,

    /// Probability that a cell becomes an obstacle
    #[serde(default = "defaults::obstacle_probability")]
    pub obstacle_probability: f64,

    /// Probability that a non-obstacle cell starts dirty
    #[serde(default = "defaults::dirt_probability")]
    pub dirt_probability: f64,

    /// Seed for the generation RNG. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Robot spawn cell (always walkable and clean)
    #[serde(default)]
    pub start: GridCoord,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: defaults::grid_width(),
            height: defaults::grid_height(),
            obstacle_probability: defaults::obstacle_probability(),
            dirt_probability: defaults::dirt_probability(),
            seed: None,
            start: GridCoord::new(0, 0),
        }
    }
}

impl GridConfig {
    /// Create a configuration for a grid of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Builder-style setter for the generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style setter for the obstacle probability.
    pub fn with_obstacle_probability(mut self, probability: f64) -> Self {
        self.obstacle_probability = probability;
        self
    }

    /// Builder-style setter for the dirt probability.
    pub fn with_dirt_probability(mut self, probability: f64) -> Self {
        self.dirt_probability = probability;
        self
    }

    /// Builder-style setter for the robot spawn cell.
    pub fn with_start(mut self, start: GridCoord) -> Self {
        self.start = start;
        self
    }

    /// Total number of cells (saturating; `validate` rejects overflow)
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Check dimensions, probabilities and the spawn cell.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        // Coordinates are i32 and storage is one Vec
        let too_large = self.width.checked_mul(self.height).is_none()
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION;
        if too_large {
            return Err(GridError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        check_probability("obstacle_probability", self.obstacle_probability)?;
        check_probability("dirt_probability", self.dirt_probability)?;

        let inside = self.start.x >= 0
            && self.start.y >= 0
            && (self.start.x as usize) < self.width
            && (self.start.y as usize) < self.height;
        if !inside {
            return Err(GridError::StartOutOfBounds(self.start));
        }
        Ok(())
    }
}

/// Largest width or height that still fits a `GridCoord` component
const MAX_DIMENSION: usize = i32::MAX as usize;

fn check_probability(name: &'static str, value: f64) -> Result<(), GridError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GridError::InvalidProbability { name, value })
    }
}
