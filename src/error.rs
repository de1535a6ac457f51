//! Error types for Marjana.
//!
//! Only construction and configuration can fail. Conditions that are
//! expected during a run (blocked moves, unreachable dirt, enclosed robot)
//! are reported through return values, see [`crate::agent::Decision`].

use thiserror::Error;

use crate::core::GridCoord;

/// Grid construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Probability `{name}` must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("Start cell {0} is outside the grid")]
    StartOutOfBounds(GridCoord),

    #[error("Grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("ASCII grid is empty")]
    EmptyLayout,

    #[error("ASCII grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown cell character {ch:?} at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },

    #[error("ASCII grid must contain exactly one robot marker, found {0}")]
    RobotCount(usize),
}

/// Rejected movement request. The world is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("Move target {0} is outside the grid")]
    OutOfBounds(GridCoord),

    #[error("Move target {0} is an obstacle")]
    Obstacle(GridCoord),
}

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] GridError),
}

/// Marjana error type
#[derive(Error, Debug)]
pub enum MarjanaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Unknown agent kind: {0}")]
    UnknownAgent(String),
}

pub type Result<T> = std::result::Result<T, MarjanaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::InvalidDimensions {
            width: 0,
            height: 3,
        };
        assert_eq!(
            err.to_string(),
            "Grid dimensions must be at least 1x1, got 0x3"
        );

        let err = InvalidMove::Obstacle(GridCoord::new(1, 1));
        assert_eq!(err.to_string(), "Move target (1,1) is an obstacle");
    }

    #[test]
    fn test_grid_error_converts() {
        let err: MarjanaError = GridError::EmptyLayout.into();
        assert!(matches!(err, MarjanaError::Grid(GridError::EmptyLayout)));
        assert!(err.to_string().starts_with("Grid error"));
    }
}
