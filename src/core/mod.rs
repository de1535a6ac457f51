//! Core value types shared by every subsystem:
//! - [`CellState`]: clean / dirty / obstacle
//! - [`GridCoord`]: integer cell coordinates
//! - [`Direction`] and [`Action`]: what the robot can do in one tick

mod action;
mod cell;
mod point;

pub use action::{Action, Direction};
pub use cell::CellState;
pub use point::GridCoord;
