//! Grid world: cell storage, robot position and world generation.
//!
//! ```rust
//! use marjana::core::Direction;
//! use marjana::grid::GridWorld;
//!
//! let mut world = GridWorld::from_ascii("R*").unwrap();
//! assert!(world.move_robot(Direction::Right));
//! assert!(world.clean_current());
//! assert!(world.is_goal_state());
//! ```

mod config;
mod world;

pub use config::GridConfig;
pub use world::GridWorld;
