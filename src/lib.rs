//! Perfect maze generation and solving.
//!
//! A [`Generator`] carves a maze with one of the [`Algorithm`]s, drawing every
//! random decision from an explicitly seeded RNG, and [`find_path`] computes
//! the shortest route between the maze's start and goal.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod seed;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{Algorithm, Generator};
pub use maze::{Maze, Position};
pub use render::Format;
pub use seed::Seed;
pub use solvers::find_path;
