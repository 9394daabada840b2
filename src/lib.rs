//! Maze Spawn Core Library
//!
//! Deterministic maze generation for a chase-to-the-exit game:
//! - Grid model with mirrored wall state
//! - Perfect-maze carving (randomized backtracking, explicit frontier stack)
//! - Spawn placement for player, adversary and goal
//! - Collaborator exports (wall segments, world positions, passage graph)
//! - Text rendering for debugging

pub mod config;
pub mod constants;
pub mod generation;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod maze;
pub mod spawn;
pub mod visualization;

// Re-export commonly used types
pub use config::MazeConfig;
pub use generation::{MazeRng, MazeSeed, Phase};
pub use grid::{Coord, Direction, Grid, GridError};
pub use maze::{Maze, MazeError, MazeView};
pub use spawn::{SpawnError, SpawnPolicy, SpawnSet};
