//! One-shot maze construction: create, carve, then place.
//!
//! The carved grid is only handed out by shared reference once carving has
//! finished, so consumers always see a complete, read-only maze.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ConfigError, MazeConfig};
use crate::generation::carver::{self, CarveStats};
use crate::generation::{MazeSeed, Phase};
use crate::grid::{Coord, Grid, GridError, Walls};
use crate::logging::TimingSpan;
use crate::spawn::{self, SpawnError, SpawnPolicy, SpawnSet};

#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A finished maze with its spawn points
#[derive(Debug, Clone)]
pub struct Maze {
    /// Present when generated from a seed; `None` for caller-supplied generators
    seed: Option<MazeSeed>,
    grid: Grid,
    spawns: SpawnSet,
    stats: CarveStats,
}

impl Maze {
    /// Generate a maze from `config`, drawing a seed if none is configured.
    pub fn generate(config: &MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        let seed = MazeSeed::from_option(config.seed);
        let _span = TimingSpan::new("maze_generate");

        let mut grid = Grid::new(config.width, config.height)?;
        let stats = carver::carve(&mut grid, &mut seed.rng(Phase::Carve))?;
        let spawns = spawn::place_spawns(&grid, &mut seed.rng(Phase::Spawn), config.spawn_policy)?;

        let maze = Self {
            seed: Some(seed),
            grid,
            spawns,
            stats,
        };
        maze.log_generated();
        Ok(maze)
    }

    /// Generate with a caller-supplied random source shared by both phases.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        policy: SpawnPolicy,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let _span = TimingSpan::new("maze_generate");

        let mut grid = Grid::new(width, height)?;
        let stats = carver::carve(&mut grid, rng)?;
        let spawns = spawn::place_spawns(&grid, rng, policy)?;

        let maze = Self {
            seed: None,
            grid,
            spawns,
            stats,
        };
        maze.log_generated();
        Ok(maze)
    }

    fn log_generated(&self) {
        info!(
            seed = ?self.seed.map(|s| s.seed),
            width = self.grid.width(),
            height = self.grid.height(),
            player = %self.spawns.player,
            adversary = %self.spawns.adversary,
            goal = %self.spawns.goal,
            "maze generated"
        );
    }

    pub fn seed(&self) -> Option<MazeSeed> {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawns(&self) -> &SpawnSet {
        &self.spawns
    }

    pub fn stats(&self) -> &CarveStats {
        &self.stats
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Snapshot for external consumers
    pub fn view(&self) -> MazeView {
        MazeView {
            width: self.grid.width(),
            height: self.grid.height(),
            seed: self.seed.map(|s| s.seed),
            cells: self
                .grid
                .cells()
                .map(|(coord, cell)| CellView {
                    coord,
                    walls: cell.walls,
                })
                .collect(),
            spawns: self.spawns,
        }
    }
}

/// Serializable read-only view: cell walls plus the three coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeView {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub cells: Vec<CellView>,
    pub spawns: SpawnSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub coord: Coord,
    pub walls: Walls,
}

impl MazeView {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
