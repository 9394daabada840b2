//! Spawn and goal placement on a carved maze.
//!
//! The maze is fully connected, so any cell is a legal spawn. Player and
//! adversary are drawn uniformly; the goal is always the far corner
//! `(width - 1, height - 1)`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::grid::{Coord, Grid};

/// Whether the goal cell may double as a spawn cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Goal may coincide with the player or adversary spawn
    #[default]
    Permissive,
    /// Player and adversary never spawn on the goal
    ExclusiveGoal,
}

/// The three points of interest of a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSet {
    pub player: Coord,
    pub adversary: Coord,
    pub goal: Coord,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("No cell left for the adversary in a {width}x{height} maze")]
    NoValidAdversarySpot { width: usize, height: usize },
    #[error("No cell left for the player in a {width}x{height} maze")]
    NoValidPlayerSpot { width: usize, height: usize },
}

/// Uniform random cell anywhere in the grid.
pub fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Coord {
    let x = rng.gen_range(0..grid.width());
    let y = rng.gen_range(0..grid.height());
    Coord::new(x, y)
}

/// Rejection-sample a cell not in `exclude`.
/// Returns `None` up front when every cell is excluded, so the loop always ends.
fn sample_excluding<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, exclude: &[Coord]) -> Option<Coord> {
    let mut blocked: Vec<Coord> = exclude
        .iter()
        .copied()
        .filter(|c| grid.contains(*c))
        .collect();
    blocked.sort_unstable();
    blocked.dedup();

    if blocked.len() >= grid.len() {
        return None;
    }

    let mut rejected = 0u32;
    loop {
        let candidate = random_cell(grid, rng);
        if !blocked.contains(&candidate) {
            if rejected > 0 {
                trace!(rejected, %candidate, "accepted after rejections");
            }
            return Some(candidate);
        }
        rejected += 1;
    }
}

/// Pick the player spawn: any cell, uniformly.
pub fn place_player<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Coord {
    let player = random_cell(grid, rng);
    info!(%player, "player placed at random cell");
    player
}

/// The goal is always the top-right corner.
pub fn place_goal(grid: &Grid) -> Coord {
    Coord::new(grid.width() - 1, grid.height() - 1)
}

/// Pick the adversary spawn: any cell other than `exclude`.
pub fn place_adversary<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
    exclude: Coord,
) -> Result<Coord, SpawnError> {
    let adversary = sample_excluding(grid, rng, &[exclude]).ok_or(
        SpawnError::NoValidAdversarySpot {
            width: grid.width(),
            height: grid.height(),
        },
    )?;
    info!(%adversary, "adversary placed at random cell");
    Ok(adversary)
}

/// Place player, adversary and goal under `policy`.
pub fn place_spawns<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
    policy: SpawnPolicy,
) -> Result<SpawnSet, SpawnError> {
    let goal = place_goal(grid);

    let (player, adversary) = match policy {
        SpawnPolicy::Permissive => {
            let player = place_player(grid, rng);
            (player, place_adversary(grid, rng, player)?)
        }
        SpawnPolicy::ExclusiveGoal => {
            let player = sample_excluding(grid, rng, &[goal]).ok_or(
                SpawnError::NoValidPlayerSpot {
                    width: grid.width(),
                    height: grid.height(),
                },
            )?;
            info!(%player, "player placed at random cell");
            let adversary = sample_excluding(grid, rng, &[player, goal]).ok_or(
                SpawnError::NoValidAdversarySpot {
                    width: grid.width(),
                    height: grid.height(),
                },
            )?;
            info!(%adversary, "adversary placed at random cell");
            (player, adversary)
        }
    };

    info!(%goal, "goal placed");
    Ok(SpawnSet {
        player,
        adversary,
        goal,
    })
}
