//! Collaborator-facing data derived from a carved maze.
//!
//! Geometry builders consume these instead of walking the grid themselves:
//! each shared wall appears exactly once, and every coordinate has a fixed
//! world-space position on the XZ ground plane (Y up).

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::config::MazeConfig;
use crate::grid::{Coord, Direction, Grid};
use crate::spawn::SpawnSet;

/// Cell size and spawn height used to map coordinates into world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldScale {
    pub cell_size: f32,
    pub spawn_height: f32,
}

impl From<&MazeConfig> for WorldScale {
    fn from(config: &MazeConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            spawn_height: config.spawn_height,
        }
    }
}

impl Default for WorldScale {
    fn default() -> Self {
        Self::from(&MazeConfig::default())
    }
}

impl WorldScale {
    /// Center of `coord` at spawn height
    pub fn world_position(&self, coord: Coord) -> [f32; 3] {
        [
            coord.x as f32 * self.cell_size,
            self.spawn_height,
            coord.y as f32 * self.cell_size,
        ]
    }
}

/// Which horizontal axis a wall runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallAxis {
    /// North/south walls
    AlongX,
    /// East/west walls
    AlongZ,
}

/// One standing wall, attributed to a single owning cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub cell: Coord,
    pub side: Direction,
    pub axis: WallAxis,
    /// Ground-level center of the segment
    pub center: [f32; 2],
}

/// Every standing wall exactly once.
///
/// Interior walls are owned by the cell to their south or west, i.e. each
/// cell contributes its north and east walls; the bottom row adds its south
/// walls and the left column its west walls.
pub fn wall_segments(grid: &Grid, scale: &WorldScale) -> Vec<WallSegment> {
    let half = scale.cell_size / 2.0;
    let mut segments = Vec::new();

    for (coord, cell) in grid.cells() {
        let mut sides = vec![Direction::North, Direction::East];
        if coord.y == 0 {
            sides.push(Direction::South);
        }
        if coord.x == 0 {
            sides.push(Direction::West);
        }

        let cx = coord.x as f32 * scale.cell_size;
        let cz = coord.y as f32 * scale.cell_size;

        for side in sides.into_iter().filter(|s| cell.walls.get(*s)) {
            let (center, axis) = match side {
                Direction::North => ([cx, cz + half], WallAxis::AlongX),
                Direction::South => ([cx, cz - half], WallAxis::AlongX),
                Direction::East => ([cx + half, cz], WallAxis::AlongZ),
                Direction::West => ([cx - half, cz], WallAxis::AlongZ),
            };
            segments.push(WallSegment {
                cell: coord,
                side,
                axis,
                center,
            });
        }
    }

    segments
}

/// World-space positions of the spawn set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPositions {
    pub player: [f32; 3],
    pub adversary: [f32; 3],
    pub goal: [f32; 3],
}

pub fn spawn_positions(spawns: &SpawnSet, scale: &WorldScale) -> SpawnPositions {
    SpawnPositions {
        player: scale.world_position(spawns.player),
        adversary: scale.world_position(spawns.adversary),
        goal: scale.world_position(spawns.goal),
    }
}

/// Undirected graph of open passages, one node per cell.
///
/// Node weights are the cell coordinates; node index is `y * width + x`.
pub fn passage_graph(grid: &Grid) -> UnGraph<Coord, ()> {
    let mut graph = UnGraph::with_capacity(grid.len(), grid.len().saturating_sub(1));
    for (coord, _) in grid.cells() {
        graph.add_node(coord);
    }

    let index = |c: Coord| NodeIndex::new(c.y * grid.width() + c.x);
    for (coord, cell) in grid.cells() {
        for dir in [Direction::North, Direction::East] {
            if cell.walls.get(dir) {
                continue;
            }
            if let Some(next) = grid.neighbor(coord, dir) {
                graph.add_edge(index(coord), index(next), ());
            }
        }
    }

    graph
}
