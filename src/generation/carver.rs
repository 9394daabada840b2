//! Randomized recursive-backtracking maze carver.
//!
//! Turns a fully walled grid into a perfect maze (a spanning tree over the
//! cells). The depth-first walk keeps its frontier on an explicit stack, so
//! grid size is bounded by memory rather than by the call stack.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::grid::{Coord, Grid, GridError};

/// Conventional entry cell of the walk
pub const DEFAULT_ENTRY: Coord = Coord::new(0, 0);

/// Bookkeeping collected while carving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarveStats {
    /// Wall pairs cleared; `width * height - 1` for a finished maze
    pub walls_removed: usize,
    pub cells_visited: usize,
    /// Deepest the frontier stack grew
    pub max_stack_depth: usize,
}

/// Carve `grid` in place starting from the (0, 0) corner.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<CarveStats, GridError> {
    carve_from(grid, DEFAULT_ENTRY, rng)
}

/// Carve `grid` in place starting from `entry`.
///
/// Expects a freshly created grid: cells already marked visited are treated
/// as carved and never entered again.
pub fn carve_from<R: Rng + ?Sized>(
    grid: &mut Grid,
    entry: Coord,
    rng: &mut R,
) -> Result<CarveStats, GridError> {
    let mut stats = CarveStats::default();

    grid.mark_visited(entry)?;
    stats.cells_visited = 1;

    let mut stack = vec![entry];
    stats.max_stack_depth = 1;

    while let Some(&current) = stack.last() {
        let candidates = grid.unvisited_neighbors(current);
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let next = candidates[rng.gen_range(0..candidates.len())];
        grid.remove_wall_between(current, next)?;
        grid.mark_visited(next)?;
        stats.walls_removed += 1;
        stats.cells_visited += 1;

        stack.push(next);
        stats.max_stack_depth = stats.max_stack_depth.max(stack.len());
    }

    debug!(
        max_stack_depth = stats.max_stack_depth,
        "frontier stack drained"
    );
    info!(
        width = grid.width(),
        height = grid.height(),
        walls_removed = stats.walls_removed,
        "maze carved"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{MazeSeed, Phase};
    use crate::grid::Direction;

    fn carved(width: usize, height: usize, seed: u64) -> (Grid, CarveStats) {
        let mut grid = Grid::new(width, height).unwrap();
        let mut rng = MazeSeed::new(seed).rng(Phase::Carve);
        let stats = carve(&mut grid, &mut rng).unwrap();
        (grid, stats)
    }

    #[test]
    fn test_spanning_tree_edge_count() {
        for (w, h) in [(1, 1), (2, 1), (1, 7), (5, 5), (10, 10), (13, 4)] {
            let (grid, stats) = carved(w, h, 42);
            assert_eq!(stats.walls_removed, w * h - 1, "{w}x{h}");
            assert_eq!(grid.passage_count(), w * h - 1, "{w}x{h}");
            assert_eq!(stats.cells_visited, w * h);
            assert!(grid.all_visited());
            assert!(grid.walls_consistent());
        }
    }

    #[test]
    fn test_single_cell() {
        let (grid, stats) = carved(1, 1, 1);
        assert_eq!(stats.walls_removed, 0);
        assert_eq!(stats.max_stack_depth, 1);
        let (_, cell) = grid.cells().next().unwrap();
        assert_eq!(cell.walls.count(), 4);
    }

    #[test]
    fn test_two_by_one() {
        let (grid, stats) = carved(2, 1, 9);
        assert_eq!(stats.walls_removed, 1);

        let left = Coord::new(0, 0);
        let right = Coord::new(1, 0);
        assert!(!grid.has_wall(left, Direction::East));
        assert!(!grid.has_wall(right, Direction::West));
        for c in [left, right] {
            assert!(grid.has_wall(c, Direction::North));
            assert!(grid.has_wall(c, Direction::South));
        }
        assert!(grid.has_wall(left, Direction::West));
        assert!(grid.has_wall(right, Direction::East));
    }

    #[test]
    fn test_corridor_depth() {
        // A 1xN strip has one possible maze, walked in a single descent
        let (_, stats) = carved(1, 50, 3);
        assert_eq!(stats.max_stack_depth, 50);
    }

    #[test]
    fn test_same_seed_same_walls() {
        let (a, _) = carved(12, 9, 777);
        let (b, _) = carved(12, 9, 777);
        assert_eq!(a, b, "Same seed must produce same maze");
    }

    #[test]
    fn test_different_seeds_differ() {
        let (a, _) = carved(20, 20, 1);
        let (b, _) = carved(20, 20, 2);
        // Very unlikely to be identical
        assert_ne!(a, b);
    }

    #[test]
    fn test_custom_entry() {
        let mut grid = Grid::new(6, 6).unwrap();
        let mut rng = MazeSeed::new(5).rng(Phase::Carve);
        let stats = carve_from(&mut grid, Coord::new(3, 2), &mut rng).unwrap();
        assert_eq!(stats.walls_removed, 35);
        assert!(grid.all_visited());
    }

    #[test]
    fn test_entry_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut rng = MazeSeed::new(5).rng(Phase::Carve);
        let err = carve_from(&mut grid, Coord::new(3, 0), &mut rng).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn test_large_grid_no_stack_overflow() {
        let (grid, stats) = carved(300, 300, 11);
        assert_eq!(stats.walls_removed, 300 * 300 - 1);
        assert!(grid.all_visited());
    }
}
