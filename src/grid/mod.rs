//! Rectangular cell grid with mirrored wall state.
//!
//! A freshly created grid is fully walled and unvisited. Walls are only ever
//! removed in pairs: clearing one side of a shared wall clears the facing side
//! of the neighbouring cell in the same call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell coordinate. `x` grows east, `y` grows north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// The four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North, // y + 1
    East,  // x + 1
    South, // y - 1
    West,  // x - 1
}

impl Direction {
    /// Fixed inspection order used when collecting neighbours
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

/// Wall flags of a single cell. `true` means the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

impl Walls {
    pub const fn all() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }

    pub fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    fn clear(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.north = false,
            Direction::East => self.east = false,
            Direction::South => self.south = false,
            Direction::West => self.west = false,
        }
    }

    /// Number of walls still standing
    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|d| self.get(**d)).count()
    }
}

/// A single maze cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Generation-time marker, meaningless once carving has finished
    pub visited: bool,
    pub walls: Walls,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid dimensions: {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Cells {a} and {b} are not adjacent")]
    NonAdjacentCells { a: Coord, b: Coord },
    #[error("Coordinate {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
    #[error("Grid of {width}x{height} needs {expected} cells, got {found}")]
    CellCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
}

/// Fixed-size grid that exclusively owns its cells (row-major, `y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form; only becomes a `Grid` through `TryFrom`
#[derive(Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr {
            width,
            height,
            cells,
        } = repr;
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl Grid {
    /// Allocate a fully walled, unvisited grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions { width, height })?;

        tracing::debug!(width, height, "allocated fully walled grid");

        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.y * self.width + coord.x)
    }

    fn check(&self, coord: Coord) -> Result<usize, GridError> {
        self.index(coord).ok_or(GridError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Every cell with its coordinate, row by row starting at `y = 0`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i % width, i / width), cell))
    }

    /// Adjacent coordinate in `dir`, or `None` past the boundary.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        if !self.contains(coord) {
            return None;
        }
        let next = match dir {
            Direction::North => Coord::new(coord.x, coord.y.checked_add(1)?),
            Direction::East => Coord::new(coord.x.checked_add(1)?, coord.y),
            Direction::South => Coord::new(coord.x, coord.y.checked_sub(1)?),
            Direction::West => Coord::new(coord.x.checked_sub(1)?, coord.y),
        };
        self.contains(next).then_some(next)
    }

    /// Direction leading from `a` to `b` if they share a side.
    pub fn direction_between(&self, a: Coord, b: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.neighbor(a, *dir) == Some(b))
    }

    /// Whether the wall on side `dir` of `coord` is standing.
    /// Out-of-bounds coordinates report every wall as standing.
    pub fn has_wall(&self, coord: Coord, dir: Direction) -> bool {
        self.cell(coord).map_or(true, |c| c.walls.get(dir))
    }

    /// Clear the shared wall between two adjacent cells on both sides.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> Result<(), GridError> {
        let ia = self.check(a)?;
        let ib = self.check(b)?;
        let dir = self
            .direction_between(a, b)
            .ok_or(GridError::NonAdjacentCells { a, b })?;

        self.cells[ia].walls.clear(dir);
        self.cells[ib].walls.clear(dir.opposite());
        Ok(())
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.visited)
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) -> Result<(), GridError> {
        let i = self.check(coord)?;
        self.cells[i].visited = true;
        Ok(())
    }

    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(|c| c.visited)
    }

    /// Neighbours of `coord` not yet visited, in `Direction::ALL` order.
    pub fn unvisited_neighbors(&self, coord: Coord) -> Vec<Coord> {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.neighbor(coord, *dir))
            .filter(|n| !self.is_visited(*n))
            .collect()
    }

    /// Number of open passages between adjacent cells (each counted once).
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|(coord, cell)| {
                [Direction::North, Direction::East]
                    .into_iter()
                    .filter(|dir| !cell.walls.get(*dir) && self.neighbor(coord, *dir).is_some())
                    .count()
            })
            .sum()
    }

    /// Check that every shared wall reads the same from both sides and that
    /// no boundary wall has been opened.
    pub fn walls_consistent(&self) -> bool {
        self.cells().all(|(coord, cell)| {
            Direction::ALL.iter().all(|dir| match self.neighbor(coord, *dir) {
                Some(n) => self.has_wall(n, dir.opposite()) == cell.walls.get(*dir),
                None => cell.walls.get(*dir),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_fully_walled() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(grid
            .cells()
            .all(|(_, c)| !c.visited && c.walls == Walls::all()));
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.walls_consistent());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(matches!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_deserialize_revalidates() {
        let err = serde_json::from_str::<Grid>(r#"{"width":0,"height":5,"cells":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid dimensions"));

        let err = serde_json::from_str::<Grid>(r#"{"width":2,"height":2,"cells":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("needs 4 cells, got 0"));
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
        assert!(!restored.has_wall(Coord::new(0, 1), Direction::South));
    }

    #[test]
    fn test_neighbor_directions() {
        let grid = Grid::new(3, 3).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(grid.neighbor(c, Direction::North), Some(Coord::new(1, 2)));
        assert_eq!(grid.neighbor(c, Direction::South), Some(Coord::new(1, 0)));
        assert_eq!(grid.neighbor(c, Direction::East), Some(Coord::new(2, 1)));
        assert_eq!(grid.neighbor(c, Direction::West), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::South), None);
        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::West), None);
        assert_eq!(grid.neighbor(Coord::new(2, 2), Direction::North), None);
        assert_eq!(grid.neighbor(Coord::new(2, 2), Direction::East), None);
        assert_eq!(grid.neighbor(Coord::new(5, 5), Direction::West), None);
    }

    #[test]
    fn test_remove_wall_mirrors() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(1, 0)).unwrap();
        assert!(!grid.has_wall(Coord::new(0, 0), Direction::East));
        assert!(!grid.has_wall(Coord::new(1, 0), Direction::West));

        grid.remove_wall_between(Coord::new(1, 1), Coord::new(1, 0)).unwrap();
        assert!(!grid.has_wall(Coord::new(1, 1), Direction::South));
        assert!(!grid.has_wall(Coord::new(1, 0), Direction::North));

        assert_eq!(grid.passage_count(), 2);
        assert!(grid.walls_consistent());
    }

    #[test]
    fn test_remove_wall_non_adjacent() {
        let mut grid = Grid::new(3, 3).unwrap();
        let err = grid
            .remove_wall_between(Coord::new(0, 0), Coord::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, GridError::NonAdjacentCells { .. }));

        let err = grid
            .remove_wall_between(Coord::new(0, 0), Coord::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, GridError::NonAdjacentCells { .. }));
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn test_remove_wall_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = grid
            .remove_wall_between(Coord::new(1, 1), Coord::new(2, 1))
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn test_unvisited_neighbors() {
        let mut grid = Grid::new(3, 1).unwrap();
        assert_eq!(
            grid.unvisited_neighbors(Coord::new(1, 0)),
            vec![Coord::new(2, 0), Coord::new(0, 0)]
        );
        grid.mark_visited(Coord::new(2, 0)).unwrap();
        assert_eq!(
            grid.unvisited_neighbors(Coord::new(1, 0)),
            vec![Coord::new(0, 0)]
        );
    }

    #[test]
    fn test_direction_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }
}
