//! Text rendering of a carved maze.
//!
//! North is drawn at the top. Each cell is three characters wide with the
//! spawn marker in the middle.

use crate::grid::{Coord, Direction, Grid};
use crate::spawn::SpawnSet;

const CORNER: char = '+';
const H_WALL: &str = "---";
const H_OPEN: &str = "   ";
const V_WALL: char = '|';
const V_OPEN: char = ' ';

fn marker(coord: Coord, spawns: Option<&SpawnSet>) -> char {
    let Some(s) = spawns else {
        return ' ';
    };
    let hits = [
        (s.player, 'P'),
        (s.adversary, 'A'),
        (s.goal, 'G'),
    ];
    let mut found = hits.iter().filter(|(c, _)| *c == coord).map(|(_, m)| *m);
    match (found.next(), found.next()) {
        (Some(_), Some(_)) => '*',
        (Some(m), None) => m,
        _ => ' ',
    }
}

fn horizontal_line(grid: &Grid, y: usize, side: Direction) -> String {
    let mut line = String::with_capacity(grid.width() * 4 + 1);
    for x in 0..grid.width() {
        line.push(CORNER);
        line.push_str(if grid.has_wall(Coord::new(x, y), side) {
            H_WALL
        } else {
            H_OPEN
        });
    }
    line.push(CORNER);
    line
}

/// Render `grid`, optionally marking player (P), adversary (A) and goal (G).
/// Cells holding more than one marker show `*`.
pub fn render_ascii(grid: &Grid, spawns: Option<&SpawnSet>) -> String {
    let top = grid.height() - 1;
    let mut lines = vec![horizontal_line(grid, top, Direction::North)];

    for y in (0..grid.height()).rev() {
        let mut row = String::with_capacity(grid.width() * 4 + 1);
        row.push(if grid.has_wall(Coord::new(0, y), Direction::West) {
            V_WALL
        } else {
            V_OPEN
        });
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            row.push(' ');
            row.push(marker(coord, spawns));
            row.push(' ');
            row.push(if grid.has_wall(coord, Direction::East) {
                V_WALL
            } else {
                V_OPEN
            });
        }
        lines.push(row);
        lines.push(horizontal_line(grid, y, Direction::South));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_walled_cell() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(render_ascii(&grid, None), "+---+\n|   |\n+---+");
    }

    #[test]
    fn test_render_open_pair_with_markers() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(1, 0)).unwrap();
        let spawns = SpawnSet {
            player: Coord::new(0, 0),
            adversary: Coord::new(1, 0),
            goal: Coord::new(1, 0),
        };
        assert_eq!(
            render_ascii(&grid, Some(&spawns)),
            "+---+---+\n| P   * |\n+---+---+"
        );
    }

    #[test]
    fn test_render_north_on_top() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        let spawns = SpawnSet {
            player: Coord::new(0, 0),
            adversary: Coord::new(0, 1),
            goal: Coord::new(0, 1),
        };
        let text = render_ascii(&grid, Some(&spawns));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["+---+", "| * |", "+   +", "| P |", "+---+"]);
    }
}
