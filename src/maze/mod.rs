mod grid;
mod position;

use std::fmt;

pub use grid::Grid;
pub use position::{Direction, Position};

use crate::error::{MazeError, Result};
use crate::render::AsciiRenderer;
use crate::solvers::find_path;

/// A rectangular maze where `true` marks a wall and `false` a carved passage.
///
/// Cells live at odd `(row, col)` positions; the wall separating two cells that
/// are two steps apart sits exactly midway between them. Boundary rows and
/// columns are never carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<bool>,
    start: Position,
    goal: Position,
    solution_path: Vec<Position>,
}

impl Maze {
    /// Creates an all-wall maze with the start at `(1, 1)` and the goal at
    /// `(height - 2, width - 2)`.
    ///
    /// Generation expects both dimensions to be odd and at least 5; callers are
    /// expected to validate them (see [`crate::config::MazeConfig::validate`]).
    ///
    /// # Panics
    /// If `width` or `height` is smaller than 3.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 3 && height >= 3,
            "maze dimensions must be at least 3x3, got {width}x{height}"
        );
        Maze {
            grid: Grid::new(width, height, true),
            start: Position::new(1, 1),
            goal: Position::new(height - 2, width - 2),
            solution_path: Vec::new(),
        }
    }

    /// Builds a maze from an explicit wall matrix, one inner `Vec` per row.
    pub fn from_rows(rows: Vec<Vec<bool>>, start: Position, goal: Position) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::InvalidGrid {
                reason: "grid has no cells".to_string(),
            });
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(MazeError::InvalidGrid {
                reason: format!(
                    "row {bad} has {} columns, expected {width}",
                    rows[bad].len()
                ),
            });
        }

        let mut grid = Grid::new(width, height, true);
        for (r, row) in rows.iter().enumerate() {
            for (c, &wall) in row.iter().enumerate() {
                grid.set(Position::new(r, c), wall);
            }
        }
        for (name, pos) in [("start", start), ("goal", goal)] {
            if !grid.in_bounds(pos) {
                return Err(MazeError::InvalidGrid {
                    reason: format!("{name} {pos} lies outside the {width}x{height} grid"),
                });
            }
        }

        Ok(Maze {
            grid,
            start,
            goal,
            solution_path: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The most recently computed solution, empty if the maze was never solved
    /// or the last solve found no path.
    pub fn solution_path(&self) -> &[Position] {
        &self.solution_path
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    #[cfg(test)]
    /// Direct grid access for tests that need to block passages after generation.
    pub(crate) fn grid_mut(&mut self) -> &mut Grid<bool> {
        &mut self.grid
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.grid[pos]
    }

    /// Checks whether `pos` lies strictly inside the boundary walls.
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row > 0
            && pos.col > 0
            && pos.row < self.height() - 1
            && pos.col < self.width() - 1
    }

    /// All cell positions (odd row and odd column) inside the boundary, in
    /// row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width(), self.height());
        (1..height - 1)
            .step_by(2)
            .flat_map(move |row| (1..width - 1).step_by(2).map(move |col| Position::new(row, col)))
    }

    /// Cells two steps away from `pos` that are strictly interior, in
    /// up, right, down, left order.
    pub fn cell_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir, 2))
            .filter(|&next| self.is_interior(next))
    }

    /// Passages one step away from `pos`, in up, right, down, left order.
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir, 1))
            .filter(|&next| self.grid.in_bounds(next) && !self.grid[next])
    }

    /// Turns `pos` into a passage.
    pub(crate) fn carve(&mut self, pos: Position) {
        debug_assert!(
            !self.grid.is_boundary(pos),
            "attempted to carve boundary position {pos}"
        );
        self.grid.set(pos, false);
    }

    /// Opens the wall between two cells that are two steps apart and carves
    /// `to`.
    pub(crate) fn carve_passage(&mut self, from: Position, to: Position) {
        debug_assert_eq!(
            from.manhattan_distance(to),
            2,
            "cells {from} and {to} are not adjacent"
        );
        self.carve(from.midpoint(to));
        self.carve(to);
    }

    pub(crate) fn set_solution_path(&mut self, path: Vec<Position>) {
        self.solution_path = path;
    }

    /// Finds the shortest path from start to goal and stores it as the
    /// solution, replacing any previous one.
    pub fn solve(&mut self) -> Option<&[Position]> {
        match find_path(self) {
            Some(path) => {
                self.solution_path = path;
                Some(&self.solution_path)
            }
            None => {
                self.solution_path.clear();
                None
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AsciiRenderer::default().render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_all_walls() {
        let maze = Maze::new(7, 5);
        assert_eq!(maze.width(), 7);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.start(), Position::new(1, 1));
        assert_eq!(maze.goal(), Position::new(3, 5));
        assert!(maze.grid().rows().flatten().all(|&wall| wall));
        assert!(maze.solution_path().is_empty());
    }

    #[test]
    fn test_cells() {
        let maze = Maze::new(7, 5);
        let cells = maze.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 1),
                Position::new(1, 3),
                Position::new(1, 5),
                Position::new(3, 1),
                Position::new(3, 3),
                Position::new(3, 5),
            ]
        );
    }

    #[test]
    fn test_cell_neighbors() {
        let maze = Maze::new(7, 7);
        let neighbors = maze.cell_neighbors(Position::new(3, 3)).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                Position::new(1, 3),
                Position::new(3, 5),
                Position::new(5, 3),
                Position::new(3, 1),
            ]
        );
        // Corner cell only has two neighbors
        let neighbors = maze.cell_neighbors(Position::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![Position::new(1, 3), Position::new(3, 1)]);
    }

    #[test]
    fn test_carve_passage() {
        let mut maze = Maze::new(5, 5);
        maze.carve(Position::new(1, 1));
        maze.carve_passage(Position::new(1, 1), Position::new(1, 3));
        assert!(!maze.is_wall(Position::new(1, 2)));
        assert!(!maze.is_wall(Position::new(1, 3)));
        let open = maze.open_neighbors(Position::new(1, 2)).collect::<Vec<_>>();
        assert_eq!(open, vec![Position::new(1, 3), Position::new(1, 1)]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_grid() {
        let rows = vec![vec![true, true, true], vec![true, false]];
        let err = Maze::from_rows(rows, Position::new(1, 1), Position::new(1, 1)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidGrid { .. }));
    }

    #[test]
    fn test_from_rows_rejects_out_of_bounds_goal() {
        let rows = vec![vec![true; 3]; 3];
        let err = Maze::from_rows(rows, Position::new(1, 1), Position::new(3, 1)).unwrap_err();
        assert!(err.to_string().contains("goal"));
    }

    #[test]
    #[should_panic(expected = "at least 3x3")]
    fn test_new_rejects_tiny_dimensions() {
        Maze::new(2, 5);
    }
}
