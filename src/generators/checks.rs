//! Structural assertions shared by the generator tests.

use std::collections::HashSet;

use crate::maze::{Maze, Position};

pub fn assert_boundary_intact(maze: &Maze) {
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let pos = Position::new(row, col);
            if maze.grid().is_boundary(pos) {
                assert!(maze.is_wall(pos), "boundary position {pos} was carved");
            }
        }
    }
}

/// Number of cells (odd, odd) that are passages.
pub fn opened_cells(maze: &Maze) -> usize {
    maze.cells().filter(|&pos| !maze.is_wall(pos)).count()
}

/// Number of passages sitting between two cells (exactly one odd coordinate).
pub fn opened_walls(maze: &Maze) -> usize {
    (1..maze.height() - 1)
        .flat_map(|row| (1..maze.width() - 1).map(move |col| Position::new(row, col)))
        .filter(|pos| (pos.row % 2 == 1) != (pos.col % 2 == 1))
        .filter(|&pos| !maze.is_wall(pos))
        .count()
}

/// Every passage reachable from the start via 4-neighbor steps.
pub fn reachable_from_start(maze: &Maze) -> HashSet<Position> {
    let mut visited = HashSet::new();
    if maze.is_wall(maze.start()) {
        return visited;
    }
    let mut stack = vec![maze.start()];
    visited.insert(maze.start());
    while let Some(pos) = stack.pop() {
        for next in maze.open_neighbors(pos) {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }
    visited
}

/// Asserts the passages form a single tree spanning every cell of the maze.
pub fn assert_perfect_maze(maze: &Maze) {
    assert_boundary_intact(maze);

    // Wall junctions (even, even) are never carved
    for row in (2..maze.height() - 1).step_by(2) {
        for col in (2..maze.width() - 1).step_by(2) {
            assert!(maze.is_wall(Position::new(row, col)));
        }
    }

    let cells = opened_cells(maze);
    let total_cells = maze.cells().count();
    assert_eq!(cells, total_cells, "not every cell was carved");
    assert_eq!(
        opened_walls(maze) + 1,
        cells,
        "opened cells and connections do not form a tree"
    );

    let reachable = reachable_from_start(maze);
    let passages = maze.grid().rows().flatten().filter(|&&wall| !wall).count();
    assert_eq!(reachable.len(), passages, "maze is not fully connected");
}
