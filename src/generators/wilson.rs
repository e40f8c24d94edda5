use std::collections::HashMap;

use rand::Rng;

use crate::maze::{Grid, Maze, Position};

/// Path of a single loop-erased random walk.
///
/// `index` maps every cell on `path` to its position in it, so revisits are
/// detected in constant time. A fresh walk is built for every starting cell and
/// dropped once it has been spliced into the maze.
#[derive(Default)]
struct LoopErasedWalk {
    path: Vec<Position>,
    index: HashMap<Position, usize>,
}

impl LoopErasedWalk {
    /// Appends `cell`, first erasing the loop closed by revisiting it.
    fn visit(&mut self, cell: Position) {
        if let Some(&first) = self.index.get(&cell) {
            self.path.truncate(first);
            self.index.clear();
            self.index
                .extend(self.path.iter().enumerate().map(|(i, &pos)| (pos, i)));
        }
        self.index.insert(cell, self.path.len());
        self.path.push(cell);
    }

    /// Walks randomly from `from` until it reaches a cell already in the maze.
    /// The returned path starts at `from`, ends on that maze cell and contains
    /// no cell twice.
    fn run<R: Rng + ?Sized>(
        mut self,
        maze: &Maze,
        in_maze: &Grid<bool>,
        from: Position,
        rng: &mut R,
    ) -> Vec<Position> {
        let mut current = from;
        while !in_maze[current] {
            self.visit(current);
            current = random_step(maze, current, rng);
        }
        self.path.push(current);
        self.path
    }
}

/// Picks one of the interior cells two steps away from `cell` uniformly.
///
/// # Panics
/// If `cell` has no interior neighbor at all. Odd dimensions of at least 5
/// always give every cell one, so this only fires on a degenerate maze.
fn random_step<R: Rng + ?Sized>(maze: &Maze, cell: Position, rng: &mut R) -> Position {
    let mut choices = [cell; 4];
    let mut count = 0;
    for next in maze.cell_neighbors(cell) {
        choices[count] = next;
        count += 1;
    }
    assert!(
        count > 0,
        "random walk is stuck: cell {cell} has no cell to step to in a {}x{} maze",
        maze.width(),
        maze.height()
    );
    choices[rng.random_range(0..count)]
}

/// Wilson's algorithm: grows the maze with loop-erased random walks, which
/// yields every spanning tree with equal probability.
pub fn wilson<R: Rng + ?Sized>(maze: &mut Maze, start: Position, rng: &mut R) {
    let mut in_maze = Grid::new(maze.width(), maze.height(), false);
    maze.carve(start);
    in_maze.set(start, true);

    let mut remaining = maze.cells().filter(|&cell| cell != start).collect::<Vec<_>>();
    let mut walks = 0usize;

    while !remaining.is_empty() {
        let idx = rng.random_range(0..remaining.len());
        let cell = remaining[idx];

        // Joined the maze as part of an earlier walk
        if in_maze[cell] {
            remaining.remove(idx);
            continue;
        }

        let path = LoopErasedWalk::default().run(maze, &in_maze, cell, rng);
        walks += 1;
        tracing::trace!(
            "[wilson] Walk from {} joined the maze after {} cells",
            cell,
            path.len()
        );

        for &pos in &path {
            maze.carve(pos);
            in_maze.set(pos, true);
        }
        for pair in path.windows(2) {
            maze.carve(pair[0].midpoint(pair[1]));
        }

        remaining.retain(|&cell| !in_maze[cell]);
    }

    tracing::trace!("[wilson] Finished after {} walks", walks);
}
