use rand::{Rng, seq::SliceRandom};

use crate::maze::{Direction, Maze, Position};

/// One level of the backtracking search: a carved cell and the directions
/// still to try from it.
struct Frame {
    cell: Position,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(cell: Position, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Randomized depth-first carving (recursive backtracker).
///
/// Directions are shuffled once per cell, when the cell is entered, and tried
/// in that order; a cell is abandoned only after all four were tried. The
/// search keeps its own stack so that large mazes cannot overflow the call
/// stack.
pub fn randomized_dfs<R: Rng + ?Sized>(maze: &mut Maze, start: Position, rng: &mut R) {
    maze.carve(start);

    let mut stack = vec![Frame::new(start, rng)];
    let mut carved = 1usize;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.next];
        frame.next += 1;
        let cell = frame.cell;

        let Some(target) = cell.step(direction, 2) else {
            continue;
        };
        if maze.is_interior(target) && maze.is_wall(target) {
            maze.carve_passage(cell, target);
            carved += 1;
            stack.push(Frame::new(target, rng));
        }
    }

    tracing::trace!("[dfs] Carved {} cells", carved);
}
