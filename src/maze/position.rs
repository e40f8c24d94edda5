use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, col)` coordinate in the maze grid.
///
/// Serialized as `{"Row": r, "Col": c}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Moves `stride` steps in `direction`.
    /// Returns `None` when the move would leave the non-negative quadrant; the
    /// caller is responsible for the upper bounds.
    pub fn step(self, direction: Direction, stride: usize) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let stride = stride as isize;
        Some(Position {
            row: self.row.checked_add_signed(dr * stride)?,
            col: self.col.checked_add_signed(dc * stride)?,
        })
    }

    /// The position halfway between two cells, i.e. the wall separating them
    /// when they are two steps apart.
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    pub fn manhattan_distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

/// Cardinal directions in the order every algorithm enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, col)` unit offset.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}
