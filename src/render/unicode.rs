use super::{Markers, render_text};
use crate::maze::{Maze, Position};

const MARKERS: Markers = Markers {
    start: '◉',
    goal: '◎',
    solution: '•',
};

/// Wall glyphs indexed by `up * 8 + down * 4 + left * 2 + right`, where each
/// flag says whether the neighbor on that side is also a wall.
const BOX_CHARS: [char; 16] = [
    '▪', '╶', '╴', '─', '╷', '┌', '┐', '┬', '╵', '└', '┘', '┴', '│', '├', '┤', '┼',
];

/// Text output that joins walls with box-drawing characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeRenderer {
    pub color: bool,
}

impl UnicodeRenderer {
    pub fn render(&self, maze: &Maze) -> String {
        render_text(maze, &MARKERS, self.color, |pos| box_char(maze, pos))
    }
}

fn box_char(maze: &Maze, pos: Position) -> char {
    let Position { row, col } = pos;
    let up = row > 0 && maze.is_wall(Position::new(row - 1, col));
    let down = row + 1 < maze.height() && maze.is_wall(Position::new(row + 1, col));
    let left = col > 0 && maze.is_wall(Position::new(row, col - 1));
    let right = col + 1 < maze.width() && maze.is_wall(Position::new(row, col + 1));

    let index = (up as usize) << 3 | (down as usize) << 2 | (left as usize) << 1 | right as usize;
    BOX_CHARS[index]
}
