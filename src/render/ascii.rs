use super::{Markers, render_text};
use crate::maze::Maze;

const MARKERS: Markers = Markers {
    start: '●',
    goal: '○',
    solution: '·',
};

/// Plain text output: `#` for walls, space for passages.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiRenderer {
    pub color: bool,
}

impl AsciiRenderer {
    pub fn render(&self, maze: &Maze) -> String {
        render_text(maze, &MARKERS, self.color, |_| '#')
    }
}
