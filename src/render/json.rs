use serde::{Deserialize, Serialize};

use crate::{
    error::{MazeError, Result},
    maze::{Maze, Position},
};

/// Serialized form of a maze. `solution_path` is omitted while empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeDocument {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<bool>>,
    pub start: Position,
    pub goal: Position,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solution_path: Vec<Position>,
}

impl From<&Maze> for MazeDocument {
    fn from(maze: &Maze) -> Self {
        MazeDocument {
            width: maze.width(),
            height: maze.height(),
            grid: maze.grid().rows().map(<[bool]>::to_vec).collect(),
            start: maze.start(),
            goal: maze.goal(),
            solution_path: maze.solution_path().to_vec(),
        }
    }
}

impl TryFrom<MazeDocument> for Maze {
    type Error = MazeError;

    fn try_from(doc: MazeDocument) -> Result<Self> {
        if doc.grid.len() != doc.height || doc.grid.iter().any(|row| row.len() != doc.width) {
            return Err(MazeError::InvalidGrid {
                reason: format!("grid does not match declared size {}x{}", doc.width, doc.height),
            });
        }
        let mut maze = Maze::from_rows(doc.grid, doc.start, doc.goal)?;
        maze.set_solution_path(doc.solution_path);
        Ok(maze)
    }
}

/// Pretty-printed JSON output.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn render(&self, maze: &Maze) -> Result<String> {
        Ok(serde_json::to_string_pretty(&MazeDocument::from(maze))?)
    }
}
