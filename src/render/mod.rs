//! Text and JSON output for finished mazes. Renderers only read the maze.

use std::collections::HashSet;
use std::fmt::Write;
use std::str::FromStr;

use crossterm::style::{Color, Stylize};

mod ascii;
mod json;
mod unicode;

pub use ascii::AsciiRenderer;
pub use json::{JsonRenderer, MazeDocument};
pub use unicode::UnicodeRenderer;

use crate::{
    error::{MazeError, Result},
    maze::{Maze, Position},
};

/// Output formats accepted on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Ascii,
    Unicode,
    Json,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Ascii, Format::Unicode, Format::Json];
    pub const SUPPORTED: [&'static str; 3] = ["ascii", "unicode", "json"];

    pub fn name(self) -> &'static str {
        match self {
            Format::Ascii => "ascii",
            Format::Unicode => "unicode",
            Format::Json => "json",
        }
    }

    /// Renders `maze` in this format. `color` adds ANSI colors to the start,
    /// goal and solution markers of the text formats.
    pub fn render(self, maze: &Maze, color: bool) -> Result<String> {
        match self {
            Format::Ascii => Ok(AsciiRenderer { color }.render(maze)),
            Format::Unicode => Ok(UnicodeRenderer { color }.render(maze)),
            Format::Json => JsonRenderer.render(maze),
        }
    }
}

impl FromStr for Format {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| MazeError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

/// Glyphs a text renderer draws over passages.
struct Markers {
    start: char,
    goal: char,
    solution: char,
}

/// Lays out one character per grid position, one line per row.
/// Start and goal take precedence over the solution path; walls are drawn
/// with `wall_glyph`.
fn render_text(
    maze: &Maze,
    markers: &Markers,
    color: bool,
    wall_glyph: impl Fn(Position) -> char,
) -> String {
    let solution = maze.solution_path().iter().copied().collect::<HashSet<_>>();
    let mut out = String::with_capacity((maze.width() + 1) * maze.height() * 3);

    for row in 0..maze.height() {
        #[cfg(debug_assertions)]
        let mut row_width = 0;

        for col in 0..maze.width() {
            let pos = Position::new(row, col);
            let (symbol, marker_color) = if pos == maze.start() {
                (markers.start, Some(Color::Green))
            } else if pos == maze.goal() {
                (markers.goal, Some(Color::Red))
            } else if solution.contains(&pos) {
                (markers.solution, Some(Color::Yellow))
            } else if maze.is_wall(pos) {
                (wall_glyph(pos), None)
            } else {
                (' ', None)
            };

            #[cfg(debug_assertions)]
            {
                use unicode_width::UnicodeWidthChar;
                row_width += symbol.width().unwrap_or(0);
            }

            match marker_color {
                Some(c) if color => {
                    // Writing to a String cannot fail
                    let _ = write!(out, "{}", symbol.with(c));
                }
                _ => out.push(symbol),
            }
        }

        #[cfg(debug_assertions)]
        assert_eq!(
            row_width,
            maze.width(),
            "Each grid position must occupy exactly one column."
        );

        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Algorithm, Generator};
    use crate::seed::Seed;

    #[test]
    fn test_format_from_str() {
        assert_eq!("ascii".parse::<Format>().unwrap(), Format::Ascii);
        assert_eq!("unicode".parse::<Format>().unwrap(), Format::Unicode);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    }

    #[test]
    fn test_unknown_format() {
        let err = "xml".parse::<Format>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported format 'xml' (supported: ascii, unicode, json)"
        );
    }

    #[test]
    fn test_text_formats_have_one_line_per_row() {
        let mut maze = Generator::new(Algorithm::Wilson, Seed::Fixed(8)).generate(13, 9);
        maze.solve();
        for format in [Format::Ascii, Format::Unicode] {
            let out = format.render(&maze, false).unwrap();
            let lines = out.lines().collect::<Vec<_>>();
            assert_eq!(lines.len(), 9);
            assert!(lines.iter().all(|line| line.chars().count() == 13));
            assert!(out.ends_with('\n'));
        }
    }

    #[test]
    fn test_color_only_touches_markers() {
        let mut maze = Generator::new(Algorithm::Dfs, Seed::Fixed(2)).generate(9, 9);
        maze.solve();
        let plain = Format::Ascii.render(&maze, false).unwrap();
        let colored = Format::Ascii.render(&maze, true).unwrap();
        assert!(!plain.contains('\x1b'));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(colored.contains('\x1b'));
        }
        // Wall rows carry no markers and stay identical
        assert_eq!(plain.lines().next(), colored.lines().next());
    }

    #[test]
    fn test_rendering_leaves_maze_untouched() {
        let mut maze = Generator::new(Algorithm::Kruskal, Seed::Fixed(4)).generate(11, 11);
        maze.solve();
        let before = maze.clone();
        for format in Format::ALL {
            format.render(&maze, true).unwrap();
        }
        assert_eq!(maze, before);
    }
}
