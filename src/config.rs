use crate::{
    error::{MazeError, Result},
    generators::{Algorithm, Generator},
    render::Format,
    seed::Seed,
};

/// Smallest odd size that leaves room for more than one cell.
pub const MIN_SIZE: usize = 5;
/// Upper bound on either dimension, keeping generation time and output size
/// reasonable.
pub const MAX_SIZE: usize = 1001;

/// Checks one maze dimension: odd and within `MIN_SIZE..=MAX_SIZE`.
pub fn validate_size(size: usize) -> Result<()> {
    if size < MIN_SIZE {
        return Err(MazeError::SizeTooSmall {
            size,
            min: MIN_SIZE,
        });
    }
    if size % 2 == 0 {
        return Err(MazeError::SizeNotOdd { size });
    }
    if size > MAX_SIZE {
        return Err(MazeError::SizeTooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

/// Everything needed to produce one maze, resolved from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub algorithm: Algorithm,
    pub seed: Seed,
    pub format: Format,
    /// Solve the maze and draw the route
    pub solution: bool,
    /// Color the start, goal and route markers
    pub color: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            algorithm: Algorithm::default(),
            seed: Seed::Entropy,
            format: Format::default(),
            solution: false,
            color: false,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        validate_size(self.width)?;
        validate_size(self.height)
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.algorithm, self.seed)
    }

    /// Validates, generates, optionally solves, and renders the maze.
    /// The returned text always ends with a newline.
    pub fn run(&self) -> Result<String> {
        self.validate()?;

        let mut maze = self.generator().generate(self.width, self.height);
        if self.solution {
            match maze.solve() {
                Some(path) => tracing::debug!("[config] Solution has {} cells", path.len()),
                None => tracing::warn!("[config] Generated maze has no path from start to goal"),
            }
        }

        let mut output = self.format.render(&maze, self.color)?;
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert!(validate_size(5).is_ok());
        assert!(validate_size(21).is_ok());
        assert!(validate_size(MAX_SIZE).is_ok());
        assert_eq!(
            validate_size(3).unwrap_err().to_string(),
            "Size must be at least 5, got 3"
        );
        assert_eq!(
            validate_size(8).unwrap_err().to_string(),
            "Size must be odd, got 8"
        );
        assert_eq!(
            validate_size(1003).unwrap_err().to_string(),
            "Size must be at most 1001, got 1003"
        );
        // Too small wins over even
        assert!(matches!(
            validate_size(4),
            Err(MazeError::SizeTooSmall { size: 4, .. })
        ));
    }

    #[test]
    fn test_validate_checks_both_axes() {
        let config = MazeConfig {
            width: 9,
            height: 10,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MazeError::SizeNotOdd { size: 10 })
        ));
    }

    #[test]
    fn test_run_is_reproducible() {
        let config = MazeConfig {
            width: 9,
            height: 7,
            seed: Seed::parse("123"),
            solution: true,
            ..MazeConfig::default()
        };
        let first = config.run().unwrap();
        assert_eq!(first, config.run().unwrap());
        assert_eq!(first.lines().count(), 7);
        assert!(first.contains('●'));
        assert!(first.contains('○'));
        assert!(first.contains('·'));
    }

    #[test]
    fn test_run_without_solution_has_no_route() {
        let config = MazeConfig {
            width: 9,
            height: 9,
            seed: Seed::Fixed(123),
            ..MazeConfig::default()
        };
        assert!(!config.run().unwrap().contains('·'));
    }

    #[test]
    fn test_run_json_ends_with_newline() {
        let config = MazeConfig {
            seed: Seed::Fixed(1),
            format: Format::Json,
            algorithm: Algorithm::Wilson,
            ..MazeConfig::default()
        };
        let out = config.run().unwrap();
        assert!(out.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["width"], 21);
    }

    #[test]
    fn test_run_rejects_invalid_size() {
        let config = MazeConfig {
            width: 3,
            ..MazeConfig::default()
        };
        assert!(config.run().is_err());
    }
}
