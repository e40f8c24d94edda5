use rand::Rng;
use std::str::FromStr;

mod dfs;
mod kruskal;
mod union_find;
mod wilson;

#[cfg(test)]
pub(crate) mod checks;

pub use dfs::randomized_dfs;
pub use kruskal::randomized_kruskal;
pub use union_find::UnionFind;
pub use wilson::wilson;

use crate::{
    error::{MazeError, Result},
    maze::{Maze, Position},
    seed::{MazeRng, Seed},
};

/// Spanning-tree algorithms available for carving a maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Dfs,
    Kruskal,
    Wilson,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Kruskal, Algorithm::Wilson];
    /// Names accepted by [`Algorithm::from_str`].
    pub const SUPPORTED: [&'static str; 3] = ["dfs", "kruskal", "wilson"];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Wilson => "wilson",
        }
    }

    /// Carves a perfect maze into `maze` starting from the cell at `start`.
    ///
    /// Every random decision is drawn from `rng`, so the result depends only on
    /// the RNG state, the maze dimensions and the algorithm.
    pub fn carve<R: Rng + ?Sized>(self, maze: &mut Maze, start: Position, rng: &mut R) {
        match self {
            Algorithm::Dfs => randomized_dfs(maze, start, rng),
            Algorithm::Kruskal => randomized_kruskal(maze, start, rng),
            Algorithm::Wilson => wilson(maze, start, rng),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Algorithm::Kruskal => write!(f, "Kruskal's Algorithm"),
            Algorithm::Wilson => write!(f, "Wilson's Algorithm"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Produces finished mazes from one algorithm and one random stream.
///
/// Successive calls to [`Generator::generate`] keep drawing from the same
/// stream, so a seeded generator yields the same sequence of mazes every run.
pub struct Generator<R = MazeRng> {
    algorithm: Algorithm,
    rng: R,
}

impl Generator<MazeRng> {
    pub fn new(algorithm: Algorithm, seed: Seed) -> Self {
        Generator::with_rng(algorithm, seed.rng())
    }

    /// Looks up the algorithm by name and parses the seed string.
    /// Fails without building anything if the algorithm is unknown.
    pub fn from_names(algorithm: &str, seed: &str) -> Result<Self> {
        let algorithm = algorithm.parse()?;
        Ok(Generator::new(algorithm, Seed::parse(seed)))
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(algorithm: Algorithm, rng: R) -> Self {
        Generator { algorithm, rng }
    }

    /// Generates a `width` x `height` maze.
    ///
    /// Both dimensions must be odd and at least 5. This is not checked here;
    /// validate at the input boundary with [`crate::config::MazeConfig::validate`].
    /// Even dimensions leave an uncarved strip along the bottom/right edge and
    /// dimensions below 3 panic.
    pub fn generate(&mut self, width: usize, height: usize) -> Maze {
        let mut maze = Maze::new(width, height);
        let start = maze.start();
        let goal = maze.goal();

        tracing::debug!(
            "[generate] Carving {}x{} maze with {}",
            width,
            height,
            self.algorithm
        );
        self.algorithm.carve(&mut maze, start, &mut self.rng);

        maze.carve(start);
        maze.carve(goal);
        maze
    }
}
