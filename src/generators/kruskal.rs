use rand::{Rng, seq::SliceRandom};

use crate::{
    generators::UnionFind,
    maze::{Maze, Position},
};

/// Wall edge between two cells two steps apart
#[derive(Clone, Copy)]
struct Edge {
    from: Position,
    to: Position,
}

/// Linearized union-find id of a cell.
fn cell_id(pos: Position, cells_per_row: usize) -> usize {
    (pos.row - 1) / 2 * cells_per_row + (pos.col - 1) / 2
}

/// All edges between adjacent cells: every horizontal pair in row-major
/// order, then every vertical pair.
fn collect_edges(maze: &Maze) -> Vec<Edge> {
    let (width, height) = (maze.width(), maze.height());

    let horizontal = (1..height - 1).step_by(2).flat_map(|row| {
        (1..width - 3).step_by(2).map(move |col| Edge {
            from: Position::new(row, col),
            to: Position::new(row, col + 2),
        })
    });
    let vertical = (1..height - 3).step_by(2).flat_map(|row| {
        (1..width - 1).step_by(2).map(move |col| Edge {
            from: Position::new(row, col),
            to: Position::new(row + 2, col),
        })
    });

    horizontal.chain(vertical).collect()
}

/// Randomized Kruskal: shuffles every cell-to-cell edge and keeps an edge
/// whenever it joins two different components.
///
/// The whole interior is spanned, so the start cell needs no special handling.
pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &mut Maze, _start: Position, rng: &mut R) {
    let cells_per_row = (maze.width() - 1) / 2;
    let cell_count = (maze.height() - 1) / 2 * cells_per_row;

    let mut edges = collect_edges(maze);
    edges.shuffle(rng);

    let mut uf = UnionFind::new(cell_count);
    let mut joined = 0usize;

    for edge in edges {
        let id1 = cell_id(edge.from, cells_per_row);
        let id2 = cell_id(edge.to, cells_per_row);

        // Skip edges that would close a cycle
        if uf.union(id1, id2) {
            maze.carve(edge.from);
            maze.carve_passage(edge.from, edge.to);
            joined += 1;
        }
    }

    tracing::trace!(
        "[kruskal] Joined {} of {} cells into {} component(s)",
        joined,
        cell_count,
        uf.components()
    );
}
