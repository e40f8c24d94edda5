use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::{Maze, Position};

/// Finds a shortest path from the maze's start to its goal with breadth-first
/// search over passage cells.
///
/// Returns `None` when start or goal is a wall or the goal is unreachable.
/// The path includes both endpoints, so it is never empty; when start and goal
/// coincide it is just `[start]`. Among several shortest paths the one found
/// by expanding neighbors up, right, down, left is returned.
pub fn find_path(maze: &Maze) -> Option<Vec<Position>> {
    let (start, goal) = (maze.start(), maze.goal());
    if maze.is_wall(start) || maze.is_wall(goal) {
        tracing::debug!("[bfs] Start or goal is blocked, skipping search");
        return None;
    }

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut parents: HashMap<Position, Position> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            tracing::debug!(
                "[bfs] Found path of {} cells after visiting {} cells",
                path.len(),
                visited.len()
            );
            return Some(path);
        }

        for neighbor in maze.open_neighbors(current) {
            if visited.insert(neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!("[bfs] No path after visiting {} cells", visited.len());
    None
}

/// Follows parent links back from `goal` and returns the route start-first.
fn reconstruct_path(
    parents: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
