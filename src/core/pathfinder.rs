use std::collections::VecDeque;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::error::{MazeError, MazeResult};
use crate::core::grid::Grid;
use crate::core::models::Coord;

/// Outcome of a shortest path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// Cells from start to destination, both included.
    Found(Vec<Coord>),
    /// The search ran out of cells without meeting the destination.
    Unreachable,
}

impl PathResult {
    pub fn cells(&self) -> Option<&[Coord]> {
        match self {
            PathResult::Found(cells) => Some(cells),
            PathResult::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// Number of cells on the path, zero when unreachable.
    pub fn len(&self) -> usize {
        self.cells().map_or(0, |cells| cells.len())
    }

    pub fn contains(&self, cell: &Coord) -> bool {
        self.cells().is_some_and(|cells| cells.contains(cell))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Unvisited,
    Queued,
    Visited,
}

/// Breadth first search from `start` to `destination` over the open sides of
/// `grid`.
///
/// Neighbors are expanded in `Side::ALL` order, so among several shortest
/// paths the same one is always returned for a given grid.
pub fn shortest_path(grid: &Grid, start: Coord, destination: Coord) -> MazeResult<PathResult> {
    for cell in [start, destination] {
        if !grid.contains(&cell) {
            return Err(MazeError::OutOfBounds {
                cell,
                width: grid.width(),
                height: grid.height(),
            });
        }
    }

    if start == destination {
        return Ok(PathResult::Found(vec![start]));
    }

    let mut state = BoundedGrid::new_with_size(grid.width(), grid.height(), SearchState::Unvisited);
    let mut predecessors: BoundedGrid<Option<Coord>> =
        BoundedGrid::new_with_size(grid.width(), grid.height(), None);

    let mut queue = VecDeque::new();
    state[&start] = SearchState::Queued;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        state[&current] = SearchState::Visited;
        if current == destination {
            return Ok(PathResult::Found(walk_back(&predecessors, start, destination)));
        }

        for next in grid.neighbors(current)? {
            if state[&next] != SearchState::Unvisited {
                continue;
            }
            state[&next] = SearchState::Queued;
            predecessors[&next] = Some(current);
            queue.push_back(next);
        }
    }

    Ok(PathResult::Unreachable)
}

fn walk_back(predecessors: &BoundedGrid<Option<Coord>>, start: Coord, destination: Coord) -> Vec<Coord> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != start {
        let Some(previous) = predecessors[&current] else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
