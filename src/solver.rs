//! Breadth-first shortest-path search over a grid's open passages.

use std::collections::VecDeque;

use crate::array::Array2D;
use crate::coord::{Dir, RowCol};
use crate::grid::Grid;

/// Ordered cell sequence from start to end. Empty means "no path", whether
/// the end cell is unreachable or the query itself was invalid; downstream
/// the reaction is the same either way.
pub type Path = Vec<RowCol>;

/// Shortest path between two cells, as a sequence of 4-adjacent wall-free
/// steps. Returns an empty path on an ungenerated grid, an out-of-range
/// endpoint, or an unreachable end cell. Among equal-length paths the one
/// implied by the [`Dir::in_order`] expansion order wins. Never mutates the
/// grid.
pub fn solve(grid: &Grid, start: RowCol, end: RowCol) -> Path {
    if !grid.is_generated() || !grid.is_in_bounds(start) || !grid.is_in_bounds(end) {
        return Path::new();
    }

    if start == end {
        return vec![start];
    }

    // the parent table doubles as the visited set; start points at itself
    let mut parent: Array2D<Option<RowCol>> = Array2D::new(None, grid.rows(), grid.cols());
    let mut queue = VecDeque::new();

    parent[start] = Some(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return backtrack(&parent, start, end);
        }

        for dir in Dir::in_order() {
            let next = current + dir.offset();
            if grid.can_move(current, next) && parent[next].is_none() {
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    Path::new()
}

fn backtrack(parent: &Array2D<Option<RowCol>>, start: RowCol, end: RowCol) -> Path {
    let mut path = Vec::new();
    let mut pos = end;

    while pos != start {
        path.push(pos);
        pos = parent[pos].expect("walked an unvisited cell");
    }

    path.push(start);
    path.reverse();
    path
}
