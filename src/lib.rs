//! # grid_tracer
//!
//! Pathfinding on rectangular grids of weighted cells, built for callers
//! that animate the search: every solver reports the exact order in which it
//! settled cells, and leaves per-cell back-pointers on the grid from which
//! the shortest path can be reconstructed afterwards.
//!
//! Five classic algorithms are provided behind one [solver::GridSolver]
//! trait:
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search)
//! and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). The
//! priority-driven solvers re-sort their whole frontier every step, which
//! keeps the settle order faithful to the textbook presentation at
//! interactive grid sizes; [solver::heap::HeapAstarSolver] is the
//! binary-heap alternative for callers that only want the path.
//!
//! [TraversalGrid] pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! over its open cells so that hopeless queries can be rejected without a
//! flood fill.

pub mod heuristic;
pub mod solver;
pub mod traversal_grid;

mod astar_heap;

pub use traversal_grid::{Cell, TraversalGrid, UNREACHABLE};

use grid_util::point::Point;

/// Walks the `previous` back-references left on the grid by a solver,
/// starting at `finish`, and returns the chain reordered from its root to
/// `finish`. The first element is always a cell without a back-reference;
/// after a successful search that is the start cell.
///
/// Only meaningful once a solver has settled `finish`: called on a cell the
/// search never reached, the result is whatever fragment of linkage exists
/// there (typically just `finish` itself) and does not describe a real path.
pub fn reconstruct_path(grid: &TraversalGrid, finish: Point) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(Some(finish), |current| {
        let p = (*current)?;
        *current = grid.cell(p).previous;
        Some(p)
    })
    .collect();
    path.reverse();
    path
}
