//! The traced solvers and the trait they share.
//!
//! Each solver consumes a [TraversalGrid] whose search fields are freshly
//! reset, mutates them in place while it runs, and returns the settle order.
//! The grid keeps the `previous` back-references afterwards, so the caller
//! animates the visit order first and the reconstructed path second.

use grid_util::point::Point;
use log::debug;

use crate::reconstruct_path;
use crate::traversal_grid::TraversalGrid;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod greedy;
pub mod heap;

/// A search algorithm that settles grid cells one at a time.
///
/// Callers must reset the grid's search fields between runs (see
/// [TraversalGrid::reset_search]); solvers assume a clean slate and never
/// reset state themselves. Running two solvers against the same grid
/// without a reset in between is a contract violation.
pub trait GridSolver {
    /// Runs the search and returns the cells in the order they were
    /// settled. The order never contains a wall. If the finish was reached
    /// it is the last element; otherwise the order is the partial
    /// exploration that proves unreachability.
    fn visit_order(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Vec<Point>;

    /// Runs [visit_order](Self::visit_order) and reconstructs the path from
    /// the back-references if the finish was settled.
    fn get_path(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Option<Vec<Point>> {
        let order = self.visit_order(grid, start, finish);
        if order.last() == Some(&finish) {
            Some(reconstruct_path(grid, finish))
        } else {
            debug!("finish {} not settled after {} visits", finish, order.len());
            None
        }
    }

    /// Weighted cost of a path: the summed weight of every cell entered
    /// after the first.
    fn path_cost(&self, grid: &TraversalGrid, path: &[Point]) -> i32 {
        path.iter().skip(1).map(|p| grid.cell(*p).weight).sum()
    }
}
