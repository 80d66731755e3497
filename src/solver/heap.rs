use grid_util::point::Point;
use log::info;

use crate::astar_heap::weighted_astar;
use crate::heuristic::manhattan;
use crate::traversal_grid::TraversalGrid;

/// Binary-heap A* for callers that want a weight-minimal path and nothing
/// else: no settle order, no mutation of the grid's search fields, no reset
/// protocol between runs.
///
/// Successors are generated lazily from the non-wall neighbourhood, so
/// walls never enter the open list at all. The default heuristic factor of
/// 1.0 keeps the Manhattan estimate admissible (weights are at least 1) and
/// the returned path optimal; raising the factor trades optimality for
/// speed the same way the traced A* does.
#[derive(Clone, Debug)]
pub struct HeapAstarSolver {
    pub heuristic_factor: f32,
}

impl HeapAstarSolver {
    pub fn new() -> HeapAstarSolver {
        HeapAstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Shortest weighted path from `start` to `finish` and its cost (the
    /// summed weight of every cell entered after the start), or [None] if
    /// the finish is unreachable.
    ///
    /// The components answer unreachable queries without a search, so they
    /// must be up to date (see [TraversalGrid::update]).
    pub fn path_with_cost(
        &self,
        grid: &TraversalGrid,
        start: Point,
        finish: Point,
    ) -> Option<(Vec<Point>, i32)> {
        if grid.unreachable(&start, &finish) {
            info!("{} is not reachable from {}", finish, start);
            return None;
        }
        weighted_astar(
            &start,
            |node| grid.weighted_neighborhood(*node),
            |node| (manhattan(node, &finish) as f32 * self.heuristic_factor) as i32,
            |node| *node == finish,
        )
    }
}

impl Default for HeapAstarSolver {
    fn default() -> HeapAstarSolver {
        HeapAstarSolver::new()
    }
}
