use std::collections::VecDeque;

use grid_util::point::Point;

use crate::solver::GridSolver;
use crate::traversal_grid::TraversalGrid;

/// Breadth-first search: level-order expansion over a FIFO queue.
///
/// Neighbours are marked visited and linked to their parent when they are
/// enqueued, so no cell enters the queue twice. Walls are enqueued like any
/// other neighbour and discarded at dequeue time, which keeps them out of
/// the settle order without a second membership check on the hot path.
/// With uniform cell costs the resulting back-references describe a
/// hop-minimal path.
#[derive(Clone, Debug)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn visit_order(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Vec<Point> {
        debug_assert!(grid.point_in_bounds(start) && grid.point_in_bounds(finish));
        let mut order = Vec::new();
        grid.cell_mut(start).visited = true;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            if grid.cell(current).is_wall {
                continue;
            }
            order.push(current);
            if current == finish {
                return order;
            }
            for neighbor in grid.unvisited_neighbors(current) {
                let cell = grid.cell_mut(neighbor);
                cell.visited = true;
                cell.previous = Some(current);
                queue.push_back(neighbor);
            }
        }
        order
    }
}
