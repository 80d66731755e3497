use std::collections::VecDeque;

use grid_util::point::Point;

use crate::solver::GridSolver;
use crate::traversal_grid::TraversalGrid;

/// Depth-first search: the work list is driven LIFO, with newly discovered
/// neighbours pushed to the front so the first-emitted neighbour is
/// processed next.
///
/// Unlike [BfsSolver](crate::solver::bfs::BfsSolver), cells are linked to
/// their parent at discovery time but only marked visited when they are
/// popped and accepted. A cell can therefore sit in the work list several
/// times with its back-reference pointing at the most recent discoverer;
/// the visited check at pop time makes sure it is settled once. Discovery
/// order is the only guarantee; paths are not shortest.
#[derive(Clone, Debug)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn visit_order(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Vec<Point> {
        debug_assert!(grid.point_in_bounds(start) && grid.point_in_bounds(finish));
        let mut order = Vec::new();
        let mut stack = VecDeque::new();
        stack.push_back(start);
        while let Some(current) = stack.pop_front() {
            if grid.cell(current).is_wall {
                continue;
            }
            // Duplicate work-list entries are settled only once.
            if grid.cell(current).visited {
                continue;
            }
            grid.cell_mut(current).visited = true;
            order.push(current);
            if current == finish {
                return order;
            }
            let neighbors = grid.unvisited_neighbors(current);
            for neighbor in neighbors.into_iter().rev() {
                grid.cell_mut(neighbor).previous = Some(current);
                stack.push_front(neighbor);
            }
        }
        order
    }
}
