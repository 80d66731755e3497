use grid_util::point::Point;

use crate::heuristic::weighted_manhattan;
use crate::solver::GridSolver;
use crate::traversal_grid::{TraversalGrid, UNREACHABLE};

/// Greedy best-first search: the frontier is ordered purely by each cell's
/// best known estimate of the remaining cost to the finish, with no credit
/// for the cost already paid.
///
/// A neighbour's candidate estimate is its own weight plus the
/// [weighted_manhattan] distance from it to the finish; the estimate and
/// back-reference are updated when the candidate improves on what the cell
/// already holds. Because the accumulated cost is ignored the solver darts
/// at the finish, which makes for short settle orders but no shortest-path
/// guarantee.
#[derive(Clone, Debug)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    fn visit_order(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Vec<Point> {
        debug_assert!(grid.point_in_bounds(start) && grid.point_in_bounds(finish));
        let mut order = Vec::new();
        grid.cell_mut(start).heuristic = 0;
        let mut unvisited = grid.points();
        while !unvisited.is_empty() {
            unvisited.sort_by_key(|p| grid.cell(*p).heuristic);
            let current = unvisited.remove(0);
            if grid.cell(current).is_wall {
                continue;
            }
            if grid.cell(current).heuristic == UNREACHABLE {
                return order;
            }
            grid.cell_mut(current).visited = true;
            order.push(current);
            if current == finish {
                return order;
            }
            for neighbor in grid.unvisited_neighbors(current) {
                let estimate =
                    grid.cell(neighbor).weight + weighted_manhattan(grid, neighbor, finish);
                let cell = grid.cell_mut(neighbor);
                if estimate < cell.heuristic {
                    cell.heuristic = estimate;
                    cell.previous = Some(current);
                }
            }
        }
        order
    }
}
