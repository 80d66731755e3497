use grid_util::point::Point;

use crate::solver::GridSolver;
use crate::traversal_grid::{TraversalGrid, UNREACHABLE};

/// Uniform-cost search over the whole frontier.
///
/// Every step costs 1 regardless of the entered cell's weight; this variant
/// deliberately ignores weights, so its paths are hop-minimal rather than
/// weight-minimal. Walls are discarded when popped, before they can be
/// settled or counted.
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn visit_order(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Vec<Point> {
        debug_assert!(grid.point_in_bounds(start) && grid.point_in_bounds(finish));
        let mut order = Vec::new();
        grid.cell_mut(start).distance = 0;
        let mut unvisited = grid.points();
        while !unvisited.is_empty() {
            unvisited.sort_by_key(|p| grid.cell(*p).distance);
            let current = unvisited.remove(0);
            if grid.cell(current).is_wall {
                continue;
            }
            // Once the cheapest remaining cell is unreached, so is
            // everything else.
            if grid.cell(current).distance == UNREACHABLE {
                return order;
            }
            grid.cell_mut(current).visited = true;
            order.push(current);
            if current == finish {
                return order;
            }
            let candidate = grid.cell(current).distance + 1;
            for neighbor in grid.unvisited_neighbors(current) {
                let cell = grid.cell_mut(neighbor);
                if candidate < cell.distance {
                    cell.distance = candidate;
                    cell.previous = Some(current);
                }
            }
        }
        order
    }
}
