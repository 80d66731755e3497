use grid_util::point::Point;

use crate::heuristic::weighted_manhattan;
use crate::solver::GridSolver;
use crate::traversal_grid::{TraversalGrid, UNREACHABLE};

/// Inflation applied to the remaining-cost estimate during relaxation. At
/// 1.5 the estimate is not admissible, which sharpens the search at the
/// cost of the optimality guarantee.
const HEURISTIC_FACTOR: f32 = 1.5;

/// A* over the whole frontier: cells are settled in ascending order of
/// accumulated distance plus estimated remaining cost.
///
/// Step cost is the entered neighbour's weight, so paths respect weights
/// (unlike [DijkstraSolver](crate::solver::dijkstra::DijkstraSolver)).
/// Relaxation updates `distance` and the back-reference when the candidate
/// improves, and always recomputes the cell's estimate as `heuristic_factor
/// x` [weighted_manhattan] to the finish; the start cell's initial estimate
/// is uninflated. Ties on the combined score fall back to the frontier's
/// stable row-major order.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: HEURISTIC_FACTOR,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn visit_order(&self, grid: &mut TraversalGrid, start: Point, finish: Point) -> Vec<Point> {
        debug_assert!(grid.point_in_bounds(start) && grid.point_in_bounds(finish));
        let mut order = Vec::new();
        grid.cell_mut(start).distance = 0;
        let start_estimate = weighted_manhattan(grid, start, finish);
        grid.cell_mut(start).heuristic = start_estimate;
        let mut unvisited = grid.points();
        while !unvisited.is_empty() {
            unvisited.sort_by_key(|p| {
                let cell = grid.cell(*p);
                cell.distance.saturating_add(cell.heuristic)
            });
            let current = unvisited.remove(0);
            if grid.cell(current).is_wall {
                continue;
            }
            if grid.cell(current).distance == UNREACHABLE {
                return order;
            }
            grid.cell_mut(current).visited = true;
            order.push(current);
            if current == finish {
                return order;
            }
            let base = grid.cell(current).distance;
            for neighbor in grid.unvisited_neighbors(current) {
                let candidate = base + grid.cell(neighbor).weight;
                let estimate = (weighted_manhattan(grid, neighbor, finish) as f32
                    * self.heuristic_factor) as i32;
                let cell = grid.cell_mut(neighbor);
                if candidate < cell.distance {
                    cell.distance = candidate;
                    cell.previous = Some(current);
                }
                // The estimate is refreshed on every relaxation, improving
                // or not.
                cell.heuristic = estimate;
            }
        }
        order
    }
}
