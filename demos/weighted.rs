use grid_tracer::solver::astar::AstarSolver;
use grid_tracer::solver::dijkstra::DijkstraSolver;
use grid_tracer::solver::heap::HeapAstarSolver;
use grid_tracer::solver::GridSolver;
use grid_tracer::TraversalGrid;
use grid_util::point::Point;

// A weight-15 cell sits on the straight line between start and finish.
// Dijkstra's unit-cost variant walks right over it; the weight-aware A*
// detours around it and settles fewer cells doing so. The heap solver
// reports the optimal cost for reference.

fn main() {
    let start = Point::new(0, 0);
    let finish = Point::new(2, 2);

    let mut grid = TraversalGrid::new(3, 3);
    grid.set_weight(Point::new(1, 1), 15);
    grid.set_start(start);
    grid.set_finish(finish);
    println!("{}", grid);

    let dijkstra = DijkstraSolver;
    let order = dijkstra.visit_order(&mut grid, start, finish);
    let path = grid_tracer::reconstruct_path(&grid, finish);
    println!(
        "dijkstra: {} settled, path of {} cells costing {}",
        order.len(),
        path.len(),
        dijkstra.path_cost(&grid, &path)
    );

    grid.reset_search();
    let astar = AstarSolver::new();
    let order = astar.visit_order(&mut grid, start, finish);
    let path = grid_tracer::reconstruct_path(&grid, finish);
    println!(
        "astar:    {} settled, path of {} cells costing {}",
        order.len(),
        path.len(),
        astar.path_cost(&grid, &path)
    );

    let heap = HeapAstarSolver::new();
    if let Some((path, cost)) = heap.path_with_cost(&grid, start, finish) {
        println!("optimal:  path of {} cells costing {}", path.len(), cost);
    }
}
