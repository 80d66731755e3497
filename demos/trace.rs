use grid_tracer::solver::bfs::BfsSolver;
use grid_tracer::solver::GridSolver;
use grid_tracer::{reconstruct_path, TraversalGrid};
use grid_util::point::Point;

// In this demo a path is traced on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  F|
//  ___
// where
// - # marks a wall
// - S marks the start
// - F marks the finish
//
// The settle order is what a visualizer would animate first, the
// reconstructed path second.

fn main() {
    let mut grid = TraversalGrid::new(3, 3);
    grid.set_wall(Point::new(1, 1), true);
    let start = Point::new(0, 0);
    let finish = Point::new(2, 2);
    grid.set_start(start);
    grid.set_finish(finish);
    println!("{}", grid);

    let order = BfsSolver.visit_order(&mut grid, start, finish);
    println!("Settled {} cells:", order.len());
    for p in &order {
        println!("{:?}", p);
    }

    let path = reconstruct_path(&grid, finish);
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
