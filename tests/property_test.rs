//! Cross-solver properties every algorithm in the crate must uphold,
//! checked against small hand-laid grids.

use grid_tracer::solver::astar::AstarSolver;
use grid_tracer::solver::bfs::BfsSolver;
use grid_tracer::solver::dfs::DfsSolver;
use grid_tracer::solver::dijkstra::DijkstraSolver;
use grid_tracer::solver::greedy::GreedySolver;
use grid_tracer::solver::GridSolver;
use grid_tracer::{reconstruct_path, TraversalGrid};
use grid_util::point::Point;

fn all_solvers() -> Vec<(&'static str, Box<dyn GridSolver>)> {
    vec![
        ("dijkstra", Box::new(DijkstraSolver)),
        ("bfs", Box::new(BfsSolver)),
        ("dfs", Box::new(DfsSolver)),
        ("greedy", Box::new(GreedySolver)),
        ("astar", Box::new(AstarSolver::new())),
    ]
}

#[test]
fn settle_orders_never_contain_walls() {
    for (name, solver) in all_solvers() {
        let mut grid = TraversalGrid::new(5, 5);
        grid.set_wall(Point::new(1, 1), true);
        grid.set_wall(Point::new(2, 1), true);
        grid.set_wall(Point::new(3, 3), true);
        let order = solver.visit_order(&mut grid, Point::new(0, 0), Point::new(4, 4));
        assert!(
            order.iter().all(|p| !grid.cell(*p).is_wall),
            "{} settled a wall",
            name
        );
    }
}

#[test]
fn open_grid_settles_finish_exactly_once() {
    for (name, solver) in all_solvers() {
        let mut grid = TraversalGrid::new(4, 4);
        let finish = Point::new(3, 1);
        let order = solver.visit_order(&mut grid, Point::new(0, 2), finish);
        let hits = order.iter().filter(|p| **p == finish).count();
        assert_eq!(hits, 1, "{} settled the finish {} times", name, hits);
        assert_eq!(order.last(), Some(&finish), "{} did not stop at the finish", name);
    }
}

/// With uniform weights both guaranteed-shortest solvers must produce a
/// path of Manhattan length plus the forced detour around the wall.
#[test]
fn dijkstra_and_bfs_agree_on_hop_minimal_paths() {
    //  ___
    // |S  |
    // | # |
    // |  F|
    //  ___
    for (name, solver) in [
        ("dijkstra", Box::new(DijkstraSolver) as Box<dyn GridSolver>),
        ("bfs", Box::new(BfsSolver)),
    ] {
        let mut grid = TraversalGrid::new(3, 3);
        grid.set_wall(Point::new(1, 1), true);
        let path = solver
            .get_path(&mut grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5, "{} path is not hop-minimal", name);
    }
}

#[test]
fn reconstruction_is_idempotent_after_every_solver() {
    for (name, solver) in all_solvers() {
        let mut grid = TraversalGrid::new(4, 4);
        grid.set_wall(Point::new(2, 0), true);
        let finish = Point::new(3, 3);
        solver.visit_order(&mut grid, Point::new(0, 0), finish);
        let first = reconstruct_path(&grid, finish);
        let second = reconstruct_path(&grid, finish);
        assert_eq!(first, second, "{} reconstruction not stable", name);
        assert_eq!(first.last(), Some(&finish));
        let root = first.first().unwrap();
        assert_eq!(grid.cell(*root).previous, None, "{} path root has a parent", name);
    }
}

/// Concrete scenario: a finish whose whole neighbourhood is walled off is
/// never settled by any algorithm.
#[test]
fn boxed_in_finish_is_never_settled() {
    for (name, solver) in all_solvers() {
        let mut grid = TraversalGrid::new(5, 5);
        let finish = Point::new(2, 2);
        for wall in [
            Point::new(2, 1),
            Point::new(2, 3),
            Point::new(1, 2),
            Point::new(3, 2),
        ] {
            grid.set_wall(wall, true);
        }
        let order = solver.visit_order(&mut grid, Point::new(0, 0), finish);
        assert!(
            order.iter().all(|p| *p != finish),
            "{} settled a boxed-in finish",
            name
        );
    }

    let mut grid = TraversalGrid::new(5, 5);
    for wall in [
        Point::new(2, 1),
        Point::new(2, 3),
        Point::new(1, 2),
        Point::new(3, 2),
    ] {
        grid.set_wall(wall, true);
    }
    grid.update();
    assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 2)));
}

/// Concrete scenario from the corner-to-corner 3x3 query: BFS settles at
/// most the whole grid and its path has Manhattan length plus one cells.
#[test]
fn three_by_three_level_order_scenario() {
    let mut grid = TraversalGrid::new(3, 3);
    let start = Point::new(0, 0);
    let finish = Point::new(2, 2);
    let order = BfsSolver.visit_order(&mut grid, start, finish);
    assert!(order.len() <= 9);
    let path = reconstruct_path(&grid, finish);
    assert_eq!(path.len(), 5);
}

#[test]
fn solvers_share_one_reset_protocol() {
    let mut grid = TraversalGrid::new(4, 4);
    let start = Point::new(0, 0);
    let finish = Point::new(3, 3);
    let first = BfsSolver.get_path(&mut grid, start, finish).unwrap();
    grid.reset_search();
    let second = DijkstraSolver.get_path(&mut grid, start, finish).unwrap();
    assert_eq!(first.len(), second.len());
}
