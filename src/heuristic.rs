//! Distance estimators used to bias the informed solvers.

use grid_util::point::Point;

use crate::traversal_grid::TraversalGrid;

/// Plain Manhattan distance between two points.
pub fn manhattan(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Weight-aware Manhattan estimate between two cells.
///
/// Considers the two rectilinear L-paths from `from` to `to` (vertical leg
/// first or horizontal leg first), sums the cell weights along each and
/// returns the smaller sum. Within one L-path every cell is counted exactly
/// once: the horizontal leg includes both of its column bounds, while the
/// vertical leg excludes the row it shares with the horizontal leg. Which
/// row is excluded therefore depends on the direction of travel; this
/// asymmetry is part of the estimator's definition.
///
/// This is a search-order bias, not a shortest-weighted-path computation:
/// it ignores every route other than the two L-paths and includes the
/// weight of `from` itself.
pub fn weighted_manhattan(grid: &TraversalGrid, from: Point, to: Point) -> i32 {
    // Vertical first: climb the column of `from`, then cross the row of
    // `to`. The shared corner (from.x, to.y) is counted by the row leg.
    let vertical_first =
        column_weights(grid, from.x, from.y, to.y) + row_weights(grid, to.y, from.x, to.x);
    // Horizontal first: cross the row of `from`, then climb the column of
    // `to`. Here the corner (to.x, from.y) belongs to the row leg instead.
    let horizontal_first =
        row_weights(grid, from.y, from.x, to.x) + column_weights(grid, to.x, to.y, from.y);
    vertical_first.min(horizontal_first)
}

/// Summed weight of the cells in row `y` between both column bounds,
/// inclusive on each end.
fn row_weights(grid: &TraversalGrid, y: i32, x_a: i32, x_b: i32) -> i32 {
    let (lo, hi) = (x_a.min(x_b), x_a.max(x_b));
    (lo..=hi).map(|x| grid.cell(Point::new(x, y)).weight).sum()
}

/// Summed weight of the cells in column `x` between both row bounds,
/// excluding the `y_excluded` end.
fn column_weights(grid: &TraversalGrid, x: i32, y_from: i32, y_excluded: i32) -> i32 {
    let (lo, hi) = (y_from.min(y_excluded), y_from.max(y_excluded));
    (lo..=hi)
        .filter(|&y| y != y_excluded)
        .map(|y| grid.cell(Point::new(x, y)).weight)
        .sum()
}
