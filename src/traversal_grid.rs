use core::fmt;

use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Sentinel for "not yet reached", standing in for positive infinity in the
/// `distance` and `heuristic` fields. Sorts after every real value.
pub const UNREACHABLE: i32 = i32::MAX;

/// One grid position. The obstacle flag and weight describe the terrain;
/// `distance`, `heuristic`, `visited` and `previous` are owned by whichever
/// solver is currently running and must be reset between runs (see
/// [TraversalGrid::reset_search]).
///
/// `is_start` and `is_finish` are presentation flags for the editing layer;
/// the solvers identify start and finish by coordinate and never read them.
/// `previous` is a non-owning back-reference by coordinate; under correct
/// solver execution the chains it forms are acyclic and are walked by
/// [reconstruct_path](crate::reconstruct_path).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
    pub weight: i32,
    pub distance: i32,
    pub heuristic: i32,
    pub visited: bool,
    pub previous: Option<Point>,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            is_start: false,
            is_finish: false,
            is_wall: false,
            weight: 1,
            distance: UNREACHABLE,
            heuristic: UNREACHABLE,
            visited: false,
            previous: None,
        }
    }
}

impl Cell {
    /// Restores the solver-owned fields to their initial sentinels.
    pub fn reset_search(&mut self) {
        self.distance = UNREACHABLE;
        self.heuristic = UNREACHABLE;
        self.visited = false;
        self.previous = None;
    }
}

/// A row-major rectangular grid of [Cell]s with fixed dimensions.
/// Coordinates use [Point] with `x` as the column and `y` as the row.
///
/// [TraversalGrid] maintains connected components over its non-wall cells
/// (4-adjacency) using a [UnionFind] structure, so that reachability can be
/// answered without running a search. Walling a cell marks the components
/// dirty; call [update](Self::update) after a batch of edits.
#[derive(Clone, Debug)]
pub struct TraversalGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TraversalGrid {
    pub fn new(width: usize, height: usize) -> TraversalGrid {
        let mut grid = TraversalGrid {
            cells: vec![Cell::default(); width * height],
            width,
            height,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    /// Row-major index of a point. In-bounds is a caller contract.
    pub fn get_ix(&self, point: Point) -> usize {
        debug_assert!(self.point_in_bounds(point));
        point.y as usize * self.width + point.x as usize
    }

    pub fn cell(&self, point: Point) -> &Cell {
        &self.cells[self.get_ix(point)]
    }

    pub fn cell_mut(&mut self, point: Point) -> &mut Cell {
        let ix = self.get_ix(point);
        &mut self.cells[ix]
    }

    /// Flips the obstacle flag. Walling a cell resets its weight to 1
    /// (obstacles are never weighted) and marks the components dirty;
    /// un-walling joins the cell to its open neighbours immediately.
    pub fn set_wall(&mut self, point: Point, wall: bool) {
        if wall {
            if !self.cell(point).is_wall {
                self.components_dirty = true;
            }
            let cell = self.cell_mut(point);
            cell.is_wall = true;
            cell.weight = 1;
        } else {
            self.cell_mut(point).is_wall = false;
            let ix = self.get_ix(point);
            for neighbor in self.open_neighbors(point) {
                let neighbor_ix = self.get_ix(neighbor);
                self.components.union(ix, neighbor_ix);
            }
        }
    }

    /// Assigns a traversal weight to an open cell. Weights are at least 1;
    /// assigning to a wall is a caller contract violation.
    pub fn set_weight(&mut self, point: Point, weight: i32) {
        debug_assert!(weight >= 1);
        debug_assert!(!self.cell(point).is_wall);
        self.cell_mut(point).weight = weight;
    }

    /// Moves the unique start flag to `point`.
    pub fn set_start(&mut self, point: Point) {
        for cell in &mut self.cells {
            cell.is_start = false;
        }
        self.cell_mut(point).is_start = true;
    }

    /// Moves the unique finish flag to `point`.
    pub fn set_finish(&mut self, point: Point) {
        for cell in &mut self.cells {
            cell.is_finish = false;
        }
        self.cell_mut(point).is_finish = true;
    }

    /// Restores every cell's solver-owned fields to their sentinels. The
    /// solvers assume a clean slate and do not reset state themselves, so
    /// this must run between two searches on the same grid.
    pub fn reset_search(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }

    /// All coordinates in row-major order. The priority solvers seed their
    /// frontier with this and stable-sort it each step, so this order is
    /// the implicit tie-break between equal-priority cells.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                points.push(Point::new(x, y));
            }
        }
        points
    }

    /// The orthogonal neighbours of `point` that are in bounds and not yet
    /// marked visited, emitted in the fixed order north (y-1), south (y+1),
    /// west (x-1), east (x+1). Several solvers lean on this order as a
    /// secondary tie-break, so it must not change.
    ///
    /// Walls are not filtered here: the solvers link and relax them like any
    /// other cell and discard them at pop time instead.
    pub fn unvisited_neighbors(&self, point: Point) -> Vec<Point> {
        self.orthogonal_neighbors(point)
            .into_iter()
            .filter(|p| !self.cell(*p).visited)
            .collect()
    }

    /// In-bounds non-wall neighbours paired with their entry weight, for
    /// searches that generate successors lazily instead of scanning a
    /// frontier.
    pub fn weighted_neighborhood(&self, point: Point) -> Vec<(Point, i32)> {
        self.open_neighbors(point)
            .into_iter()
            .map(|p| (p, self.cell(p).weight))
            .collect()
    }

    fn orthogonal_neighbors(&self, point: Point) -> Vec<Point> {
        [
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.point_in_bounds(*p))
        .collect()
    }

    fn open_neighbors(&self, point: Point) -> Vec<Point> {
        self.orthogonal_neighbors(point)
            .into_iter()
            .filter(|p| !self.cell(*p).is_wall)
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix(*point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.point_in_bounds(*start) && self.point_in_bounds(*goal) {
            let start_ix = self.get_ix(*start);
            let goal_ix = self.get_ix(*goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are on different components", start, goal);
                true
            }
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid
    /// neighbours to the same components. Walls stay in singleton
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if self.cell(point).is_wall {
                    continue;
                }
                let point_ix = self.get_ix(point);
                // Unioning east and south neighbours covers every adjacency
                // once the full scan completes.
                let neighbors = [Point::new(x + 1, y), Point::new(x, y + 1)]
                    .into_iter()
                    .filter(|p| self.point_in_bounds(*p) && !self.cell(*p).is_wall)
                    .map(|p| self.get_ix(p))
                    .collect::<Vec<usize>>();
                for ix in neighbors {
                    self.components.union(point_ix, ix);
                }
            }
        }
    }
}

impl Default for TraversalGrid {
    fn default() -> TraversalGrid {
        TraversalGrid::new(0, 0)
    }
}

impl fmt::Display for TraversalGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let cell = self.cell(Point::new(x, y));
                let glyph = if cell.is_start {
                    'S'
                } else if cell.is_finish {
                    'F'
                } else if cell.is_wall {
                    '#'
                } else if cell.weight > 1 {
                    'w'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected
    /// components.
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = TraversalGrid::new(3, 2);
        grid.set_wall(Point::new(1, 0), true);
        grid.set_wall(Point::new(1, 1), true);
        grid.generate_components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(!grid.components.equiv(grid.get_ix(p1), grid.get_ix(p2)));
        assert!(grid.components.equiv(grid.get_ix(p1), grid.get_ix(p3)));
        assert!(!grid.components.equiv(grid.get_ix(p1), grid.get_ix(p4)));
        assert!(grid.unreachable(&p1, &p4));
        assert!(grid.reachable(&p1, &p3));
    }

    #[test]
    fn unwalling_rejoins_components() {
        let mut grid = TraversalGrid::new(3, 1);
        grid.set_wall(Point::new(1, 0), true);
        grid.generate_components();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        grid.set_wall(Point::new(1, 0), false);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn walling_marks_components_dirty() {
        let mut grid = TraversalGrid::new(3, 1);
        assert!(!grid.components_dirty);
        grid.set_wall(Point::new(1, 0), true);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    /// The emission order north, south, west, east is a documented
    /// tie-break; solvers depend on it.
    #[test]
    fn neighbor_emission_order_is_fixed() {
        let grid = TraversalGrid::new(3, 3);
        let center = Point::new(1, 1);
        assert_eq!(
            grid.unvisited_neighbors(center),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn visited_cells_drop_out_of_neighborhood() {
        let mut grid = TraversalGrid::new(3, 3);
        grid.cell_mut(Point::new(1, 0)).visited = true;
        grid.cell_mut(Point::new(0, 1)).visited = true;
        assert_eq!(
            grid.unvisited_neighbors(Point::new(1, 1)),
            vec![Point::new(1, 2), Point::new(2, 1)]
        );
    }

    #[test]
    fn walls_stay_in_unvisited_neighborhood_but_not_weighted_one() {
        let mut grid = TraversalGrid::new(3, 3);
        grid.set_wall(Point::new(1, 0), true);
        let unvisited = grid.unvisited_neighbors(Point::new(1, 1));
        assert!(unvisited.contains(&Point::new(1, 0)));
        let weighted = grid.weighted_neighborhood(Point::new(1, 1));
        assert!(weighted.iter().all(|(p, _)| *p != Point::new(1, 0)));
        assert_eq!(weighted.len(), 3);
    }

    #[test]
    fn walling_resets_weight() {
        let mut grid = TraversalGrid::new(2, 1);
        grid.set_weight(Point::new(0, 0), 9);
        grid.set_wall(Point::new(0, 0), true);
        assert_eq!(grid.cell(Point::new(0, 0)).weight, 1);
    }

    #[test]
    fn reset_search_restores_sentinels() {
        let mut grid = TraversalGrid::new(2, 2);
        let p = Point::new(1, 1);
        {
            let cell = grid.cell_mut(p);
            cell.distance = 3;
            cell.heuristic = 7;
            cell.visited = true;
            cell.previous = Some(Point::new(0, 0));
        }
        grid.reset_search();
        let cell = grid.cell(p);
        assert_eq!(cell.distance, UNREACHABLE);
        assert_eq!(cell.heuristic, UNREACHABLE);
        assert!(!cell.visited);
        assert_eq!(cell.previous, None);
    }

    #[test]
    fn start_and_finish_flags_are_unique() {
        let mut grid = TraversalGrid::new(2, 2);
        grid.set_start(Point::new(0, 0));
        grid.set_start(Point::new(1, 1));
        let starts = grid
            .points()
            .into_iter()
            .filter(|p| grid.cell(*p).is_start)
            .collect::<Vec<Point>>();
        assert_eq!(starts, vec![Point::new(1, 1)]);
    }
}
