use wavepath_core::{Grid, Point};

use crate::bounds::in_bounds;
use crate::coords::to_linear;
use crate::wave::{Budget, DistanceField};

/// Query front end for one obstacle grid.
///
/// A `Solver` only borrows its grid. Every query builds its own
/// [`DistanceField`] and drops it on return, so any number of solvers (on
/// any number of threads) can share one grid and repeated queries always
/// give identical answers.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'g> {
    grid: &'g Grid,
}

impl<'g> Solver<'g> {
    /// Create a solver over `grid`.
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Whether `p` is a tile of the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        in_bounds(p, self.grid.width(), self.grid.height())
    }

    /// Shortest 4-connected path from `start` to `end`, both inclusive.
    ///
    /// Returns an empty path if either point lies outside the grid or `end`
    /// cannot be reached. When several shortest paths exist, the one picked
    /// is fixed by the `+x, −x, +y, −y` neighbor order.
    pub fn find_path(&self, start: Point, end: Point) -> Vec<Point> {
        if !self.contains(start) || !self.contains(end) {
            log::debug!("find_path: {start} -> {end} leaves the grid");
            return Vec::new();
        }
        let field = DistanceField::propagate(self.grid, start, Budget::Unlimited);
        let end_idx = to_linear(end, self.grid.width());
        if !field.is_reached(end_idx) {
            log::debug!("find_path: {end} is unreachable from {start}");
            return Vec::new();
        }
        field.backtrack(end_idx)
    }

    /// Cells reachable from `start` within `budget`, start excluded, in the
    /// order the wave discovered them.
    ///
    /// Returns an empty set if `start` lies outside the grid.
    pub fn find_reachable(&self, start: Point, budget: Budget) -> Vec<Point> {
        match self.distance_field(start, budget) {
            Some(field) => field.discovered().collect(),
            None => Vec::new(),
        }
    }

    /// Run one wave from `start` and hand back the whole field, for callers
    /// that need several distance lookups from the same origin.
    ///
    /// Returns `None` if `start` lies outside the grid.
    pub fn distance_field(&self, start: Point, budget: Budget) -> Option<DistanceField> {
        if !self.contains(start) {
            log::debug!("distance_field: start {start} leaves the grid");
            return None;
        }
        Some(DistanceField::propagate(self.grid, start, budget))
    }
}

/// One-shot [`Solver::find_path`].
pub fn find_path(grid: &Grid, start: Point, end: Point) -> Vec<Point> {
    Solver::new(grid).find_path(start, end)
}

/// One-shot [`Solver::find_reachable`].
pub fn find_reachable(grid: &Grid, start: Point, budget: Budget) -> Vec<Point> {
    Solver::new(grid).find_reachable(start, budget)
}
