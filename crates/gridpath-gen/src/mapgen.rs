//! Random obstacle grids.
//!
//! A generated grid has a uniformly chosen start and end (always distinct)
//! and every other cell independently blocked with probability
//! `1 / block_one_in`.

use gridpath_core::{Grid, GridError, Point};
use log::debug;
use rand::{Rng, RngExt};

/// One cell in five is blocked by default.
pub const DEFAULT_BLOCK_ONE_IN: u32 = 5;

/// Grid generator owning its random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
    block_one_in: u32,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator with the default obstacle density.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            block_one_in: DEFAULT_BLOCK_ONE_IN,
        }
    }

    /// Block one cell in `n` on average. `0` disables obstacles and `1`
    /// blocks everything but the endpoints.
    pub fn with_block_one_in(mut self, n: u32) -> Self {
        self.block_one_in = n;
        self
    }

    pub fn block_one_in(&self) -> u32 {
        self.block_one_in
    }

    /// A uniformly random point inside a `width` × `height` grid.
    pub fn random_point(&mut self, width: i32, height: i32) -> Point {
        Point::new(
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        )
    }

    /// Two distinct random points, start first.
    pub fn random_endpoints(&mut self, width: i32, height: i32) -> (Point, Point) {
        let start = self.random_point(width, height);
        let mut end = self.random_point(width, height);
        while end == start {
            end = self.random_point(width, height);
        }
        (start, end)
    }

    /// Generate a grid with random endpoints and obstacles.
    pub fn random_grid(&mut self, width: i32, height: i32) -> Result<Grid, GridError> {
        check_size(width, height)?;
        let (start, end) = self.random_endpoints(width, height);
        self.random_grid_between(width, height, start, end)
    }

    /// Generate random obstacles around fixed endpoints.
    pub fn random_grid_between(
        &mut self,
        width: i32,
        height: i32,
        start: Point,
        end: Point,
    ) -> Result<Grid, GridError> {
        check_size(width, height)?;
        let n = self.block_one_in;
        let rng = &mut self.rng;
        let grid = Grid::builder(width, height)
            .block_fn(|_| n > 0 && rng.random_range(0..n) == 0)
            .start(start)
            .end(end)
            .build()?;
        debug!(
            "mapgen: {}x{} grid, start {start}, end {end}, {} blocked",
            width,
            height,
            grid.count(gridpath_core::Attr::Blocked),
        );
        Ok(grid)
    }
}

// Random endpoint selection loops forever on a single cell, so the size is
// checked before any drawing.
fn check_size(width: i32, height: i32) -> Result<(), GridError> {
    if width <= 0 || height <= 0 || (width as i64) * (height as i64) < 2 {
        return Err(GridError::InvalidSize { width, height });
    }
    Ok(())
}
