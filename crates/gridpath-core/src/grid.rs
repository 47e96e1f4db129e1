//! The [`Grid`] type — an immutable 2D array of [`Attr`]s with one start
//! and one end cell.
//!
//! Grids are assembled with a [`GridBuilder`] (or parsed from the ASCII map
//! format via [`FromStr`]) and never change afterwards. Every constructor
//! enforces the same invariants: positive dimensions, exactly one start,
//! exactly one end, and start ≠ end.

use std::fmt;
use std::str::FromStr;

use crate::cell::Attr;
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A read-only grid of cell attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Attr>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Start building a `width` × `height` grid whose cells are all free.
    pub fn builder(width: i32, height: i32) -> GridBuilder {
        GridBuilder::new(width, height)
    }

    /// An obstacle-free grid with the given endpoints.
    pub fn open(width: i32, height: i32, start: Point, end: Point) -> Result<Self> {
        Self::builder(width, height).start(start).end(end).build()
    }

    /// The bounding range, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Attribute at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Attr> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Attribute at `p`.
    ///
    /// # Panics
    ///
    /// If `p` lies outside the grid. Callers only pass points obtained from
    /// [`neighbors`](Grid::neighbors) or checked endpoints.
    #[inline]
    pub fn attr(&self, p: Point) -> Attr {
        match self.at(p) {
            Some(a) => a,
            None => panic!("{p} is outside grid bounds {}", self.bounds),
        }
    }

    /// Whether `p` is in bounds and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Attr::is_passable)
    }

    /// In-bounds orthogonal neighbours of `p` in west, north, east, south
    /// order. Blocked cells are included; filtering is up to the caller.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the neighbours of `p` into `buf` without clearing it first.
    #[inline]
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }

    /// The attributes of row `y`, left to right, or `None` past the edges.
    pub fn row(&self, y: i32) -> Option<&[Attr]> {
        if y < 0 || y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        self.cells.get(start..start + w)
    }

    /// Count how many cells carry the given attribute.
    pub fn count(&self, attr: Attr) -> usize {
        self.cells.iter().filter(|&&a| a == attr).count()
    }

    /// Iterate over `(Point, Attr)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Attr)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    /// Compact ASCII map: one glyph per cell, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for a in row {
                write!(f, "{}", a.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse the ASCII map format. Blank lines and whitespace between
    /// glyphs are ignored, so the spaced-out printer layout reads back too.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        let mut builder = GridBuilder::new(width as i32, rows.len() as i32);
        let mut start = None;
        let mut end = None;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &glyph) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match Attr::from_glyph(glyph) {
                    Some(Attr::Free) => {}
                    Some(Attr::Blocked) => builder = builder.block(pos),
                    Some(Attr::Start) => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::DuplicateStart(pos));
                        }
                    }
                    Some(Attr::End) => {
                        if end.replace(pos).is_some() {
                            return Err(GridError::DuplicateEnd(pos));
                        }
                    }
                    None => return Err(GridError::UnknownGlyph { glyph, pos }),
                }
            }
        }

        if let Some(p) = start {
            builder = builder.start(p);
        }
        if let Some(p) = end {
            builder = builder.end(p);
        }
        builder.build()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Incremental constructor for [`Grid`]. Errors are reported by
/// [`build`](GridBuilder::build).
#[derive(Debug, Clone)]
pub struct GridBuilder {
    bounds: Range,
    width: i32,
    height: i32,
    cells: Vec<Attr>,
    start: Option<Point>,
    end: Option<Point>,
    error: Option<GridError>,
}

impl GridBuilder {
    /// A builder for a grid of the given size, all cells free.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            width,
            height,
            cells: vec![Attr::Free; bounds.len()],
            start: None,
            end: None,
            error: None,
        }
    }

    /// Set the start cell (builder).
    pub fn start(mut self, p: Point) -> Self {
        self.start = Some(p);
        self
    }

    /// Set the end cell (builder).
    pub fn end(mut self, p: Point) -> Self {
        self.end = Some(p);
        self
    }

    /// Mark `p` as blocked. Blocking an endpoint has no effect.
    pub fn block(mut self, p: Point) -> Self {
        match self.bounds.index(p) {
            Some(i) => self.cells[i] = Attr::Blocked,
            None => self.fail(GridError::OutOfBounds(p)),
        }
        self
    }

    /// Mark every cell for which `f` returns `true` as blocked.
    pub fn block_fn(mut self, mut f: impl FnMut(Point) -> bool) -> Self {
        for (p, cell) in self.bounds.iter().zip(self.cells.iter_mut()) {
            if f(p) {
                *cell = Attr::Blocked;
            }
        }
        self
    }

    fn fail(&mut self, err: GridError) {
        self.error.get_or_insert(err);
    }

    /// Validate and produce the grid.
    pub fn build(mut self) -> Result<Grid> {
        if self.width <= 0 || self.height <= 0 || self.bounds.len() < 2 {
            return Err(GridError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(err) = self.error {
            return Err(err);
        }
        let start = self.start.ok_or(GridError::MissingStart)?;
        let end = self.end.ok_or(GridError::MissingEnd)?;
        let si = self.bounds.index(start).ok_or(GridError::OutOfBounds(start))?;
        let ei = self.bounds.index(end).ok_or(GridError::OutOfBounds(end))?;
        if si == ei {
            return Err(GridError::SameEndpoints(start));
        }
        self.cells[si] = Attr::Start;
        self.cells[ei] = Attr::End;
        Ok(Grid {
            cells: self.cells,
            bounds: self.bounds,
            start,
            end,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = "@o*\no*#".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"@o*\\no*#\"");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn invalid_grid_is_rejected() {
        let res: std::result::Result<Grid, _> = serde_json::from_str("\"@o@\"");
        assert!(res.is_err());
    }
}
