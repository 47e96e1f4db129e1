use gridpath_core::Point;
use thiserror::Error;

/// The frontier ran dry before the goal was reached: no path exists.
///
/// This is an ordinary outcome on grids with obstacles, not a fault.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no path from {start} to {end}")]
pub struct NotFound {
    pub start: Point,
    pub end: Point,
}
