//! Errors raised while building or parsing a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::geom::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid size {width}x{height}: need at least two cells")]
    InvalidSize { width: i32, height: i32 },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no end cell")]
    MissingEnd,

    #[error("second start cell at {0}")]
    DuplicateStart(Point),

    #[error("second end cell at {0}")]
    DuplicateEnd(Point),

    #[error("start and end are the same cell {0}")]
    SameEndpoints(Point),

    #[error("{0} is outside the grid")]
    OutOfBounds(Point),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Point },
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GridError::SameEndpoints(Point::new(1, 2));
        assert_eq!(err.to_string(), "start and end are the same cell (1, 2)");
        let err = GridError::InvalidSize {
            width: 1,
            height: 1,
        };
        assert_eq!(
            err.to_string(),
            "invalid grid size 1x1: need at least two cells"
        );
    }
}
