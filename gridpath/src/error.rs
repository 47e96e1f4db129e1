//! Application-level errors.

use std::path::PathBuf;

use gridpath_core::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("cannot read map {path}: {source}")]
    ReadMap {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("verification failed: search found {astar:?} steps, BFS found {bfs:?}")]
    Verify {
        astar: Option<usize>,
        bfs: Option<i32>,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AppError::Config("--start needs --end".to_string());
        assert_eq!(err.to_string(), "configuration error: --start needs --end");
        let err: AppError = GridError::MissingEnd.into();
        assert_eq!(err.to_string(), "invalid grid: grid has no end cell");
    }
}
