//! **gridpath-core** — core types for grid pathfinding.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace: geometry primitives, cell attributes and the immutable
//! [`Grid`] model that searches run against.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Attr;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, GridBuilder};
