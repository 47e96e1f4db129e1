//! Shortest-path search on 4-connected grids.
//!
//! The centre of this crate is an A* engine ([`Astar`], or the one-call
//! [`search`]) built from three pieces:
//!
//! - a dense per-cell [`NodeStates`] arena holding cost-so-far, heuristic,
//!   total estimate, predecessor and visited flag,
//! - a [`Frontier`] min-heap of `(index, f)` entries into that arena,
//! - [`reconstruct`], which follows predecessor links back into a [`Route`].
//!
//! A failed search yields [`NotFound`], an ordinary value rather than a
//! fault. [`bfs_distance`] gives an independent answer for cross-checking.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](gridpath_core::Grid) implements all three.

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod node;
mod route;
mod traits;

pub use astar::{Astar, SearchStats, ShortestPath, search};
pub use bfs::{UNREACHABLE, bfs_distance, bfs_map};
pub use distance::manhattan;
pub use error::NotFound;
pub use frontier::{Frontier, NodeRef};
pub use node::{NodeState, NodeStates};
pub use route::{Route, reconstruct};
pub use traits::{AstarPather, Pather, WeightedPather};
