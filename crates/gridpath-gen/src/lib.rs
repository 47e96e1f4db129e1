//! Random grid generation for gridpath.

pub mod mapgen;

pub use mapgen::{DEFAULT_BLOCK_ONE_IN, MapGen};
