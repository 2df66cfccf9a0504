//! **wavepath-core** — core types for tile-grid pathfinding.
//!
//! This crate provides the types shared across the *wavepath* workspace:
//! 1-based geometry primitives, the obstacle [`Grid`] and the error raised
//! when a grid cannot be built.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
