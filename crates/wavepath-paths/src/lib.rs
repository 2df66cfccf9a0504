//! Wave-propagation pathfinding for tile grids.
//!
//! The search labels every free cell with its breadth-first layer,
//! spreading outward from a start cell like a wave:
//!
//! - **Shortest paths** ([`Solver::find_path`]) walk the labels back from
//!   the end cell.
//! - **Reachability** ([`Solver::find_reachable`]) returns the cells the
//!   wave discovered, optionally cut short by a [`Budget`].
//!
//! Movement is 4-connected. Every query builds its own [`DistanceField`],
//! so a [`Grid`](wavepath_core::Grid) can be shared freely between
//! concurrent queries and answers never depend on earlier calls.
//!
//! # Determinism
//!
//! Neighbors are always examined in the order **+x, −x, +y, −y**, and the
//! cells of one layer are expanded in row-major order. Together these fix
//! which of several equally short paths is returned and the order of a
//! reachable set.

mod backtrack;
mod bounds;
mod coords;
mod distance;
mod neighbors;
mod solver;
mod wave;

pub use bounds::in_bounds;
pub use coords::{to_linear, to_point};
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use solver::{Solver, find_path, find_reachable};
pub use wave::{Budget, DistanceField};
