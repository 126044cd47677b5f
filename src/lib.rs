//! # grid_router
//!
//! Shortest-path routing on a 2D occupancy grid. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over a
//! 4-connected grid with unit step costs, guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! heuristic. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! A [Grid] owns the occupancy map and the obstacle mutators (including
//! uniform random population); a [PathFinder] borrows a grid per call and
//! returns the route as a start-to-goal sequence of [Coordinate]s, empty
//! when the goal cannot be reached.

mod astar;
pub mod coord;
pub mod error;
pub mod grid;
pub mod pathfinder;

pub use crate::coord::Coordinate;
pub use crate::error::GridError;
pub use crate::grid::{Cell, Grid};
pub use crate::pathfinder::PathFinder;
