//! Shortest-path search and navigation maps for grid terrain.
//!
//! The crate is built in layers:
//!
//! - [`IndexedPriorityQueue`]: a binary min-heap with O(log n) decrease-key
//!   and removal of arbitrary elements by identity.
//! - [`SearchSpace`]: the contract a graph implements to be searchable
//!   (neighbour enumeration, edge costs, heuristic).
//! - [`PathSearch`] / [`find_path`]: generic A* over any `SearchSpace`, with
//!   per-search node state kept in a side table ([`NodeRecord`]).
//! - [`NavMap`]: a rectangular grid of cells with per-cell occupancy that
//!   answers path queries in world coordinates.
//!
//! # Traversal rules
//!
//! Searches on a [`NavMap`] take a [`Traversal`] value as context, so each
//! caller decides which cells its mover may enter and what steps cost:
//!
//! | Rules | Occupied cells |
//! |---|---|
//! | [`AvoidOccupied`] | impassable |
//! | [`AvoidOthers`] | impassable unless held by the mover itself |
//! | [`IgnoreOccupancy`] | passable |

mod config;
mod distance;
mod error;
mod navmap;
mod pqueue;
mod search;
mod traits;
mod traversal;

pub use config::{Connectivity, NavConfig};
pub use distance::{chebyshev, manhattan, octile};
pub use error::{ConfigError, QueueError};
pub use navmap::{GridNode, NavMap, NodeId, Path, Terrain};
pub use pqueue::{Entry, IndexedPriorityQueue};
pub use search::{NodeRecord, PathSearch, SearchPath, find_path};
pub use traits::{Cost, SearchSpace};
pub use traversal::{AvoidOccupied, AvoidOthers, IgnoreOccupancy, Traversal};
