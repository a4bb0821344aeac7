//! **wayfind-core**: geometry shared by the *wayfind* navigation crates.
//!
//! Terrain is addressed two ways: discrete grid cells ([`Point`], grouped
//! into rectangles by [`Range`]) and continuous world-space positions
//! ([`WorldPoint`]). Converting between the two is the job of the
//! navigation map in `wayfind-paths`.

pub mod geom;
pub mod world;

pub use geom::{Point, Range, RangeIter};
pub use world::WorldPoint;
