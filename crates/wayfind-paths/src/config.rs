//! Navigation map configuration.

use wayfind_core::{Point, WorldPoint};

use crate::distance::{manhattan, octile};
use crate::error::ConfigError;
use crate::traits::Cost;

/// Which cells count as adjacent during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Edge-adjacent cells only.
    #[default]
    Four,
    /// Edge- and corner-adjacent cells. A diagonal step is only allowed when
    /// both cells it cuts past can be entered.
    Eight,
}

impl Connectivity {
    /// Admissible step-count estimate between two cells for unit straight
    /// steps (and √2 diagonal steps).
    #[inline]
    pub fn heuristic(self, a: Point, b: Point) -> Cost {
        match self {
            Self::Four => manhattan(a, b) as Cost,
            Self::Eight => octile(a, b),
        }
    }
}

/// How a [`NavMap`](crate::NavMap) lays its grid over the world.
///
/// Cell `(x, y)` covers world-space `[origin + (x, y) * cell_size,
/// origin + (x + 1, y + 1) * cell_size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Side length of one cell in world units.
    pub cell_size: f32,
    /// World position of the top-left corner of cell (0, 0).
    pub origin: WorldPoint,
    pub connectivity: Connectivity,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            origin: WorldPoint::ZERO,
            connectivity: Connectivity::Four,
        }
    }
}

impl NavConfig {
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_origin(mut self, origin: WorldPoint) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::NonFiniteOrigin);
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = NavConfig::default()
            .with_cell_size(2.5)
            .with_origin(WorldPoint::new(-10.0, 4.0))
            .with_connectivity(Connectivity::Eight);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: NavConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: NavConfig = serde_json::from_str(r#"{"cell_size": 4.0}"#).unwrap();
        assert_eq!(back, NavConfig::default().with_cell_size(4.0));
    }
}
