//! Continuous world-space positions.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point on the terrain plane in world units.
///
/// `x` runs along grid columns and `y` along grid rows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance. Cheaper than [`distance`](Self::distance)
    /// when only comparing.
    #[inline]
    pub fn distance_squared(self, other: WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: WorldPoint) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Add for WorldPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = WorldPoint::new(1.0, 1.0);
        let b = WorldPoint::new(4.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn arithmetic() {
        let a = WorldPoint::new(1.5, -2.0);
        assert_eq!(a + WorldPoint::new(0.5, 2.0), WorldPoint::new(2.0, 0.0));
        assert_eq!(a - a, WorldPoint::ZERO);
        assert_eq!(a * 2.0, WorldPoint::new(3.0, -4.0));
    }

    #[test]
    fn finiteness() {
        assert!(WorldPoint::new(1.0, 2.0).is_finite());
        assert!(!WorldPoint::new(f32::NAN, 0.0).is_finite());
    }
}
