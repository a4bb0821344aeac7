//! Per-mover traversal rules passed as search context.

use std::f32::consts::SQRT_2;

use wayfind_core::Point;

use crate::traits::Cost;

/// Decides which cells a mover may enter and what each step costs.
///
/// `E` is the occupant handle stored on the map. Step costs should be at
/// least 1 per straight step (√2 per diagonal) for the map's heuristic to
/// stay admissible.
pub trait Traversal<E> {
    /// Whether a cell holding `occupant` may be entered.
    fn can_enter(&self, cell: Point, occupant: Option<E>) -> bool {
        let _ = cell;
        occupant.is_none()
    }

    /// Cost of stepping between two adjacent cells.
    fn step_cost(&self, from: Point, to: Point) -> Cost {
        if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 }
    }
}

/// Occupied cells are impassable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvoidOccupied;

impl<E> Traversal<E> for AvoidOccupied {}

/// Every in-bounds cell is passable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreOccupancy;

impl<E> Traversal<E> for IgnoreOccupancy {
    fn can_enter(&self, _cell: Point, _occupant: Option<E>) -> bool {
        true
    }
}

/// Cells held by anyone but the given mover are impassable, so a mover
/// covering several cells can route out of its own footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvoidOthers<E>(pub E);

impl<E: PartialEq> Traversal<E> for AvoidOthers<E> {
    fn can_enter(&self, _cell: Point, occupant: Option<E>) -> bool {
        occupant.is_none_or(|o| o == self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules() {
        let c = Point::new(1, 1);
        assert!(Traversal::<u32>::can_enter(&AvoidOccupied, c, None));
        assert!(!AvoidOccupied.can_enter(c, Some(3u32)));
        assert!(IgnoreOccupancy.can_enter(c, Some(3u32)));
        assert!(AvoidOthers(3u32).can_enter(c, Some(3)));
        assert!(!AvoidOthers(3u32).can_enter(c, Some(4)));
        assert!(AvoidOthers(3u32).can_enter(c, None));
    }

    #[test]
    fn default_step_costs() {
        let c = Point::new(1, 1);
        assert_eq!(Traversal::<u32>::step_cost(&AvoidOccupied, c, Point::new(2, 1)), 1.0);
        assert_eq!(Traversal::<u32>::step_cost(&AvoidOccupied, c, Point::new(2, 2)), SQRT_2);
    }
}
