use wayfind_core::Point;

use crate::Cost;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.abs_delta(b);
    d.x + d.y
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let d = a.abs_delta(b);
    d.x.max(d.y)
}

/// Octile distance: exact cost of an unobstructed 8-way walk where straight
/// steps cost 1 and diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> Cost {
    let d = a.abs_delta(b);
    let (lo, hi) = (d.x.min(d.y), d.x.max(d.y));
    (hi - lo) as Cost + lo as Cost * std::f32::consts::SQRT_2
}
