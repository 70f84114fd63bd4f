use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// For a counter-clockwise polygon, this is the outward normal of the edge
/// going from `pts[0]` to `pts[1]`.
///
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<Unit<Vector<Real>>> {
    let ab = pts[1] - pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    Unit::try_new(res, DEFAULT_EPSILON)
}
