use crate::math::{Point, Real};
use crate::settings::MAX_POLYGON_VERTICES;
use alloc::vec::Vec;
use arrayvec::ArrayVec;

#[inline]
fn is_unique(candidate: &Point<Real>, kept: &[Point<Real>], threshold_sq: Real) -> bool {
    !kept
        .iter()
        .any(|pt| na::distance_squared(candidate, pt) < threshold_sq)
}

/// Removes the points lying closer than `sqrt(threshold_sq)` from a point kept before them.
///
/// Points are scanned in order and each one is only compared against the
/// points already kept, so the first occurrence of a cluster always wins and
/// the relative order of the kept points is preserved.
pub fn weld_points(points: &[Point<Real>], threshold_sq: Real) -> Vec<Point<Real>> {
    let mut welded = Vec::with_capacity(points.len());

    for pt in points {
        if is_unique(pt, &welded, threshold_sq) {
            welded.push(*pt);
        }
    }

    welded
}

/// Same as [`weld_points`] but writes into a fixed-size buffer.
///
/// Only the first [`MAX_POLYGON_VERTICES`] points of `points` are considered.
pub fn weld_points_bounded(
    points: &[Point<Real>],
    threshold_sq: Real,
) -> ArrayVec<Point<Real>, MAX_POLYGON_VERTICES> {
    let mut welded = ArrayVec::new();

    for pt in points.iter().take(MAX_POLYGON_VERTICES) {
        if is_unique(pt, &welded, threshold_sq) {
            welded.push(*pt);
        }
    }

    welded
}
