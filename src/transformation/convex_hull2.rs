use crate::math::{Point, Real};
use crate::settings::MAX_POLYGON_VERTICES;
use crate::transformation::weld_points_bounded;
use arrayvec::ArrayVec;

/// Error indicating that no valid convex hull could be extracted.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexHullError {
    /// Less than 3 points remained after welding.
    #[error("the polygon has {0} vertices after welding, at least 3 are needed.")]
    TooFewPoints(usize),
    /// The wrap did not close within the vertex budget of a native polygon.
    #[error("the convex hull did not close within {max} vertices.", max = MAX_POLYGON_VERTICES)]
    TooManyHullVertices,
    /// The hull has less than 3 vertices, e.g., because all the points are collinear.
    #[error("the convex hull is degenerate, it only has {0} vertices.")]
    Degenerate(usize),
}

/// Computes the convex hull of at most [`MAX_POLYGON_VERTICES`] points.
///
/// The points are welded with `weld_threshold_sq` first (see
/// [`weld_points_bounded`]). The hull is returned counter-clockwise, starting
/// with the rightmost point (the lowest one if several share the largest x).
pub fn convex_hull2(
    points: &[Point<Real>],
    weld_threshold_sq: Real,
) -> Result<ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>, ConvexHullError> {
    let welded = weld_points_bounded(points, weld_threshold_sq);
    let hull = convex_hull2_idx(&welded)?;
    Ok(hull.into_iter().map(|i| welded[i]).collect())
}

/// Computes the convex hull of a set of already welded points, by gift wrapping.
///
/// Returns the indices of the hull vertices into `points`, counter-clockwise.
/// Collinear vertices are never part of the hull: on ties, the farthest
/// point is picked.
pub fn convex_hull2_idx(
    ps: &[Point<Real>],
) -> Result<ArrayVec<usize, MAX_POLYGON_VERTICES>, ConvexHullError> {
    let n = ps.len();

    if n < 3 {
        return Err(ConvexHullError::TooFewPoints(n));
    }

    // Find the rightmost point, the hull starts there.
    let mut i0 = 0;
    let mut x0 = ps[0].x;
    for i in 1..n {
        let x = ps[i].x;
        if x > x0 || (x == x0 && ps[i].y < ps[i0].y) {
            i0 = i;
            x0 = x;
        }
    }

    let mut hull = ArrayVec::<usize, MAX_POLYGON_VERTICES>::new();
    let mut ih = i0;

    loop {
        if hull.try_push(ih).is_err() {
            log::debug!("Cannot compute convex hull: more than {MAX_POLYGON_VERTICES} vertices.");
            return Err(ConvexHullError::TooManyHullVertices);
        }

        // Find the point such that every other point lies on its left.
        let mut ie = 0;
        for j in 1..n {
            if ie == ih {
                ie = j;
                continue;
            }

            let r = ps[ie] - ps[ih];
            let v = ps[j] - ps[ih];
            let c = r.perp(&v);

            if c < 0.0 {
                ie = j;
            }

            // Collinearity check.
            if c == 0.0 && v.norm_squared() > r.norm_squared() {
                ie = j;
            }
        }

        ih = ie;

        if ie == i0 {
            break;
        }
    }

    if hull.len() < 3 {
        return Err(ConvexHullError::Degenerate(hull.len()));
    }

    Ok(hull)
}
