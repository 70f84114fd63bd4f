use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Computes the signed area of a closed polygon.
///
/// The sum runs over `x_j * y_i - x_i * y_j` for each edge `(i, j = i + 1)`,
/// so a **positive** result means the polygon winds clockwise. The sum is
/// pushed away from zero before being halved, which keeps the sign usable
/// for degenerate (flat) polygons and the result safe to divide by.
pub fn signed_area(points: &[Point<Real>]) -> Real {
    let mut sum = 0.0;

    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[j].x * points[i].y - points[i].x * points[j].y;
    }

    ensure_non_zero(sum) / 2.0
}

fn ensure_non_zero(value: Real) -> Real {
    if value >= 0.0 && value < DEFAULT_EPSILON {
        DEFAULT_EPSILON
    } else if value < 0.0 && value > -DEFAULT_EPSILON {
        -DEFAULT_EPSILON
    } else {
        value
    }
}

/// Reverses `points` in-place if they describe a clockwise polygon.
///
/// Returns `true` if the points were reversed.
pub fn make_counterclockwise(points: &mut [Point<Real>]) -> bool {
    if signed_area(points) > 0.0 {
        points.reverse();
        true
    } else {
        false
    }
}
