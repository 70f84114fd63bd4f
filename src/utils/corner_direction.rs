//! Winding direction of a corner formed by three points.

use crate::math::{Point, Real};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line, or a corner with non-finite coordinates)
    None,
}

/// Returns the direction of the turn `p1 -> p2 -> p3`.
///
/// Counter-clockwise example:
///     o p3
///    .  .
///   .     .
///  .        o p2
/// o p1
///
/// Clockwise example:
/// o p1
///  .        o p2
///   .     .
///    .  .
///     o p3
pub fn corner_direction(p1: &Point<Real>, p2: &Point<Real>, p3: &Point<Real>) -> Orientation {
    let v1 = p2 - p1;
    let v2 = p3 - p2;
    let cross: Real = v1.perp(&v2);

    match cross.partial_cmp(&0.0) {
        Some(Ordering::Greater) => Orientation::Ccw,
        Some(Ordering::Less) => Orientation::Cw,
        Some(Ordering::Equal) | None => Orientation::None,
    }
}
