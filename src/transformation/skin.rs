use crate::math::{Point, Real};
use crate::settings::MAX_POLYGON_VERTICES;
use arrayvec::ArrayVec;

/// Error indicating that the skin of a polygon could not be removed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkinOffsetError {
    /// The vertex lies at the origin, so it has no direction to be moved along.
    #[error("vertex {vertex} lies at the shape origin.")]
    DegenerateSkinOffset {
        /// Index of the vertex.
        vertex: usize,
    },
    /// The polygon has more vertices than a native polygon can hold.
    #[error(
        "the polygon has {0} vertices, more than the maximum of {max}.",
        max = MAX_POLYGON_VERTICES
    )]
    TooManyVertices(usize),
}

/// Moves each vertex toward the shape origin to compensate for the engine's skin.
///
/// The engine pads every polygon by `skin_radius`. Each vertex `p` is scaled by
/// `(|p| - skin_radius / 2) / |p|` so that the padded shape stays close to
/// the authored one.
pub fn remove_polygon_skin(
    points: &[Point<Real>],
    skin_radius: Real,
) -> Result<ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>, SkinOffsetError> {
    if points.len() > MAX_POLYGON_VERTICES {
        return Err(SkinOffsetError::TooManyVertices(points.len()));
    }

    let mut result = ArrayVec::new();

    for (vertex, pt) in points.iter().enumerate() {
        let length = pt.coords.norm();

        if length == 0.0 {
            return Err(SkinOffsetError::DegenerateSkinOffset { vertex });
        }

        let scale = (length - skin_radius / 2.0) / length;
        result.push(pt * scale);
    }

    Ok(result)
}
