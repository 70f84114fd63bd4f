use crate::math::{Point, Real};
use crate::settings::{MAX_POLYGON_VERTICES, SEGMENT_REMAINDER_BALANCE};
use crate::shape::{SegmentPolygon, ShapeDataError};
use alloc::vec::Vec;

/// Computes the sizes of the chunks a boundary of `len` points is cut into.
///
/// Chunks are carved greedily with at most `max_vertices` points each. When
/// a chunk would leave between 1 and [`SEGMENT_REMAINDER_BALANCE`] points
/// behind, it gives that many points back to the next chunk so the boundary
/// does not end with a tiny fragment.
///
/// `max_vertices` is clamped to `[3, MAX_POLYGON_VERTICES]`.
pub fn segment_sizes(len: usize, max_vertices: usize) -> Result<Vec<usize>, ShapeDataError> {
    if len < 3 {
        return Err(ShapeDataError::TooFewPoints { count: len });
    }

    let max_vertices = max_vertices.clamp(3, MAX_POLYGON_VERTICES);
    let mut sizes = Vec::with_capacity(len / 3 + 1);
    let mut i = 0;

    while i < len {
        let mut size = max_vertices.min(len - i);
        let remaining = len - (i + size);

        if remaining != 0 && remaining <= SEGMENT_REMAINDER_BALANCE {
            size = size.saturating_sub(SEGMENT_REMAINDER_BALANCE);
        }

        if size < 3 {
            return Err(ShapeDataError::SegmentationFailure {
                offset: i,
                len: size,
            });
        }

        sizes.push(size);
        i += size;
    }

    Ok(sizes)
}

/// Cuts a counter-clockwise boundary into consecutive segment polygons.
///
/// The segments cover `points` in order, without overlap or gap, and each of
/// them has between 3 and `max_vertices` points (see [`segment_sizes`]).
/// Nothing is returned unless the whole boundary could be segmented.
pub fn segment_boundary(
    points: &[Point<Real>],
    max_vertices: usize,
) -> Result<Vec<SegmentPolygon>, ShapeDataError> {
    let sizes = segment_sizes(points.len(), max_vertices)?;
    let mut segments = Vec::with_capacity(sizes.len());
    let mut i = 0;

    for size in sizes {
        let segment = SegmentPolygon::new(&points[i..i + size]).ok_or(
            ShapeDataError::SegmentationFailure {
                offset: i,
                len: size,
            },
        )?;
        segments.push(segment);
        i += size;
    }

    Ok(segments)
}
