use crate::math::{Point, Real};
use crate::settings::MAX_POLYGON_VERTICES;
use alloc::vec::Vec;
use arrayvec::ArrayVec;

/// A piece of a decomposed boundary, small enough to become one native polygon.
///
/// A segment polygon always has between 3 and [`MAX_POLYGON_VERTICES`]
/// vertices, taken in order from a counter-clockwise boundary. It is not
/// necessarily convex: convexity is only enforced once the hull is extracted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "Vec<Point<Real>>", into = "Vec<Point<Real>>")
)]
pub struct SegmentPolygon {
    points: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
}

impl SegmentPolygon {
    /// Creates a segment polygon from the given vertices.
    ///
    /// Returns `None` if there are less than 3 or more than
    /// [`MAX_POLYGON_VERTICES`] vertices.
    pub fn new(points: &[Point<Real>]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let points = ArrayVec::try_from(points).ok()?;
        Some(Self { points })
    }

    /// The vertices of this segment polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of vertices of this segment polygon.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // A segment polygon is never empty.
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

impl TryFrom<Vec<Point<Real>>> for SegmentPolygon {
    type Error = usize;

    /// Fails with the offending vertex count.
    fn try_from(points: Vec<Point<Real>>) -> Result<Self, usize> {
        Self::new(&points).ok_or(points.len())
    }
}

impl From<SegmentPolygon> for Vec<Point<Real>> {
    fn from(polygon: SegmentPolygon) -> Self {
        polygon.points.to_vec()
    }
}
