use crate::math::{Point, Real};
use alloc::vec::Vec;
use core::fmt;

/// Enum representing the kind of a shape resource.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A boundary decomposed into convex polygons.
    ConvexPolygon,
    /// A circle.
    Circle,
}

/// The kind of payload carried by a [`ShapeData`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeDataKind {
    /// An array of points.
    Points,
    /// A single scalar radius.
    Radius,
}

impl fmt::Display for ShapeDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeDataKind::Points => write!(f, "points"),
            ShapeDataKind::Radius => write!(f, "radius"),
        }
    }
}

/// The dynamic payload a resource layer hands over to configure a shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeData {
    /// An ordered list of points, e.g., the boundary of a polygon.
    Points(Vec<Point<Real>>),
    /// A radius, e.g., of a circle.
    Radius(Real),
}

impl ShapeData {
    /// The kind of payload carried by this data.
    pub fn kind(&self) -> ShapeDataKind {
        match self {
            ShapeData::Points(_) => ShapeDataKind::Points,
            ShapeData::Radius(_) => ShapeDataKind::Radius,
        }
    }
}

impl From<Vec<Point<Real>>> for ShapeData {
    fn from(points: Vec<Point<Real>>) -> Self {
        ShapeData::Points(points)
    }
}

/// Error indicating that a shape resource could not be configured.
///
/// When this is returned, the previously configured shape, if any, is left
/// untouched.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeDataError {
    /// The data has the wrong kind for this shape.
    #[error("expected {expected} data, found {found}.")]
    InvalidInputType {
        /// The kind of data the shape accepts.
        expected: ShapeDataKind,
        /// The kind of data that was given.
        found: ShapeDataKind,
    },
    /// Less than 3 points were given, or remained after welding.
    #[error("a polygon needs at least 3 distinct points, found {count}.")]
    TooFewPoints {
        /// The number of points available.
        count: usize,
    },
    /// The boundary could not be cut into valid segment polygons.
    #[error("the segment starting at point {offset} would only have {len} points.")]
    SegmentationFailure {
        /// Index of the first boundary point of the invalid segment.
        offset: usize,
        /// Size of the invalid segment.
        len: usize,
    },
    /// The radius is not a finite positive number.
    #[error("invalid radius {0}.")]
    InvalidRadius(Real),
}
