use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::settings::MAX_POLYGON_VERTICES;
use crate::utils::{self, Orientation};
use arrayvec::ArrayVec;
use na::Unit;

/// A strictly convex polygon with at most [`MAX_POLYGON_VERTICES`] vertices.
///
/// This is the native polygon shape handed to the engine. It can only be built
/// through [`ConvexPolygon::try_new`] which rejects any vertex set the engine
/// would not accept.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
    normals: ArrayVec<Unit<Vector<Real>>, MAX_POLYGON_VERTICES>,
    centroid: Point<Real>,
    area: Real,
}

impl ConvexPolygon {
    /// Creates a convex polygon from a counter-clockwise convex polyline.
    ///
    /// Returns `None` if:
    /// - there are less than 3 or more than [`MAX_POLYGON_VERTICES`] points;
    /// - an edge has a zero length;
    /// - a vertex does not lie strictly on the left of every edge it isn't part of;
    /// - the area of the polygon is too small.
    pub fn try_new(points: &[Point<Real>]) -> Option<Self> {
        let n = points.len();
        if n < 3 || n > MAX_POLYGON_VERTICES {
            return None;
        }

        let mut normals = ArrayVec::new();

        for i1 in 0..n {
            let i2 = (i1 + 1) % n;
            normals.push(utils::ccw_face_normal([&points[i1], &points[i2]])?);
        }

        for i1 in 0..n {
            let i2 = (i1 + 1) % n;

            for (k, pt) in points.iter().enumerate() {
                if k == i1 || k == i2 {
                    continue;
                }

                if utils::corner_direction(&points[i1], &points[i2], pt) != Orientation::Ccw {
                    return None;
                }
            }
        }

        // Triangle fan around the first vertex.
        let mut area = 0.0;
        let mut weighted_center = Vector::zeros();
        let origin = points[0];

        for i in 1..n - 1 {
            let e1 = points[i] - origin;
            let e2 = points[i + 1] - origin;
            let triangle_area = e1.perp(&e2) / 2.0;
            area += triangle_area;
            weighted_center += (e1 + e2) * (triangle_area / 3.0);
        }

        if area <= DEFAULT_EPSILON {
            return None;
        }

        Some(ConvexPolygon {
            points: ArrayVec::try_from(points).ok()?,
            normals,
            centroid: origin + weighted_center / area,
            area,
        })
    }

    /// The vertices of this convex polygon, counter-clockwise.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The outward normals of the edges of this convex polygon.
    ///
    /// The `i`-th normal is the one of the edge from vertex `i` to vertex `i + 1`.
    #[inline]
    pub fn normals(&self) -> &[Unit<Vector<Real>>] {
        &self.normals
    }

    /// The area of this convex polygon.
    #[inline]
    pub fn area(&self) -> Real {
        self.area
    }

    /// The center of mass of this convex polygon.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }
}
