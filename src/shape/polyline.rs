use crate::math::{Point, Real};
use crate::utils;
use alloc::vec::Vec;

/// A native chain of segments.
///
/// Static bodies use a single closed polyline for a whole boundary instead of
/// one convex polygon per segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 2]>,
}

impl Polyline {
    /// Creates a closed polyline going through all the given vertices and
    /// back to the first one.
    ///
    /// Returns `None` if there are less than 3 vertices or if two consecutive
    /// vertices are equal.
    pub fn new_loop(vertices: Vec<Point<Real>>) -> Option<Self> {
        let n = vertices.len();
        if n < 3 {
            return None;
        }

        let mut indices = Vec::with_capacity(n);
        for i1 in 0..n {
            let i2 = (i1 + 1) % n;
            let _ = utils::ccw_face_normal([&vertices[i1], &vertices[i2]])?;
            indices.push([i1 as u32, i2 as u32]);
        }

        Some(Polyline { vertices, indices })
    }

    /// The number of segments of this polyline.
    pub fn num_segments(&self) -> usize {
        self.indices.len()
    }

    /// The vertex buffer of this polyline.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this polyline.
    pub fn indices(&self) -> &[[u32; 2]] {
        &self.indices
    }
}
