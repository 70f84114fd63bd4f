use crate::shape::{Ball, ConvexPolygon, Polyline};

/// A native engine shape, built for one simulation query.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeShape {
    /// A strictly convex polygon.
    ConvexPolygon(ConvexPolygon),
    /// A circle.
    Ball(Ball),
    /// A closed chain of segments.
    Polyline(Polyline),
}

impl NativeShape {
    /// Converts this shape to a convex polygon, if it is one.
    pub fn as_convex_polygon(&self) -> Option<&ConvexPolygon> {
        match self {
            NativeShape::ConvexPolygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Converts this shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            NativeShape::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    /// Converts this shape to a polyline, if it is one.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            NativeShape::Polyline(polyline) => Some(polyline),
            _ => None,
        }
    }
}
