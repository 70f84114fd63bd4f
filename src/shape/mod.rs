//! Shapes produced by, and shape resources driving, the decomposition pipeline.

pub use self::ball::Ball;
pub use self::circle_shape::CircleShape;
pub use self::convex_polygon::ConvexPolygon;
pub use self::convex_polygon_shape::ConvexPolygonShape;
pub use self::decomposition::Decomposition;
pub use self::native_shape::NativeShape;
pub use self::polyline::Polyline;
pub use self::segment_polygon::SegmentPolygon;
pub use self::shape_data::{ShapeData, ShapeDataError, ShapeDataKind, ShapeType};
pub use self::shape_resource::{ShapeQuery, ShapeResource, TransformedShapeError};

mod ball;
mod circle_shape;
mod convex_polygon;
mod convex_polygon_shape;
mod decomposition;
mod native_shape;
mod polyline;
mod segment_polygon;
mod shape_data;
mod shape_resource;
