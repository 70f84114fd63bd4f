//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::corner_direction::{corner_direction, Orientation};
pub use self::point_transform::PointTransform;

mod ccw_face_normal;
mod corner_direction;
mod point_transform;
