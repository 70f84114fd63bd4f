//! Normalization, welding, segmentation and hull extraction of 2D boundaries.
//!
//! A boundary goes through [`make_counterclockwise`], [`weld_points`] and
//! [`segment_boundary`] once, when it is configured. Each segment then goes
//! through [`remove_polygon_skin`] and [`convex_hull2`] every time a
//! transformed native shape is requested.

pub use self::convex_hull2::{convex_hull2, convex_hull2_idx, ConvexHullError};
pub use self::orientation::{make_counterclockwise, signed_area};
pub use self::segmentation::{segment_boundary, segment_sizes};
pub use self::skin::{remove_polygon_skin, SkinOffsetError};
pub use self::weld::{weld_points, weld_points_bounded};

mod convex_hull2;
mod orientation;
mod segmentation;
mod skin;
mod weld;
