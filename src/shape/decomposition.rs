use crate::math::{Point, Real};
use crate::settings::{PhysicsSettings, MAX_POLYGON_VERTICES};
use crate::shape::{
    ConvexPolygon, NativeShape, Polyline, SegmentPolygon, ShapeDataError, ShapeQuery, ShapeType,
    TransformedShapeError,
};
use super::shape_resource::{log_query_failure, FailureReport};
use crate::transformation;
use crate::utils::PointTransform;
use alloc::boxed::Box;
use alloc::vec::Vec;
use arrayvec::ArrayVec;

/// A boundary cut into segment polygons, ready to produce native shapes.
///
/// A decomposition is immutable once built. Shape resources swap a whole new
/// decomposition in when they are reconfigured, so it can be shared between
/// bodies (and threads) that keep querying the geometry they started with.
#[derive(Debug)]
pub struct Decomposition {
    boundary: Vec<Point<Real>>,
    segments: Vec<SegmentPolygon>,
    settings: PhysicsSettings,
    // Raised once the failure of the matching query was logged loudly.
    segment_failure_reported: Box<[FailureReport]>,
    loop_failure_reported: FailureReport,
    out_of_bounds_reported: FailureReport,
}

impl Decomposition {
    /// Normalizes, welds and segments the given boundary.
    ///
    /// The boundary is made counter-clockwise, then points closer than the
    /// ingestion weld distance of `settings` are merged, then the result is cut
    /// into segment polygons of at most `settings.segment_max_vertices()`
    /// points.
    pub fn new(points: &[Point<Real>], settings: &PhysicsSettings) -> Result<Self, ShapeDataError> {
        if points.len() < 3 {
            return Err(ShapeDataError::TooFewPoints {
                count: points.len(),
            });
        }

        let mut oriented = points.to_vec();
        let _ = transformation::make_counterclockwise(&mut oriented);

        let boundary =
            transformation::weld_points(&oriented, settings.ingestion_weld_threshold_sq());
        if boundary.len() < 3 {
            return Err(ShapeDataError::TooFewPoints {
                count: boundary.len(),
            });
        }

        let segments =
            transformation::segment_boundary(&boundary, settings.segment_max_vertices())?;
        let segment_failure_reported = segments
            .iter()
            .map(|_| FailureReport::default())
            .collect();

        Ok(Self {
            boundary,
            segments,
            settings: *settings,
            segment_failure_reported,
            loop_failure_reported: FailureReport::default(),
            out_of_bounds_reported: FailureReport::default(),
        })
    }

    /// The counter-clockwise, welded boundary.
    #[inline]
    pub fn boundary(&self) -> &[Point<Real>] {
        &self.boundary
    }

    /// The segment polygons covering the boundary, in boundary order.
    #[inline]
    pub fn segments(&self) -> &[SegmentPolygon] {
        &self.segments
    }

    /// The settings this decomposition was built with.
    #[inline]
    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// The number of native shapes needed for a body.
    ///
    /// Static bodies use a single closed polyline, other bodies one convex
    /// polygon per segment.
    #[inline]
    pub fn shape_count(&self, is_static: bool) -> usize {
        if is_static {
            1
        } else {
            self.segments.len()
        }
    }

    fn segment(&self, index: usize) -> Result<&SegmentPolygon, TransformedShapeError> {
        self.segments
            .get(index)
            .ok_or(TransformedShapeError::IndexOutOfBounds {
                index,
                count: self.segments.len(),
            })
    }

    /// Computes the convex hull of the `index`-th segment once its skin is
    /// removed and `transform` is applied.
    pub fn transformed_hull<T: PointTransform + ?Sized>(
        &self,
        index: usize,
        transform: &T,
    ) -> Result<ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>, TransformedShapeError> {
        let segment = self.segment(index)?;
        let mut points =
            transformation::remove_polygon_skin(segment.points(), self.settings.skin_radius())?;

        for pt in &mut points {
            *pt = transform.transform_point(pt);
        }

        Ok(transformation::convex_hull2(
            &points,
            self.settings.hull_weld_threshold_sq(),
        )?)
    }

    /// Builds the native convex polygon of the `index`-th segment.
    pub fn transformed_polygon<T: PointTransform + ?Sized>(
        &self,
        index: usize,
        transform: &T,
    ) -> Result<ConvexPolygon, TransformedShapeError> {
        let hull = self.transformed_hull(index, transform)?;
        ConvexPolygon::try_new(&hull).ok_or(TransformedShapeError::NativeConstructionRejected)
    }

    /// Builds the closed polyline following the whole boundary.
    pub fn transformed_loop<T: PointTransform + ?Sized>(
        &self,
        transform: &T,
    ) -> Result<Polyline, TransformedShapeError> {
        let vertices = self
            .boundary
            .iter()
            .map(|pt| transform.transform_point(pt))
            .collect();
        Polyline::new_loop(vertices).ok_or(TransformedShapeError::NativeConstructionRejected)
    }

    /// Builds the native shape identified by `query`.
    pub fn transformed_shape(
        &self,
        query: &ShapeQuery,
    ) -> Result<NativeShape, TransformedShapeError> {
        if query.is_static {
            if query.index != 0 {
                return Err(TransformedShapeError::IndexOutOfBounds {
                    index: query.index,
                    count: 1,
                });
            }

            self.transformed_loop(query.transform).map(NativeShape::Polyline)
        } else {
            self.transformed_polygon(query.index, query.transform)
                .map(NativeShape::ConvexPolygon)
        }
    }

    /// Records that the failure of `query` is being reported.
    ///
    /// Returns `true` the first time for each segment (or for the loop of a
    /// static body). Out-of-bounds queries share a single flag.
    pub fn mark_failure_reported(&self, query: &ShapeQuery) -> bool {
        let report = if query.is_static && query.index == 0 {
            &self.loop_failure_reported
        } else if query.is_static {
            &self.out_of_bounds_reported
        } else {
            self.segment_failure_reported
                .get(query.index)
                .unwrap_or(&self.out_of_bounds_reported)
        };
        report.mark()
    }

    /// Builds the native shape identified by `query`, logging failures.
    ///
    /// The first failure of each shape is logged as a warning, the following
    /// ones only at the debug level since they will usually repeat every
    /// step until the shape is reconfigured.
    pub fn transformed_shape_or_log(&self, query: &ShapeQuery) -> Option<NativeShape> {
        match self.transformed_shape(query) {
            Ok(shape) => Some(shape),
            Err(err) => {
                let first = self.mark_failure_reported(query);
                log_query_failure(first, ShapeType::ConvexPolygon, query, &err);
                None
            }
        }
    }
}
