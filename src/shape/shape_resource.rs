use crate::shape::{NativeShape, ShapeData, ShapeDataError, ShapeType};
use crate::transformation::{ConvexHullError, SkinOffsetError};
use crate::utils::PointTransform;
use core::sync::atomic::{AtomicBool, Ordering};

/// Error indicating that no native shape could be produced for a query.
///
/// This only affects the query that returned it: the caller is expected to
/// simulate the step without that shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformedShapeError {
    /// The shape resource was never successfully configured.
    #[error("the shape has not been configured.")]
    Unconfigured,
    /// The queried shape does not exist.
    #[error("shape index {index} is out of bounds, the resource has {count} shapes.")]
    IndexOutOfBounds {
        /// The queried index.
        index: usize,
        /// The number of shapes of the resource for this kind of body.
        count: usize,
    },
    /// A vertex of the segment lies at the shape origin.
    #[error("vertex {vertex} lies at the shape origin, its skin cannot be removed.")]
    DegenerateSkinOffset {
        /// Index of the vertex in its segment polygon.
        vertex: usize,
    },
    /// The segment has more vertices than the skin removal step accepts.
    #[error("the segment has {count} vertices, too many to remove its skin.")]
    TooManyVertices {
        /// The number of vertices of the segment.
        count: usize,
    },
    /// The transformed vertices have no valid convex hull.
    #[error(transparent)]
    HullConstruction(#[from] ConvexHullError),
    /// The native shape constructor rejected the final vertex set.
    #[error("the native shape constructor rejected the vertices.")]
    NativeConstructionRejected,
}

impl From<SkinOffsetError> for TransformedShapeError {
    fn from(err: SkinOffsetError) -> Self {
        match err {
            SkinOffsetError::DegenerateSkinOffset { vertex } => {
                TransformedShapeError::DegenerateSkinOffset { vertex }
            }
            SkinOffsetError::TooManyVertices(count) => {
                TransformedShapeError::TooManyVertices { count }
            }
        }
    }
}

/// Identifies one native shape to build for a body.
#[derive(Copy, Clone)]
pub struct ShapeQuery<'a> {
    /// Index of the shape, in `0..resource.shape_count(is_static)`.
    pub index: usize,
    /// Transform from the shape's local space to the body space.
    pub transform: &'a dyn PointTransform,
    /// Whether the shape is requested for a static body.
    pub is_static: bool,
}

impl<'a> ShapeQuery<'a> {
    /// A query for the `index`-th shape of a dynamic or kinematic body.
    pub fn new(index: usize, transform: &'a dyn PointTransform) -> Self {
        Self {
            index,
            transform,
            is_static: false,
        }
    }

    /// A query for the single shape of a static body.
    pub fn static_body(transform: &'a dyn PointTransform) -> Self {
        Self {
            index: 0,
            transform,
            is_static: true,
        }
    }
}

/// A shape resource: authored geometry that produces native shapes on request.
///
/// Implementors keep their configured state when [`ShapeResource::set_data`]
/// fails, and never mutate it while answering queries.
pub trait ShapeResource: Send + Sync {
    /// The kind of this shape resource.
    fn shape_type(&self) -> ShapeType;

    /// Replaces the geometry of this shape.
    ///
    /// On failure, the previously configured geometry stays in place.
    fn set_data(&mut self, data: ShapeData) -> Result<(), ShapeDataError>;

    /// The configured geometry, or `None` if this shape was never configured.
    fn data(&self) -> Option<ShapeData>;

    /// The number of native shapes a body made of this resource needs.
    fn shape_count(&self, is_static: bool) -> usize;

    /// Builds the native shape identified by `query`.
    fn transformed_shape(&self, query: &ShapeQuery) -> Result<NativeShape, TransformedShapeError>;

    /// Records that the failure of `query` is being reported.
    ///
    /// Returns `true` if no failure of this shape was reported since it was
    /// last configured. The default implementation keeps no state and
    /// always returns `true`.
    fn mark_failure_reported(&self, _query: &ShapeQuery) -> bool {
        true
    }

    /// Builds the native shape identified by `query`, logging failures.
    ///
    /// A failure is logged as a warning the first time
    /// [`ShapeResource::mark_failure_reported`] allows it, at the debug level
    /// afterward.
    fn transformed_shape_or_log(&self, query: &ShapeQuery) -> Option<NativeShape> {
        match self.transformed_shape(query) {
            Ok(shape) => Some(shape),
            Err(err) => {
                let first = self.mark_failure_reported(query);
                log_query_failure(first, self.shape_type(), query, &err);
                None
            }
        }
    }
}

/// A flag raised by the first reported failure of a shape.
///
/// Cloning gives a flag that was never raised.
#[derive(Debug, Default)]
pub(crate) struct FailureReport(AtomicBool);

impl FailureReport {
    /// Raises the flag, returning `true` if it was not raised yet.
    #[inline]
    pub(crate) fn mark(&self) -> bool {
        !self.0.swap(true, Ordering::Relaxed)
    }
}

impl Clone for FailureReport {
    fn clone(&self) -> Self {
        Self::default()
    }
}

pub(crate) fn log_query_failure(
    first: bool,
    shape_type: ShapeType,
    query: &ShapeQuery,
    err: &TransformedShapeError,
) {
    if first {
        log::warn!(
            "No {:?} shape produced for index {} (static: {}): {}",
            shape_type,
            query.index,
            query.is_static,
            err
        );
    } else {
        log::debug!(
            "No {:?} shape produced for index {} (static: {}): {}",
            shape_type,
            query.index,
            query.is_static,
            err
        );
    }
}
