use crate::math::{Point, Real};
use crate::settings::PhysicsSettings;
use crate::shape::{
    Decomposition, NativeShape, SegmentPolygon, ShapeData, ShapeDataError, ShapeDataKind,
    ShapeQuery, ShapeResource, ShapeType, TransformedShapeError,
};
use super::shape_resource::FailureReport;
use alloc::sync::Arc;

/// A shape resource made of an arbitrary closed boundary.
///
/// The boundary is decomposed into segment polygons when it is configured.
/// Dynamic bodies get one native convex polygon per segment, static bodies
/// a single closed polyline.
///
/// The decomposition is shared: cloning this resource, or taking a
/// [`ConvexPolygonShape::decomposition`] snapshot, is cheap and never observes a
/// later reconfiguration.
#[derive(Clone, Debug)]
pub struct ConvexPolygonShape {
    settings: PhysicsSettings,
    decomposition: Option<Arc<Decomposition>>,
    unconfigured_reported: FailureReport,
}

impl Default for ConvexPolygonShape {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexPolygonShape {
    /// Creates an unconfigured shape using the default [`PhysicsSettings`].
    pub fn new() -> Self {
        Self::with_settings(PhysicsSettings::default())
    }

    /// Creates an unconfigured shape using the given settings.
    pub fn with_settings(settings: PhysicsSettings) -> Self {
        Self {
            settings,
            decomposition: None,
            unconfigured_reported: FailureReport::default(),
        }
    }

    /// Creates a shape configured with the given boundary.
    pub fn from_points(points: &[Point<Real>]) -> Result<Self, ShapeDataError> {
        let mut result = Self::new();
        result.set_points(points)?;
        Ok(result)
    }

    /// The settings used by the next configurations of this shape.
    #[inline]
    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// Changes the settings used by the next configurations of this shape.
    ///
    /// The current decomposition keeps the settings it was built with.
    pub fn set_settings(&mut self, settings: PhysicsSettings) {
        self.settings = settings;
    }

    /// Replaces the boundary of this shape.
    ///
    /// Nothing changes if the boundary is rejected.
    pub fn set_points(&mut self, points: &[Point<Real>]) -> Result<(), ShapeDataError> {
        match Decomposition::new(points, &self.settings) {
            Ok(decomposition) => {
                log::debug!(
                    "Configured convex polygon shape: {} points, {} after welding, {} segments.",
                    points.len(),
                    decomposition.boundary().len(),
                    decomposition.segments().len()
                );
                self.decomposition = Some(Arc::new(decomposition));
                Ok(())
            }
            Err(err) => {
                log::error!("Rejected convex polygon data ({} points): {}", points.len(), err);
                Err(err)
            }
        }
    }

    /// The normalized boundary, or `None` if this shape was never configured.
    #[inline]
    pub fn points(&self) -> Option<&[Point<Real>]> {
        self.decomposition.as_deref().map(Decomposition::boundary)
    }

    /// The segment polygons of the current decomposition.
    #[inline]
    pub fn segments(&self) -> &[SegmentPolygon] {
        self.decomposition
            .as_deref()
            .map(Decomposition::segments)
            .unwrap_or(&[])
    }

    /// A snapshot of the current decomposition.
    #[inline]
    pub fn decomposition(&self) -> Option<Arc<Decomposition>> {
        self.decomposition.clone()
    }

    /// Whether this shape was successfully configured at least once.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.decomposition.is_some()
    }
}

impl ShapeResource for ConvexPolygonShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexPolygon
    }

    fn set_data(&mut self, data: ShapeData) -> Result<(), ShapeDataError> {
        match data {
            ShapeData::Points(points) => self.set_points(&points),
            other => {
                let err = ShapeDataError::InvalidInputType {
                    expected: ShapeDataKind::Points,
                    found: other.kind(),
                };
                log::error!("Rejected convex polygon data: {}", err);
                Err(err)
            }
        }
    }

    fn data(&self) -> Option<ShapeData> {
        self.points().map(|points| ShapeData::Points(points.to_vec()))
    }

    fn shape_count(&self, is_static: bool) -> usize {
        self.decomposition
            .as_ref()
            .map_or(0, |decomposition| decomposition.shape_count(is_static))
    }

    fn transformed_shape(&self, query: &ShapeQuery) -> Result<NativeShape, TransformedShapeError> {
        self.decomposition
            .as_ref()
            .ok_or(TransformedShapeError::Unconfigured)?
            .transformed_shape(query)
    }

    fn mark_failure_reported(&self, query: &ShapeQuery) -> bool {
        match &self.decomposition {
            Some(decomposition) => decomposition.mark_failure_reported(query),
            None => self.unconfigured_reported.mark(),
        }
    }
}
